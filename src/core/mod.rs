pub mod duration;
pub mod payload;
pub mod submit;
pub mod validate;
pub mod visibility;
