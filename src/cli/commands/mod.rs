pub mod compose;
pub mod config;
pub mod duration;
pub mod form;
pub mod init;
pub mod preview;
pub mod roster;
pub mod submit;
