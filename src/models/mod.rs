pub mod field;
pub mod illness;
pub mod reason;
pub mod report;

pub use field::Field;
pub use illness::IllnessType;
pub use reason::Reason;
pub use report::{AbsenceReport, DocumentKind, FormEvent, UploadSlot};
