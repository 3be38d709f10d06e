//! Checks run before anything is sent: the dynamic required set, roster
//! membership, the earliest allowed date and the date order.

use crate::core::duration::end_date_validity;
use crate::errors::AppError;
use crate::models::field::Field;
use crate::models::report::{AbsenceReport, UploadSlot};
use crate::roster::Roster;
use crate::utils::date::format_dmy;
use chrono::NaiveDate;
use std::fmt;

pub const MSG_REQUIRED: &str = "Sila isi ruangan ini.";
pub const MSG_NOT_IN_ROSTER: &str = "Nama tiada dalam senarai murid.";

/// First field that blocks submission, with the message shown on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation {
            field: e.field,
            message: e.message,
        }
    }
}

const FORM_ORDER: [Field; 9] = [
    Field::Student,
    Field::Reason,
    Field::IllnessType,
    Field::OtherIllness,
    Field::OtherReason,
    Field::CertificateUpload,
    Field::LetterUpload,
    Field::StartDate,
    Field::EndDate,
];

fn is_filled(report: &AbsenceReport, field: Field) -> bool {
    match field {
        Field::Student => report.student.as_deref().is_some_and(|s| !s.trim().is_empty()),
        Field::Reason => report.reason.is_some(),
        Field::IllnessType => report.illness.is_some(),
        Field::OtherIllness => !report.other_illness.trim().is_empty(),
        Field::OtherReason => !report.other_reason.trim().is_empty(),
        Field::CertificateUpload => report.attachment(UploadSlot::Certificate).is_some(),
        Field::LetterUpload => report.attachment(UploadSlot::Letter).is_some(),
        Field::StartDate => report.start.is_some(),
        Field::EndDate => report.end.is_some(),
    }
}

/// Validate the report, stopping at the first failing field in form order.
///
/// `roster` restricts the student to known names; `min_date` is the earliest
/// date either end of the range may take.
pub fn validate(
    report: &AbsenceReport,
    roster: Option<&Roster>,
    min_date: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    let required = report.rules().required_fields();

    for field in FORM_ORDER {
        if required.contains(&field) && !is_filled(report, field) {
            return Err(ValidationError::new(field, MSG_REQUIRED));
        }

        match field {
            Field::Student => {
                if let (Some(r), Some(name)) = (roster, report.student.as_deref())
                    && !r.contains(name)
                {
                    return Err(ValidationError::new(field, MSG_NOT_IN_ROSTER));
                }
            }
            Field::StartDate | Field::EndDate => {
                let value = if field == Field::StartDate {
                    report.start
                } else {
                    report.end
                };
                if let (Some(min), Some(d)) = (min_date, value)
                    && d < min
                {
                    return Err(ValidationError::new(
                        field,
                        format!("Tarikh mesti pada atau selepas {}.", format_dmy(min)),
                    ));
                }
                if field == Field::EndDate
                    && let Some(msg) = end_date_validity(report.duration())
                {
                    return Err(ValidationError::new(field, msg));
                }
            }
            _ => {}
        }
    }

    Ok(())
}
