//! Turns form arguments into the same sequence of events a user produces
//! when filling the form top to bottom.

use crate::attachment::Attachment;
use crate::cli::parser::FormArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::illness::IllnessType;
use crate::models::reason::Reason;
use crate::models::report::{AbsenceReport, FormEvent};
use crate::roster::Roster;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_optional_date;
use crate::utils::path::expand_tilde;

pub fn build_report(form: &FormArgs) -> AppResult<AbsenceReport> {
    let mut report = AbsenceReport::new();

    report.apply(FormEvent::StudentSelected(form.student.clone()));

    //
    // 1. Reason, then the nested illness selection
    //
    let reason = match &form.reason {
        Some(code) => Some(
            Reason::from_code(code).ok_or_else(|| AppError::InvalidReason(code.to_string()))?,
        ),
        None => None,
    };
    report.apply(FormEvent::ReasonChanged(reason));

    if let Some(code) = &form.illness {
        let illness =
            IllnessType::from_code(code).ok_or_else(|| AppError::InvalidIllness(code.to_string()))?;
        if !reason.is_some_and(|r| r.is_illness()) {
            warning(format!(
                "Illness type '{}' ignored: the reason is not Sakit",
                illness.code()
            ));
        }
        report.apply(FormEvent::IllnessChanged(Some(illness)));
    }

    if let Some(text) = &form.other_illness {
        report.apply(FormEvent::OtherIllnessEntered(text.clone()));
    }
    if let Some(text) = &form.other_reason {
        report.apply(FormEvent::OtherReasonEntered(text.clone()));
    }

    //
    // 2. Dates
    //
    report.apply(FormEvent::StartDateChanged(parse_optional_date(
        form.start.as_ref(),
    )?));
    report.apply(FormEvent::EndDateChanged(parse_optional_date(
        form.end.as_ref(),
    )?));

    //
    // 3. Document, into the upload control the reason shows
    //
    if let Some(path) = &form.file {
        let file = Attachment::from_path(&expand_tilde(path))?;
        info(format!("Lampiran: {} ({})", file.file_name, file.media_type));
        let target = report.document_kind().slot();
        report.apply(FormEvent::FileChosen(target, Some(file)));
    }

    Ok(report)
}

/// Load the roster; on failure warn once and continue with an empty one.
pub fn load_roster(form_roster: Option<&String>, cfg: &Config) -> Roster {
    let path = form_roster
        .map(|p| expand_tilde(p))
        .unwrap_or_else(|| cfg.roster_path());

    match Roster::load(&path, cfg.roster_skip_lines) {
        Ok(r) => r,
        Err(e) => {
            log::error!("error loading student data: {e}");
            warning("Ralat memuatkan senarai pelajar. Sila semak fail senarai murid.");
            Roster::default()
        }
    }
}
