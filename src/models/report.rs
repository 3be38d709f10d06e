use crate::attachment::Attachment;
use crate::core::duration::{self, DurationResult};
use crate::core::visibility::{self, FieldRules, UiDelta};
use crate::models::illness::IllnessType;
use crate::models::reason::Reason;
use chrono::NaiveDate;

/// Placeholder sent for fields that do not apply (e.g. illness type when not sick).
pub const NOT_APPLICABLE: &str = "-";

/// The two upload controls on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadSlot {
    Certificate,
    Letter,
}

/// Supporting document expected for the current reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Medical certificate ("MC"), expected when the reason is illness.
    Certificate,
    /// Letter from the parent or guardian ("Surat"), for every other reason.
    Letter,
}

impl DocumentKind {
    pub fn tag(&self) -> &'static str {
        match self {
            DocumentKind::Certificate => "MC",
            DocumentKind::Letter => "Surat",
        }
    }

    pub fn slot(&self) -> UploadSlot {
        match self {
            DocumentKind::Certificate => UploadSlot::Certificate,
            DocumentKind::Letter => UploadSlot::Letter,
        }
    }
}

/// One user action on the form.
#[derive(Debug, Clone)]
pub enum FormEvent {
    StudentSelected(Option<String>),
    ReasonChanged(Option<Reason>),
    IllnessChanged(Option<IllnessType>),
    OtherReasonEntered(String),
    OtherIllnessEntered(String),
    StartDateChanged(Option<NaiveDate>),
    EndDateChanged(Option<NaiveDate>),
    FileChosen(UploadSlot, Option<Attachment>),
    Reset,
}

/// In-memory answers of a single form fill.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbsenceReport {
    pub student: Option<String>,
    pub reason: Option<Reason>,
    pub illness: Option<IllnessType>,
    pub other_reason: String,
    pub other_illness: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub certificate: Option<Attachment>,
    pub letter: Option<Attachment>,
}

impl AbsenceReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a user event and return the visibility changes it causes.
    ///
    /// Changing the reason also clears the illness answers, so the nested
    /// "other illness" box never stays filled behind a hidden selector.
    pub fn apply(&mut self, event: FormEvent) -> UiDelta {
        match event {
            FormEvent::StudentSelected(name) => {
                self.student = name.filter(|n| !n.trim().is_empty());
                UiDelta::default()
            }
            FormEvent::ReasonChanged(reason) => {
                self.reason = reason;
                self.illness = None;
                self.other_illness.clear();
                visibility::on_reason_change(reason)
            }
            FormEvent::IllnessChanged(illness) => {
                self.illness = illness;
                visibility::on_illness_change(illness)
            }
            FormEvent::OtherReasonEntered(text) => {
                self.other_reason = text;
                UiDelta::default()
            }
            FormEvent::OtherIllnessEntered(text) => {
                self.other_illness = text;
                UiDelta::default()
            }
            FormEvent::StartDateChanged(d) => {
                self.start = d;
                UiDelta::default()
            }
            FormEvent::EndDateChanged(d) => {
                self.end = d;
                UiDelta::default()
            }
            FormEvent::FileChosen(UploadSlot::Certificate, file) => {
                self.certificate = file;
                UiDelta::default()
            }
            FormEvent::FileChosen(UploadSlot::Letter, file) => {
                self.letter = file;
                UiDelta::default()
            }
            FormEvent::Reset => {
                *self = Self::default();
                visibility::on_reason_change(None)
            }
        }
    }

    /// Visible and required controls for the current answers.
    pub fn rules(&self) -> FieldRules {
        FieldRules::for_selection(self.reason, self.illness)
    }

    pub fn duration(&self) -> DurationResult {
        duration::compute(self.start, self.end)
    }

    pub fn document_kind(&self) -> DocumentKind {
        match self.reason {
            Some(r) if r.is_illness() => DocumentKind::Certificate,
            _ => DocumentKind::Letter,
        }
    }

    /// The reason as reported: the free text when "Lain-Lain" was picked.
    pub fn effective_reason(&self) -> Option<String> {
        self.reason.map(|r| {
            if r.is_other() {
                self.other_reason.trim().to_string()
            } else {
                r.code().to_string()
            }
        })
    }

    /// The illness as reported, or `-` when the reason is not illness.
    pub fn effective_illness(&self) -> String {
        match (self.reason, self.illness) {
            (Some(Reason::Sakit), Some(i)) if i.is_other() => self.other_illness.trim().to_string(),
            (Some(Reason::Sakit), Some(i)) => i.code().to_string(),
            (Some(Reason::Sakit), None) => String::new(),
            _ => NOT_APPLICABLE.to_string(),
        }
    }

    pub fn attachment(&self, slot: UploadSlot) -> Option<&Attachment> {
        match slot {
            UploadSlot::Certificate => self.certificate.as_ref(),
            UploadSlot::Letter => self.letter.as_ref(),
        }
    }

    /// File from the upload control the current reason shows, if any.
    pub fn selected_attachment(&self) -> Option<&Attachment> {
        self.reason?;
        self.attachment(self.document_kind().slot())
    }
}
