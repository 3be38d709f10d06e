use crate::models::report::AbsenceReport;
use crate::utils::date::iso;
use serde::Serialize;

/// Flat JSON body posted to the spreadsheet endpoint.
///
/// Field order is the order the sheet script reads the keys in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub student_name: String,
    pub reason: String,
    pub start_date: String,
    pub end_date: String,
    /// Display text of the duration, e.g. "3 hari".
    pub duration: String,
    /// Illness subtype, its free text, or "-" when the reason is not illness.
    pub illness_type: String,
    /// Attached file as a base64 data URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// "MC" or "Surat".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    pub timestamp: String,
}

impl SubmissionPayload {
    pub fn build(report: &AbsenceReport, timestamp: impl Into<String>) -> Self {
        let file = report.selected_attachment();

        Self {
            student_name: report.student.clone().unwrap_or_default(),
            reason: report.effective_reason().unwrap_or_default(),
            start_date: report.start.map(iso).unwrap_or_default(),
            end_date: report.end.map(iso).unwrap_or_default(),
            duration: report.duration().display(),
            illness_type: report.effective_illness(),
            document: file.map(|f| f.to_data_url()),
            file_name: file.map(|f| f.file_name.clone()),
            file_type: file.map(|f| f.media_type.clone()),
            document_type: file.map(|_| report.document_kind().tag().to_string()),
            timestamp: timestamp.into(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::{Attachment, decode_data_url};
    use crate::models::illness::IllnessType;
    use crate::models::reason::Reason;
    use crate::models::report::{FormEvent, UploadSlot};
    use chrono::NaiveDate;

    const TS: &str = "2024-03-05T01:02:03.456Z";

    fn base(reason: Reason) -> AbsenceReport {
        let mut r = AbsenceReport::new();
        r.apply(FormEvent::StudentSelected(Some("Aisyah".into())));
        r.apply(FormEvent::ReasonChanged(Some(reason)));
        r.apply(FormEvent::StartDateChanged(NaiveDate::from_ymd_opt(2024, 3, 5)));
        r.apply(FormEvent::EndDateChanged(NaiveDate::from_ymd_opt(2024, 3, 7)));
        r
    }

    #[test]
    fn illness_with_certificate() {
        let mut r = base(Reason::Sakit);
        r.apply(FormEvent::IllnessChanged(Some(IllnessType::Flu)));
        let mc = Attachment::new("mc.jpg", vec![0xFF, 0xD8, 0xFF, 0x00]);
        r.apply(FormEvent::FileChosen(UploadSlot::Certificate, Some(mc.clone())));

        let p = SubmissionPayload::build(&r, TS);
        assert_eq!(p.student_name, "Aisyah");
        assert_eq!(p.reason, "Sakit");
        assert_eq!(p.start_date, "2024-03-05");
        assert_eq!(p.end_date, "2024-03-07");
        assert_eq!(p.duration, "3 hari");
        assert_eq!(p.illness_type, "Flu");
        assert_eq!(p.file_name.as_deref(), Some("mc.jpg"));
        assert_eq!(p.file_type.as_deref(), Some("image/jpeg"));
        assert_eq!(p.document_type.as_deref(), Some("MC"));

        let doc = p.document.as_deref().unwrap();
        assert_eq!(decode_data_url(doc).unwrap(), mc.bytes);
    }

    #[test]
    fn other_without_file_omits_document_keys() {
        let mut r = base(Reason::LainLain);
        r.apply(FormEvent::OtherReasonEntered("Family event".into()));

        let p = SubmissionPayload::build(&r, TS);
        assert_eq!(p.reason, "Family event");
        assert_eq!(p.illness_type, "-");

        let json = p.to_json().unwrap();
        assert_eq!(
            json,
            "{\"studentName\":\"Aisyah\",\"reason\":\"Family event\",\"startDate\":\"2024-03-05\",\
             \"endDate\":\"2024-03-07\",\"duration\":\"3 hari\",\"illnessType\":\"-\",\
             \"timestamp\":\"2024-03-05T01:02:03.456Z\"}"
        );
    }

    #[test]
    fn letter_slot_ignored_for_illness() {
        let mut r = base(Reason::Sakit);
        r.apply(FormEvent::IllnessChanged(Some(IllnessType::Demam)));
        r.apply(FormEvent::FileChosen(
            UploadSlot::Letter,
            Some(Attachment::new("surat.pdf", b"%PDF".to_vec())),
        ));

        let p = SubmissionPayload::build(&r, TS);
        assert!(p.document.is_none());
        assert!(p.document_type.is_none());
    }

    #[test]
    fn letter_tagged_surat() {
        let mut r = base(Reason::UrusanKeluarga);
        r.apply(FormEvent::FileChosen(
            UploadSlot::Letter,
            Some(Attachment::new("surat.pdf", b"%PDF-1.4".to_vec())),
        ));

        let p = SubmissionPayload::build(&r, TS);
        assert_eq!(p.reason, "Urusan Keluarga");
        assert_eq!(p.document_type.as_deref(), Some("Surat"));
        assert_eq!(p.file_type.as_deref(), Some("application/pdf"));
    }
}
