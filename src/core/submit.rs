use crate::core::payload::SubmissionPayload;
use crate::core::validate::{ValidationError, validate};
use crate::errors::{AppError, AppResult};
use crate::message::{compose, message_link};
use crate::models::report::{AbsenceReport, FormEvent};
use crate::roster::Roster;
use crate::transport::Transport;
use crate::utils::date::timestamp_now;
use chrono::NaiveDate;
use std::cell::Cell;

/// Generic notice shown when sending fails; the form is kept for a retry.
pub const MSG_SEND_FAILED: &str =
    "Ralat menghantar maklumat. Sila cuba lagi atau hubungi pentadbir.";
pub const MSG_SENT: &str = "Maklumat berjaya dihantar! Terima kasih.";

/// Settings of the submission pipeline.
#[derive(Debug, Clone)]
pub struct SubmitOptions {
    pub endpoint_url: String,
    pub class_label: String,
    /// Messaging deep-link prefix; `None` disables the outbound link.
    pub message_prefix: Option<String>,
    /// Earliest allowed start/end date; `None` allows any date.
    pub min_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request went out. Delivery itself cannot be confirmed.
    Sent {
        payload: SubmissionPayload,
        message: String,
        message_link: Option<String>,
    },
    /// Nothing was sent; the field needs attention.
    Invalid(ValidationError),
    /// Encoding or transport failed; the report is unchanged.
    Failed(String),
}

/// Resets the in-flight flag when the submission ends, however it ends.
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct Submitter<T: Transport> {
    transport: T,
    opts: SubmitOptions,
    roster: Option<Roster>,
    submitting: Cell<bool>,
}

impl<T: Transport> Submitter<T> {
    /// `roster` limits the student to known names when given.
    pub fn new(transport: T, opts: SubmitOptions, roster: Option<Roster>) -> Self {
        Self {
            transport,
            opts,
            roster,
            submitting: Cell::new(false),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    fn begin(&self) -> AppResult<InFlight<'_>> {
        if self.submitting.replace(true) {
            return Err(AppError::Busy);
        }
        Ok(InFlight(&self.submitting))
    }

    /// Validate, serialize and send the report.
    ///
    /// On `Sent` the report is reset to empty. The only `Err` is
    /// [`AppError::Busy`], returned while another submission is running.
    pub fn submit(&self, report: &mut AbsenceReport) -> AppResult<SubmitOutcome> {
        let _guard = self.begin()?;

        if let Err(e) = validate(report, self.roster.as_ref(), self.opts.min_date) {
            log::debug!("validation failed on {:?}", e.field);
            return Ok(SubmitOutcome::Invalid(e));
        }

        let payload = SubmissionPayload::build(report, timestamp_now());
        let body = match payload.to_json() {
            Ok(b) => b,
            Err(e) => {
                log::error!("cannot serialize submission: {e}");
                return Ok(SubmitOutcome::Failed(e.to_string()));
            }
        };

        if let Err(e) = self.transport.post_json(&self.opts.endpoint_url, &body) {
            log::error!("error submitting form: {e}");
            return Ok(SubmitOutcome::Failed(e.to_string()));
        }
        log::debug!("submitted {} bytes to {}", body.len(), self.opts.endpoint_url);

        let message = compose(report, &self.opts.class_label);
        let link = self
            .opts
            .message_prefix
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| message_link(p, &message));

        report.apply(FormEvent::Reset);

        Ok(SubmitOutcome::Sent {
            payload,
            message,
            message_link: link,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::{Attachment, decode_data_url};
    use crate::models::field::Field;
    use crate::models::illness::IllnessType;
    use crate::models::reason::Reason;
    use crate::models::report::UploadSlot;
    use std::cell::RefCell;

    const URL: &str = "https://script.example.test/exec";

    /// Keeps every request in memory; optionally fails them all.
    #[derive(Default)]
    struct RecordingTransport {
        requests: RefCell<Vec<(String, String)>>,
        fail_with: Option<String>,
    }

    impl RecordingTransport {
        fn failing(reason: &str) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                fail_with: Some(reason.to_string()),
            }
        }

        fn count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl Transport for RecordingTransport {
        fn post_json(&self, url: &str, body: &str) -> AppResult<()> {
            if let Some(reason) = &self.fail_with {
                return Err(AppError::Transport(reason.clone()));
            }
            self.requests
                .borrow_mut()
                .push((url.to_string(), body.to_string()));
            Ok(())
        }
    }

    fn opts() -> SubmitOptions {
        SubmitOptions {
            endpoint_url: URL.into(),
            class_label: "4 Satria".into(),
            message_prefix: Some("https://wa.me/60123456789".into()),
            min_date: None,
        }
    }

    fn aisyah_flu() -> AbsenceReport {
        let mut r = AbsenceReport::new();
        r.apply(FormEvent::StudentSelected(Some("Aisyah".into())));
        r.apply(FormEvent::ReasonChanged(Some(Reason::Sakit)));
        r.apply(FormEvent::IllnessChanged(Some(IllnessType::Flu)));
        r.apply(FormEvent::StartDateChanged(NaiveDate::from_ymd_opt(2024, 3, 5)));
        r.apply(FormEvent::EndDateChanged(NaiveDate::from_ymd_opt(2024, 3, 7)));
        r
    }

    #[test]
    fn sent_resets_report_and_builds_link() {
        let s = Submitter::new(RecordingTransport::default(), opts(), None);
        let mut r = aisyah_flu();

        let (payload, message, message_link) = match s.submit(&mut r).unwrap() {
            SubmitOutcome::Sent {
                payload,
                message,
                message_link,
            } => (payload, message, message_link),
            other => panic!("expected Sent, got {other:?}"),
        };

        assert_eq!(payload.duration, "3 hari");
        assert!(message.contains("Jumlah Hari: 3 hari"));
        assert!(message.contains("Jenis Sakit: Flu"));
        assert!(message.contains("Tarikh: 05/03/2024 - 07/03/2024"));
        let link = message_link.unwrap();
        assert!(link.starts_with("https://wa.me/60123456789?text="));
        assert!(link.contains("Jumlah%20Hari%3A%203%20hari"));

        assert_eq!(r, AbsenceReport::default());
        assert!(!s.is_submitting());

        let sent = s.transport().requests.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, URL);
        let body: serde_json::Value = serde_json::from_str(&sent[0].1).unwrap();
        assert_eq!(body["studentName"], "Aisyah");
        assert_eq!(body["illnessType"], "Flu");
    }

    #[test]
    fn other_reason_without_file_is_sent() {
        let s = Submitter::new(RecordingTransport::default(), opts(), None);
        let mut r = AbsenceReport::new();
        r.apply(FormEvent::StudentSelected(Some("Aisyah".into())));
        r.apply(FormEvent::ReasonChanged(Some(Reason::LainLain)));
        r.apply(FormEvent::OtherReasonEntered("Family event".into()));
        r.apply(FormEvent::StartDateChanged(NaiveDate::from_ymd_opt(2024, 3, 5)));
        r.apply(FormEvent::EndDateChanged(NaiveDate::from_ymd_opt(2024, 3, 5)));

        match s.submit(&mut r).unwrap() {
            SubmitOutcome::Sent { payload, .. } => {
                assert_eq!(payload.illness_type, "-");
                assert_eq!(payload.reason, "Family event");
                assert!(payload.document.is_none());
            }
            other => panic!("expected Sent, got {other:?}"),
        }
    }

    #[test]
    fn invalid_sends_nothing_and_keeps_report() {
        let s = Submitter::new(RecordingTransport::default(), opts(), None);
        let mut r = aisyah_flu();
        r.apply(FormEvent::EndDateChanged(NaiveDate::from_ymd_opt(2024, 3, 1)));
        let before = r.clone();

        match s.submit(&mut r).unwrap() {
            SubmitOutcome::Invalid(e) => assert_eq!(e.field, Field::EndDate),
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert_eq!(s.transport().count(), 0);
        assert_eq!(r, before);
    }

    #[test]
    fn transport_failure_keeps_report_and_releases_guard() {
        let s = Submitter::new(RecordingTransport::failing("offline"), opts(), None);
        let mut r = aisyah_flu();
        let before = r.clone();

        match s.submit(&mut r).unwrap() {
            SubmitOutcome::Failed(reason) => assert!(reason.contains("offline")),
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(r, before);
        assert!(!s.is_submitting());
    }

    #[test]
    fn second_submit_while_in_flight_is_blocked() {
        let s = Submitter::new(RecordingTransport::default(), opts(), None);
        let mut r = aisyah_flu();

        let guard = s.begin().unwrap();
        assert!(matches!(s.submit(&mut r), Err(AppError::Busy)));
        assert_eq!(s.transport().count(), 0);
        drop(guard);

        assert!(matches!(s.submit(&mut r), Ok(SubmitOutcome::Sent { .. })));
    }

    #[test]
    fn no_prefix_no_link() {
        let mut o = opts();
        o.message_prefix = None;
        let s = Submitter::new(RecordingTransport::default(), o, None);
        let mut r = aisyah_flu();

        match s.submit(&mut r).unwrap() {
            SubmitOutcome::Sent { message_link, .. } => assert!(message_link.is_none()),
            other => panic!("expected Sent, got {other:?}"),
        }
    }

    #[test]
    fn attached_certificate_round_trips_through_body() {
        let s = Submitter::new(RecordingTransport::default(), opts(), None);
        let mut r = aisyah_flu();
        let bytes: Vec<u8> = (0..2048u32).map(|i| (i * 31 % 256) as u8).collect();
        r.apply(FormEvent::FileChosen(
            UploadSlot::Certificate,
            Some(Attachment::new("mc.pdf", bytes.clone())),
        ));

        s.submit(&mut r).unwrap();
        let sent = s.transport().requests.borrow();
        let body: serde_json::Value = serde_json::from_str(&sent[0].1).unwrap();
        let doc = body["document"].as_str().unwrap();
        assert_eq!(decode_data_url(doc).unwrap(), bytes);
        assert_eq!(body["documentType"], "MC");
        assert_eq!(body["fileName"], "mc.pdf");
    }
}
