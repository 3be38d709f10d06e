//! Notification text sent to the class teacher, and the messaging-app link
//! that carries it.

use crate::models::report::{AbsenceReport, DocumentKind};
use crate::utils::date::format_dmy;

const HEADER: &str = "*NOTIFIKASI KETIDAKHADIRAN MURID*";
const CLOSING_CERTIFICATE: &str = "Sijil cuti sakit (MC) akan diserahkan kepada guru kelas.";
const CLOSING_LETTER: &str = "Surat daripada ibu bapa/penjaga akan diserahkan kepada guru kelas.";

/// Render the report as the notification text.
///
/// Pure: the same report and class label always give the same string.
pub fn compose(report: &AbsenceReport, class_label: &str) -> String {
    let dash = || "-".to_string();

    let mut lines: Vec<String> = vec![
        HEADER.to_string(),
        String::new(),
        format!("Nama: {}", report.student.clone().unwrap_or_else(dash)),
        format!("Kelas: {class_label}"),
        format!("Sebab: {}", report.effective_reason().unwrap_or_else(dash)),
    ];

    if report.reason.is_some_and(|r| r.is_illness()) {
        lines.push(format!("Jenis Sakit: {}", report.effective_illness()));
    }

    lines.push(format!(
        "Tarikh: {} - {}",
        report.start.map(format_dmy).unwrap_or_else(dash),
        report.end.map(format_dmy).unwrap_or_else(dash)
    ));
    lines.push(format!("Jumlah Hari: {}", report.duration().display()));
    lines.push(String::new());
    lines.push(
        match report.document_kind() {
            DocumentKind::Certificate => CLOSING_CERTIFICATE,
            DocumentKind::Letter => CLOSING_LETTER,
        }
        .to_string(),
    );

    lines.join("\n")
}

/// `<prefix>?text=<percent-encoded text>`
pub fn message_link(prefix: &str, text: &str) -> String {
    format!("{}?text={}", prefix, urlencoding::encode(text))
}
