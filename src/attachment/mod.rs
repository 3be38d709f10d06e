//! Files picked in the upload controls: loading, media type, and the base64
//! data URL form in which they are previewed and submitted.

pub mod preview;

pub use preview::{Preview, PreviewSlot, PreviewTicket};

use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Build an attachment, guessing the media type from the file extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let media_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            media_type,
            bytes,
        }
    }

    /// Read a file from disk. Only the final path component is kept as name.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::Attachment(format!("not a file: {}", path.display())))?;

        let bytes = fs::read(path).map_err(|e| {
            AppError::Attachment(format!("cannot read '{}': {e}", path.display()))
        })?;

        log::debug!("read attachment {file_name} ({} bytes)", bytes.len());
        Ok(Self::new(file_name, bytes))
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }

    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }

    /// `data:<type>;base64,<payload>`, the same form a browser file reader yields.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.to_base64())
    }
}

/// Decode the bytes back out of a data URL (or a bare base64 string).
pub fn decode_data_url(encoded: &str) -> AppResult<Vec<u8>> {
    let payload = match encoded.strip_prefix("data:") {
        Some(rest) => {
            let (_, b64) = rest
                .split_once(";base64,")
                .ok_or_else(|| AppError::Attachment("data URL is not base64".into()))?;
            b64
        }
        None => encoded,
    };

    BASE64
        .decode(payload.trim())
        .map_err(|e| AppError::Attachment(format!("invalid base64: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_guessed_from_extension() {
        assert_eq!(Attachment::new("mc.jpg", vec![]).media_type, "image/jpeg");
        assert_eq!(Attachment::new("surat.pdf", vec![]).media_type, "application/pdf");
        assert_eq!(
            Attachment::new("nota", vec![]).media_type,
            "application/octet-stream"
        );
    }

    #[test]
    fn data_url_decodes_to_original_bytes() {
        let bytes: Vec<u8> = (0u8..=255).chain([0, 0, 13, 10]).collect();
        let a = Attachment::new("scan.png", bytes.clone());
        let url = a.to_data_url();

        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(decode_data_url(&url).unwrap(), bytes);
        assert_eq!(decode_data_url(&a.to_base64()).unwrap(), bytes);
    }

    #[test]
    fn decode_rejects_non_base64_data_url() {
        assert!(decode_data_url("data:text/plain,hello").is_err());
        assert!(decode_data_url("data:text/plain;base64,@@@").is_err());
    }

    #[test]
    fn from_path_reads_file() {
        let mut path = std::env::temp_dir();
        path.push("kehadiran_attachment_from_path.txt");
        fs::write(&path, "surat").unwrap();

        let a = Attachment::from_path(&path).unwrap();
        assert_eq!(a.file_name, "kehadiran_attachment_from_path.txt");
        assert_eq!(a.media_type, "text/plain");
        assert_eq!(a.bytes, b"surat");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn from_path_missing_file_is_error() {
        let err = Attachment::from_path(Path::new("/nonexistent/kehadiran/mc.jpg")).unwrap_err();
        assert!(matches!(err, AppError::Attachment(_)));
    }
}
