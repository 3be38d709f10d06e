//! Delivery of the JSON body to the spreadsheet endpoint.
//!
//! The endpoint answers opaquely: neither status nor body say whether the row
//! was stored. A transport therefore only reports whether the request could be
//! made at all.

use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

pub trait Transport {
    /// POST `body` as JSON to `url`. `Ok` means the request went out.
    fn post_json(&self, url: &str, body: &str) -> AppResult<()>;
}

/// Real HTTP transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("kehadiran/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: &str) -> AppResult<()> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .map_err(|e| AppError::Transport(e.to_string()))?;

        // Not inspected: the script replies the same way whatever happened.
        log::debug!("endpoint answered {}", response.status());
        Ok(())
    }
}

/// Prints the body instead of sending it (`submit --dry-run`).
pub struct DryRunTransport;

impl Transport for DryRunTransport {
    fn post_json(&self, url: &str, body: &str) -> AppResult<()> {
        log::info!("dry run: not posting to {url}");
        let value: serde_json::Value = serde_json::from_str(body)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        Ok(())
    }
}
