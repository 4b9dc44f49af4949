use std::time::Duration;

use crate::common::constants::{FETCH_TIMEOUT_SECS, USER_AGENT};
use crate::common::error::Result;

/// Thin wrapper around reqwest shared by all station scrapers.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct FetchClient {
    client: reqwest::Client,
}

impl FetchClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    /// Issue one GET and return the body as text. Non-2xx statuses and
    /// timeouts are transport errors; invalid UTF-8 in the body is replaced
    /// rather than rejected.
    pub async fn get_text(&self, url: &str, params: &[(String, String)]) -> Result<String> {
        tracing::debug!("HTTP GET {}", url);
        let mut request = self.client.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = request.send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
