//! Client for the USCIS case status endpoint.

use chrono::{DateTime, Local};
use std::time::Duration;
use tracing::debug;

use crate::error::CasewatchError;
use crate::page;

const STATUS_URL: &str = "https://egov.uscis.gov/casestatus/mycasestatus.do";

/// Bounded timeout so an unresponsive endpoint cannot hang the run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The endpoint rejects non-browser clients, so the request imitates one.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/46.0.2486.0 Safari/537.36 Edge/13.10586";
const ACCEPT: &str = "text/html, application/xhtml+xml, image/jxr, */*";
const ACCEPT_LANGUAGE: &str = "en-US, en; q=0.8, zh-Hans-CN; q=0.5, zh-Hans; q=0.3";

/// What one successful fetch produced. Only the headline outlives the run.
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    pub headline: String,
    pub detail: String,
    pub fetched_at: DateTime<Local>,
}

/// Classification of the response page.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Headline found; snapshot extracted.
    Ok(StatusSnapshot),
    /// No headline on the page: the receipt number is not recognized.
    Invalid,
}

pub struct StatusFetcher {
    client: reqwest::blocking::Client,
    url: String,
}

impl StatusFetcher {
    pub fn new() -> Result<Self, CasewatchError> {
        Self::with_endpoint(STATUS_URL)
    }

    /// Build a fetcher against a specific endpoint URL.
    pub fn with_endpoint(url: &str) -> Result<Self, CasewatchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// One form-encoded POST for `case_number`, classified by whether the
    /// response carries a headline. Network failures surface as
    /// [`CasewatchError::Transport`]; no retries.
    pub fn poll(&self, case_number: &str) -> Result<FetchOutcome, CasewatchError> {
        let body = self
            .client
            .post(&self.url)
            .header("Accept", ACCEPT)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .header("Cache-Control", "no-cache")
            .header("Referer", &self.url)
            .header("User-Agent", USER_AGENT)
            .form(&[
                ("appReceiptNum", case_number),
                ("caseStatusSearchBtn", "CHECK+STATUS"),
            ])
            .send()?
            .error_for_status()?
            .text()?;

        debug!(bytes = body.len(), "case status page fetched");
        Ok(Self::classify(&body))
    }

    fn classify(body: &str) -> FetchOutcome {
        match page::heading_text(body) {
            Some(headline) => FetchOutcome::Ok(StatusSnapshot {
                headline,
                detail: page::centered_paragraph_text(body).unwrap_or_default(),
                fetched_at: Local::now(),
            }),
            None => FetchOutcome::Invalid,
        }
    }
}
