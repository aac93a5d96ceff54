//! Single non-redirecting GET against a domain.
//!
//! A redirect is a successful result: the redirect response itself is what gets inspected.

use hstspreload_domain::HeaderSource;
use hstspreload_settings::EffectiveConfig;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::redirect::Policy;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid domain {domain:?}: {reason}")]
    InvalidDomain {
        domain: String,
        reason: &'static str,
    },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// The first response received for a domain, headers as received.
#[derive(Clone, Debug, Default)]
pub struct FetchedResponse {
    pub status: u16,
    pub headers: HeaderMap,
}

impl HeaderSource for FetchedResponse {
    fn header_values(&self, name: &str) -> Vec<String> {
        self.headers.get_all(name).iter().map(header_text).collect()
    }
}

/// Header bytes as text without replacement characters.
///
/// UTF-8 is kept as is; anything else is read as ISO-8859-1 (`obs-text`), one char per byte.
fn header_text(value: &HeaderValue) -> String {
    match std::str::from_utf8(value.as_bytes()) {
        Ok(text) => text.to_string(),
        Err(_) => value.as_bytes().iter().copied().map(char::from).collect(),
    }
}

/// Seam between the scan use case and the network.
pub trait ResponseFetcher {
    fn fetch(&self, domain: &str) -> Result<FetchedResponse, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(cfg: &EffectiveConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(cfg.timeout)
            .user_agent(cfg.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<FetchedResponse, FetchError> {
        tracing::debug!(%url, "fetching first response");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_redirection() {
            tracing::debug!(%url, status = status.as_u16(), "redirect not followed");
        }

        Ok(FetchedResponse {
            status: status.as_u16(),
            headers: response.headers().clone(),
        })
    }
}

impl ResponseFetcher for HttpFetcher {
    fn fetch(&self, domain: &str) -> Result<FetchedResponse, FetchError> {
        validate_domain(domain)?;
        self.get(&format!("https://{domain}/"))
    }
}

/// Reject anything that is not a bare host name.
pub fn validate_domain(domain: &str) -> Result<(), FetchError> {
    let invalid = |reason| FetchError::InvalidDomain {
        domain: domain.to_string(),
        reason,
    };

    if domain.is_empty() {
        return Err(invalid("empty"));
    }
    if domain.contains("://") {
        return Err(invalid("must not include a scheme"));
    }
    if domain.contains(['/', '?', '#']) {
        return Err(invalid("must not include a path"));
    }
    if domain.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }
    Ok(())
}
