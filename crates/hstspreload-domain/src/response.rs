//! Extraction of the single Strict-Transport-Security value from a response.
//!
//! A missing or repeated header is fatal to the evaluation: directives are never checked
//! unless exactly one value was received.

use crate::checks::RuleSet;
use hstspreload_types::{Issues, PolicyType, ids};

pub const HSTS_HEADER: &str = "Strict-Transport-Security";

/// Anything that can report every value received for a header name.
///
/// Implementations must match names case-insensitively and keep received order.
pub trait HeaderSource {
    fn header_values(&self, name: &str) -> Vec<String>;
}

/// Ordered name/value pairs, as received on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawHeaders {
    entries: Vec<(String, String)>,
}

impl RawHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    /// Headers holding `values` under the Strict-Transport-Security name.
    pub fn hsts<S: AsRef<str>>(values: &[S]) -> Self {
        let mut headers = Self::new();
        for v in values {
            headers.append(HSTS_HEADER, v.as_ref());
        }
        headers
    }
}

impl HeaderSource for RawHeaders {
    fn header_values(&self, name: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
            .collect()
    }
}

/// Header value (when exactly one was present) plus everything found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseVerdict {
    pub header: Option<String>,
    pub issues: Issues,
}

/// Extract exactly one Strict-Transport-Security value.
pub fn check_single_header(response: &impl HeaderSource) -> ResponseVerdict {
    let mut values = response.header_values(HSTS_HEADER);
    let mut issues = Issues::new();

    match values.len() {
        0 => {
            issues.add_error(
                ids::CODE_RESPONSE_NO_HEADER,
                "No HSTS header",
                "Response error: No HSTS header is present on the response.",
            );
            ResponseVerdict {
                header: None,
                issues,
            }
        }
        1 => ResponseVerdict {
            header: values.pop(),
            issues,
        },
        n => {
            issues.add_error(
                ids::CODE_RESPONSE_MULTIPLE_HEADERS,
                "Multiple HSTS headers",
                format!("Response error: Multiple HSTS headers (number of HSTS headers: {n})."),
            );
            ResponseVerdict {
                header: None,
                issues,
            }
        }
    }
}

/// Extract the header and, if that succeeded, check it against `rules`.
pub fn check_response(response: &impl HeaderSource, rules: RuleSet) -> ResponseVerdict {
    let extracted = check_single_header(response);
    if extracted.issues.has_errors() {
        return ResponseVerdict {
            header: None,
            issues: extracted.issues,
        };
    }

    let Some(header) = extracted.header else {
        return extracted;
    };
    let issues = Issues::combine(extracted.issues, rules.check_header(&header));
    ResponseVerdict {
        header: Some(header),
        issues,
    }
}

/// Single header that passes the preload requirements at `bulk-1-year`.
pub fn preloadable_response(response: &impl HeaderSource) -> ResponseVerdict {
    check_response(response, RuleSet::Preloadable)
}

/// Single header that passes the preload requirements at `policy`.
pub fn eligible_response(response: &impl HeaderSource, policy: PolicyType) -> ResponseVerdict {
    check_response(response, RuleSet::Eligible(policy))
}

/// Single header that meets the removal requirements.
pub fn removable_response(response: &impl HeaderSource) -> ResponseVerdict {
    check_response(response, RuleSet::Removable)
}
