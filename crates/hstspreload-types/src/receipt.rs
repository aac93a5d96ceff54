use crate::{Issues, PolicyType, Verdict};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Stable schema identifier for scan reports.
pub const SCHEMA_REPORT_V1: &str = "hstspreload.report.v1";

/// Which requirement set a header was evaluated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    Preloadable,
    Eligible,
    Removable,
}

impl ScanMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ScanMode::Preloadable => "preloadable",
            ScanMode::Eligible => "eligible",
            ScanMode::Removable => "removable",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Envelope written for a single domain (or single header) evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScanReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,

    /// Domain that was fetched; absent for offline header checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub mode: ScanMode,
    /// Policy the header was held to. Removal checks do not consult a policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicyType>,

    /// The single Strict-Transport-Security value, if exactly one was received.
    pub header: Option<String>,
    pub verdict: Verdict,
    pub issues: Issues,
}
