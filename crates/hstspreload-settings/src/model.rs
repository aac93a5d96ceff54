use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `hstspreload.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HstsConfigV1 {
    /// Optional schema string for tooling (`hstspreload.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Policy used by `eligible` checks: `bulk-18-weeks` or `bulk-1-year` (default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}
