use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preload policy tier a domain is evaluated against.
///
/// The string forms match the `policy` field of preload list entries.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum PolicyType {
    #[serde(rename = "bulk-18-weeks")]
    Bulk18Weeks,
    #[default]
    #[serde(rename = "bulk-1-year")]
    Bulk1Year,
}

impl PolicyType {
    pub const ALL: &'static [PolicyType] = &[PolicyType::Bulk18Weeks, PolicyType::Bulk1Year];

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyType::Bulk18Weeks => "bulk-18-weeks",
            PolicyType::Bulk1Year => "bulk-1-year",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown policy: {0} (expected bulk-18-weeks or bulk-1-year)")]
pub struct PolicyParseError(pub String);

impl FromStr for PolicyType {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyType::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PolicyParseError(s.to_string()))
    }
}
