//! Curation of a preload list dataset by policy.

use anyhow::Context;
use hstspreload_types::PolicyType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The only preload list mode that enforces HTTPS; other entries are pinning-only.
pub const MODE_FORCE_HTTPS: &str = "force-https";

/// One entry of a preload list dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreloadEntry {
    pub name: String,
    /// Free-form label; only `bulk-18-weeks` and `bulk-1-year` are grouped.
    #[serde(default)]
    pub policy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default)]
    pub include_subdomains: bool,
}

impl PreloadEntry {
    pub fn is_force_https(&self) -> bool {
        self.mode.as_deref() == Some(MODE_FORCE_HTTPS)
    }
}

/// `force-https` domain names grouped by policy, in dataset order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PolicyGroups {
    pub groups: BTreeMap<PolicyType, Vec<String>>,
    /// Entries without `mode = "force-https"`.
    pub not_forced: usize,
    /// `force-https` entries whose policy is not a bulk policy (e.g. `custom`).
    pub skipped: usize,
}

impl PolicyGroups {
    pub fn domains(&self, policy: PolicyType) -> &[String] {
        self.groups.get(&policy).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub fn parse_entries(json: &str) -> anyhow::Result<Vec<PreloadEntry>> {
    serde_json::from_str(json).context("parse preload list JSON")
}

pub fn group_by_policy(entries: &[PreloadEntry]) -> PolicyGroups {
    let mut out = PolicyGroups::default();
    for entry in entries {
        if !entry.is_force_https() {
            out.not_forced += 1;
            continue;
        }
        match entry.policy.parse::<PolicyType>() {
            Ok(policy) => out.groups.entry(policy).or_default().push(entry.name.clone()),
            Err(_) => out.skipped += 1,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"[
        {"name": "a.example", "policy": "bulk-18-weeks", "mode": "force-https", "include_subdomains": true},
        {"name": "b.example", "policy": "bulk-1-year", "mode": "force-https", "include_subdomains": true},
        {"name": "c.example", "policy": "custom", "mode": "force-https"},
        {"name": "d.example", "policy": "bulk-18-weeks", "mode": "force-https"},
        {"name": "e.example", "mode": "force-https"},
        {"name": "pinned.example", "policy": "bulk-1-year"},
        {"name": "other.example", "policy": "bulk-18-weeks", "mode": "report-only"}
    ]"#;

    #[test]
    fn groups_bulk_policies_in_order() {
        let groups = group_by_policy(&parse_entries(DATASET).expect("parse"));
        assert_eq!(
            groups.domains(PolicyType::Bulk18Weeks),
            ["a.example".to_string(), "d.example".to_string()]
        );
        assert_eq!(groups.domains(PolicyType::Bulk1Year), ["b.example".to_string()]);
        assert_eq!(groups.skipped, 2);
    }

    #[test]
    fn only_force_https_entries_are_grouped() {
        let groups = group_by_policy(&parse_entries(DATASET).expect("parse"));
        let grouped: Vec<&String> = groups.groups.values().flatten().collect();
        assert!(!grouped.iter().any(|n| n.as_str() == "pinned.example"));
        assert!(!grouped.iter().any(|n| n.as_str() == "other.example"));
        assert_eq!(groups.not_forced, 2);
    }

    #[test]
    fn empty_dataset_has_no_groups() {
        let groups = group_by_policy(&[]);
        assert!(groups.domains(PolicyType::Bulk1Year).is_empty());
        assert_eq!(groups.skipped, 0);
        assert_eq!(groups.not_forced, 0);
    }

    #[test]
    fn serializes_with_policy_keys() {
        let groups = group_by_policy(&parse_entries(DATASET).expect("parse"));
        let json = serde_json::to_value(&groups).expect("serialize");
        assert_eq!(json["groups"]["bulk-1-year"][0], "b.example");
        assert_eq!(json["skipped"], 2);
        assert_eq!(json["not_forced"], 2);
    }

    #[test]
    fn rejects_non_array_input() {
        assert!(parse_entries("{}").is_err());
    }
}
