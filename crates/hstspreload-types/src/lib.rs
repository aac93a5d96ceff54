//! Stable DTOs and IDs used across the hstspreload workspace.
//!
//! This crate is intentionally boring:
//! - the `Issue`/`Issues` value types and their merge semantics
//! - stable dotted issue codes
//! - preload policy identifiers
//! - the scan report envelope
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod issue;
pub mod policy;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use issue::{Issue, Issues, Verdict};
pub use policy::{PolicyParseError, PolicyType};
pub use receipt::{SCHEMA_REPORT_V1, ScanMode, ScanReport, ToolMeta};
