//! Use case orchestration for hstspreload.
//!
//! This crate provides the application layer: use cases that coordinate the domain engine,
//! the network fetch, persistence and rendering. It is intentionally thin and delegates
//! header evaluation to `hstspreload-domain`.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
pub mod fetch;
pub mod gather;
mod render;
mod scan;
pub mod store;

pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use fetch::{FetchError, FetchedResponse, HttpFetcher, ResponseFetcher};
pub use gather::{MODE_FORCE_HTTPS, PolicyGroups, PreloadEntry, group_by_policy, parse_entries};
pub use render::{parse_report_json, serialize_report, to_renderable};
pub use scan::{check_header, rule_set_for, run_scan, verdict_exit_code};
pub use store::{
    Datastore, DomainState, JsonFileStore, MemoryStore, ScanRecord, StoreError, record_scan,
};
