//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{FetchConfig, HstsConfigV1};
pub use resolve::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, EffectiveConfig, Overrides, ResolvedConfig,
};

/// Parse `hstspreload.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<HstsConfigV1> {
    let cfg: HstsConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (defaults + file + overrides).
pub fn resolve_config(cfg: HstsConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
