use crate::model::HstsConfigV1;
use anyhow::Context;
use hstspreload_types::PolicyType;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "hstspreload-bot";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub policy: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub policy: PolicyType,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            policy: PolicyType::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(cfg: HstsConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let mut effective = EffectiveConfig::default();

    if let Some(policy) = overrides.policy.as_deref().or(cfg.policy.as_deref()) {
        effective.policy = policy.parse::<PolicyType>().context("invalid policy")?;
    }

    if let Some(secs) = overrides.timeout_secs.or(cfg.fetch.timeout_secs) {
        if secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        effective.timeout = Duration::from_secs(secs);
    }

    if let Some(ua) = cfg.fetch.user_agent {
        if ua.trim().is_empty() {
            anyhow::bail!("user_agent must not be empty");
        }
        effective.user_agent = ua;
    }

    Ok(ResolvedConfig { effective })
}
