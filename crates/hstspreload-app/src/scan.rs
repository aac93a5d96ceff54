//! The `scan` use case: fetch a domain (or take a header value) and produce a report.

use crate::fetch::ResponseFetcher;
use anyhow::Context;
use hstspreload_domain::{ResponseVerdict, RuleSet, check_response};
use hstspreload_types::{PolicyType, SCHEMA_REPORT_V1, ScanMode, ScanReport, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Rule set for a CLI/report mode. `policy` is only consulted for `eligible`.
pub fn rule_set_for(mode: ScanMode, policy: PolicyType) -> RuleSet {
    match mode {
        ScanMode::Preloadable => RuleSet::Preloadable,
        ScanMode::Eligible => RuleSet::Eligible(policy),
        ScanMode::Removable => RuleSet::Removable,
    }
}

/// Fetch `domain` once and evaluate its Strict-Transport-Security header.
///
/// Only a failed fetch is an error; every header problem is reported as an issue.
pub fn run_scan(
    fetcher: &impl ResponseFetcher,
    domain: &str,
    rules: RuleSet,
) -> anyhow::Result<ScanReport> {
    let started_at = OffsetDateTime::now_utc();

    let response = fetcher
        .fetch(domain)
        .with_context(|| format!("fetch {domain}"))?;
    let verdict = check_response(&response, rules);

    let report = build_report(Some(domain.to_string()), rules, verdict, started_at);
    tracing::info!(
        domain,
        mode = %report.mode,
        status = response.status,
        verdict = ?report.verdict,
        errors = report.issues.errors.len(),
        warnings = report.issues.warnings.len(),
        "scan complete"
    );
    Ok(report)
}

/// Evaluate a header value directly, without a response.
pub fn check_header(value: &str, rules: RuleSet) -> ScanReport {
    let started_at = OffsetDateTime::now_utc();
    let verdict = ResponseVerdict {
        header: Some(value.to_string()),
        issues: rules.check_header(value),
    };
    build_report(None, rules, verdict, started_at)
}

fn build_report(
    domain: Option<String>,
    rules: RuleSet,
    verdict: ResponseVerdict,
    started_at: OffsetDateTime,
) -> ScanReport {
    ScanReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "hstspreload".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        domain,
        mode: rules.mode(),
        policy: rules.policy(),
        header: verdict.header,
        verdict: verdict.issues.verdict(),
        issues: verdict.issues,
    }
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
