//! Report serialization and conversion to the renderable model.

use anyhow::Context;
use hstspreload_render::{RenderableIssue, RenderableReport, RenderableSeverity, RenderableVerdict};
use hstspreload_types::{Issue, ScanReport, Verdict};

pub fn serialize_report(report: &ScanReport) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("serialize report")?;
    json.push('\n');
    Ok(json)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ScanReport> {
    serde_json::from_str(text).context("parse report JSON")
}

pub fn to_renderable(report: &ScanReport) -> RenderableReport {
    let convert = |severity| {
        move |issue: &Issue| RenderableIssue {
            severity,
            code: issue.code.clone(),
            summary: issue.summary.clone(),
            message: issue.message.clone(),
        }
    };

    let issues = report
        .issues
        .errors
        .iter()
        .map(convert(RenderableSeverity::Error))
        .chain(
            report
                .issues
                .warnings
                .iter()
                .map(convert(RenderableSeverity::Warning)),
        )
        .collect();

    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Warn => RenderableVerdict::Warn,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        domain: report.domain.clone(),
        mode: report.mode.to_string(),
        policy: report.policy.map(|p| p.to_string()),
        header: report.header.clone(),
        issues,
    }
}
