use crate::{RenderableReport, RenderableSeverity, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    match &report.domain {
        Some(domain) => out.push_str(&format!("# HSTS preload report: {}\n\n", domain)),
        None => out.push_str("# HSTS preload report\n\n"),
    }

    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Warn => "WARN",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!("- Verdict: **{}**\n", verdict));
    out.push_str(&format!("- Mode: `{}`\n", report.mode));
    if let Some(policy) = &report.policy {
        out.push_str(&format!("- Policy: `{}`\n", policy));
    }
    match &report.header {
        Some(h) => out.push_str(&format!("- Header: `{}`\n\n", h)),
        None => out.push_str("- Header: (none)\n\n"),
    }

    if report.issues.is_empty() {
        out.push_str("No issues.\n");
        return out;
    }

    let errors: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.severity == RenderableSeverity::Error)
        .collect();
    let warnings: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.severity == RenderableSeverity::Warning)
        .collect();

    for (title, group) in [("Errors", errors), ("Warnings", warnings)] {
        if group.is_empty() {
            continue;
        }
        out.push_str(&format!("## {}\n\n", title));
        for issue in group {
            if issue.summary.is_empty() {
                out.push_str(&format!("- `{}`: {}\n", issue.code, issue.message));
            } else {
                out.push_str(&format!(
                    "- `{}` ({}): {}\n",
                    issue.code, issue.summary, issue.message
                ));
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderableIssue;

    #[test]
    fn renders_passing_report() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Pass,
            domain: Some("example.com".to_string()),
            mode: "preloadable".to_string(),
            policy: Some("bulk-1-year".to_string()),
            header: Some("max-age=31536000; includeSubDomains; preload".to_string()),
            issues: Vec::new(),
        };
        let md = render_markdown(&report);
        assert!(md.starts_with("# HSTS preload report: example.com"));
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("Policy: `bulk-1-year`"));
        assert!(md.contains("No issues"));
    }

    #[test]
    fn renders_errors_before_warnings() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Fail,
            domain: None,
            mode: "removable".to_string(),
            policy: None,
            header: Some(String::new()),
            issues: vec![
                RenderableIssue {
                    severity: RenderableSeverity::Warning,
                    code: "header.parse.empty".to_string(),
                    summary: "Empty Header".to_string(),
                    message: "The HSTS header is empty.".to_string(),
                },
                RenderableIssue {
                    severity: RenderableSeverity::Error,
                    code: "header.removable.missing.max_age".to_string(),
                    summary: String::new(),
                    message: "needs max-age".to_string(),
                },
            ],
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(!md.contains("Policy:"));
        let errors_at = md.find("## Errors").expect("errors section");
        let warnings_at = md.find("## Warnings").expect("warnings section");
        assert!(errors_at < warnings_at);
        assert!(md.contains("- `header.removable.missing.max_age`: needs max-age"));
        assert!(md.contains("- `header.parse.empty` (Empty Header): The HSTS header is empty."));
    }

    #[test]
    fn renders_missing_header() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Fail,
            domain: Some("example.com".to_string()),
            mode: "eligible".to_string(),
            policy: Some("bulk-18-weeks".to_string()),
            header: None,
            issues: vec![RenderableIssue {
                severity: RenderableSeverity::Error,
                code: "response.no_header".to_string(),
                summary: "No HSTS header".to_string(),
                message: "missing".to_string(),
            }],
        };
        let md = render_markdown(&report);
        assert!(md.contains("Header: (none)"));
        assert!(!md.contains("## Warnings"));
    }
}
