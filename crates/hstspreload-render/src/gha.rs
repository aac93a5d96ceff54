use crate::{RenderableReport, RenderableSeverity};

/// Render issues as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} title={code}::{message}`
pub fn render_github_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    report
        .issues
        .iter()
        .take(max)
        .map(|issue| {
            let level = match issue.severity {
                RenderableSeverity::Error => "error",
                RenderableSeverity::Warning => "warning",
            };
            let subject = report.domain.as_deref().unwrap_or("header");
            let message = format!("[{}] {}", subject, issue.message);
            format!("::{} title={}::{}", level, escape(&issue.code), escape(&message))
        })
        .collect()
}

fn escape(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
