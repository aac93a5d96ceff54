//! The `explain` use case: look up issue code documentation.

use hstspreload_domain::HSTS_HEADER;
use hstspreload_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the code.
    Found(Explanation),
    /// Unknown code; includes the available codes.
    NotFound {
        identifier: String,
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for an issue code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
///
/// Examples are printed as response header lines.
pub fn format_explanation(code: &str, exp: &Explanation) -> String {
    let mut out = format!("{code}: {}\n\n", exp.title);
    out.push_str(exp.description);
    out.push_str("\n\nHow to fix:\n");
    for line in exp.remediation.lines() {
        out.push_str(&format!("  {line}\n"));
    }
    out.push_str("\nRejected:\n");
    push_header_lines(&mut out, exp.examples.before);
    out.push_str("\nAccepted:\n");
    push_header_lines(&mut out, exp.examples.after);
    out
}

fn push_header_lines(out: &mut String, example: &str) {
    if example.is_empty() {
        out.push_str(&format!("  {HSTS_HEADER}: \n"));
        return;
    }
    for line in example.lines() {
        // Full header lines and "(no header)" markers are printed verbatim.
        if line.starts_with(HSTS_HEADER) || line.starts_with('(') {
            out.push_str(&format!("  {line}\n"));
        } else {
            out.push_str(&format!("  {HSTS_HEADER}: {line}\n"));
        }
    }
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, available_codes: &[&str]) -> String {
    let mut out = format!("Unknown issue code: {identifier}\n\nAvailable codes:\n");
    for code in available_codes {
        out.push_str(&format!("  {code}\n"));
    }
    out
}
