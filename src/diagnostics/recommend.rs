//! Recommendation text generation.
//!
//! A deterministic map from diagnostic results to guidance strings: one
//! actionable sentence per failing check, or a single affirmative message
//! when the whole battery passes. No network computation happens here.

use super::battery::{DcmaCheck, DiagnosticResult};

/// Builds guidance from a completed diagnostic battery.
pub fn recommendations(results: &[DiagnosticResult]) -> Vec<String> {
    let failing: Vec<&DiagnosticResult> = results.iter().filter(|r| !r.passed).collect();
    if failing.is_empty() {
        return vec!["All schedule quality checks passed; the network logic is sound.".to_string()];
    }

    failing.iter().map(|r| sentence_for(r)).collect()
}

fn sentence_for(result: &DiagnosticResult) -> String {
    let n = result.count;
    match result.check {
        DcmaCheck::Logic => format!(
            "Fix {n} task(s) with missing predecessors or successors to ensure network integrity."
        ),
        DcmaCheck::Leads => format!(
            "Remove {n} dependency lead(s) (negative lag); leads hide the real sequence of work."
        ),
        DcmaCheck::Lags => format!(
            "Replace {n} long dependency lag(s) with explicit tasks so the waiting time is visible and owned."
        ),
        DcmaCheck::RelationshipTypes => format!(
            "Convert {n} SS/FF/SF dependencies to finish-to-start where the work allows it."
        ),
        DcmaCheck::HardConstraints => format!(
            "Replace {n} hard date constraint(s) with dependency logic so dates can respond to change."
        ),
        DcmaCheck::HighFloat => format!(
            "Review {n} task(s) with excessive total float; they are likely missing dependency logic."
        ),
        DcmaCheck::NegativeFloat => format!(
            "Recover {n} task(s) with negative float; the schedule is behind its target finish."
        ),
        DcmaCheck::HighDuration => format!(
            "Split {n} long-duration task(s) into shorter pieces that can be statused meaningfully."
        ),
    }
}
