//! Plain-text session report.
//!
//! Formats a learner's session so it can be copied into an email to the
//! instructor. Delivery is left to the learner.

use crate::schema::report::SessionSubmission;

const RULE: &str = "============================================================";

/// Renders the report for a whole session.
pub fn format_session_report(submission: &SessionSubmission) -> String {
    let total: u32 = submission.scenario_results.iter().map(|r| r.score).sum();
    let max: u32 = submission.scenario_results.iter().map(|r| r.max_score).sum();

    let mut out = String::new();
    out.push_str("PRIMARY SOURCE TRAINER - SESSION REPORT\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Student: {}\n", submission.student_name));
    if let Some(email) = submission.student_email.as_deref().filter(|e| !e.is_empty()) {
        out.push_str(&format!("Email: {}\n", email));
    }
    out.push_str(&format!(
        "Scenarios completed: {}\n",
        submission.scenario_results.len()
    ));
    out.push_str(&format!("Total score: {}/{} ({})\n", total, max, percent(total, max)));

    for (i, result) in submission.scenario_results.iter().enumerate() {
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!("Scenario {}: {}\n", i + 1, result.scenario_id));
        out.push_str(&format!("Topic: {}\n", result.topic_label));
        out.push_str(&format!(
            "Score: {}/{} ({})\n",
            result.score,
            result.max_score,
            percent(result.score, result.max_score)
        ));
        for node in &result.results {
            let mark = if node.is_correct { "[correct]" } else { "[incorrect]" };
            out.push_str(&format!(
                "  {} {}: answered {}, expected {} ({} pts)\n",
                mark, node.node_id, node.student_answer, node.correct_answer, node.points
            ));
            out.push_str(&format!("      {}\n", node.feedback));
        }
    }

    out
}

fn percent(score: u32, max: u32) -> String {
    if max == 0 {
        return "n/a".to_string();
    }
    format!("{:.1}%", f64::from(score) * 100.0 / f64::from(max))
}
