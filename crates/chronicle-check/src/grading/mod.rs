//! Grading of a learner's classifications for one scenario and topic.
//!
//! Every extant node is worth [`POINTS_PER_NODE`]: one for the label and two
//! for the justification. The maximum accumulates for every extant node
//! whether or not it was answered. A correct `dependent_on_topic` answer
//! earns a two-point label bonus instead of one.

pub mod justification;

use std::collections::HashMap;

use chronicle_core::{
    ClassificationLabel, Scenario, SourceId, SourceNode, Topic, TransmissionGraph, Verdict,
};
use serde::{Deserialize, Serialize};

use crate::classify::{classify, Classification};
use crate::topic::is_topic_dependent;
use justification::{score_justification, JustificationContext};

/// Points available per extant node (1 label + 2 justification).
pub const POINTS_PER_NODE: u32 = 3;

/// `student_answer` value for nodes the learner left blank.
pub const NO_ANSWER: &str = "no_answer";

/// Tunable thresholds of the justification heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingConfig {
    /// A primary source dated within this many years of the event counts as
    /// written "at the time".
    pub contemporary_window_years: i32,
    /// A secondary source must be dated more than this many years after the
    /// event for "long after" to count.
    pub long_after_years: i32,
}

impl Default for GradingConfig {
    fn default() -> Self {
        GradingConfig {
            contemporary_window_years: 10,
            long_after_years: 50,
        }
    }
}

/// One learner answer. `label == None` is treated as no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub node_id: SourceId,
    pub label: Option<ClassificationLabel>,
    pub justification: String,
}

impl Answer {
    pub fn new(node_id: &str, label: ClassificationLabel, justification: &str) -> Self {
        Answer {
            node_id: SourceId::from(node_id),
            label: Some(label),
            justification: justification.to_string(),
        }
    }
}

/// Graded outcome for a single extant node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeResult {
    pub node_id: SourceId,
    /// The submitted label, or [`NO_ANSWER`].
    pub student_answer: String,
    pub correct_answer: Verdict,
    pub is_correct: bool,
    pub points: u32,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeReport {
    pub score: u32,
    pub max_score: u32,
    pub results: Vec<NodeResult>,
}

/// Grades `answers` against the ground truth for `topic`.
///
/// Results follow the scenario's declaration order of extant nodes. Answers
/// for unknown or lost nodes are ignored; if a node is answered twice the
/// later answer counts.
pub fn grade(
    scenario: &Scenario,
    topic: &Topic,
    answers: &[Answer],
    config: &GradingConfig,
) -> GradeReport {
    let graph = TransmissionGraph::from_scenario(scenario);
    let truth = classify(&graph, topic.anchor.as_str());
    let from_anchor = graph.depths_from(topic.anchor.as_str());

    let submitted: HashMap<&str, &Answer> = answers
        .iter()
        .map(|answer| (answer.node_id.as_str(), answer))
        .collect();

    let mut report = GradeReport {
        score: 0,
        max_score: 0,
        results: Vec::new(),
    };

    for node in scenario.extant_nodes() {
        let correct = truth.verdict(node.id.as_str());
        report.max_score += POINTS_PER_NODE;

        let answer = submitted.get(node.id.as_str()).copied();
        let Some((label, justification)) = answer.and_then(|a| a.label.map(|l| (l, &a.justification)))
        else {
            report.results.push(NodeResult {
                node_id: node.id.clone(),
                student_answer: NO_ANSWER.to_string(),
                correct_answer: correct,
                is_correct: false,
                points: 0,
                feedback: "No classification provided.".to_string(),
            });
            continue;
        };

        let (is_correct, label_points, mut feedback) =
            grade_label(scenario, node, label, correct, &truth);

        let has_justification = !justification.is_empty();
        let mut points = label_points;
        if has_justification && is_correct {
            let ctx = JustificationContext {
                is_primary: correct == Verdict::Primary,
                depth: from_anchor.to(node.id.as_str()),
                node_year: node.year,
                event_year: scenario.event.year,
            };
            let scored = score_justification(justification, &ctx, config);
            points += scored.points;
            feedback.push_str(&scored.feedback);
        } else if has_justification {
            feedback.push_str(
                " Your reasoning doesn't match this source's actual relationship to the event.",
            );
        }

        report.score += points;
        report.results.push(NodeResult {
            node_id: node.id.clone(),
            student_answer: label.to_string(),
            correct_answer: correct,
            is_correct,
            points,
            feedback,
        });
    }

    report
}

/// Label correctness, label points, and the base feedback line.
fn grade_label(
    scenario: &Scenario,
    node: &SourceNode,
    label: ClassificationLabel,
    correct: Verdict,
    truth: &Classification,
) -> (bool, u32, String) {
    if label == ClassificationLabel::DependentOnTopic {
        return if is_topic_dependent(scenario, node.id.as_str()) {
            (
                true,
                2,
                "Correct! This source's classification depends on the research question."
                    .to_string(),
            )
        } else {
            (
                false,
                0,
                format!(
                    "Incorrect. This source is consistently {} regardless of topic.",
                    correct
                ),
            )
        };
    }

    if !correct.matches(label) {
        return (
            false,
            0,
            format!("Incorrect. This is a {} source, not {}.", correct, label),
        );
    }

    let feedback = if truth.primary.contains(node.id.as_str()) {
        if node.transmission.is_empty() {
            "Correct! This is PRIMARY - it's the closest extant source to the event.".to_string()
        } else {
            let lost: Vec<&str> = node.transmission.iter().map(|t| t.via.as_str()).collect();
            format!(
                "Correct! This is PRIMARY - it's the closest extant source (based on lost sources: {}).",
                lost.join(", ")
            )
        }
    } else {
        "Correct! This is SECONDARY - other extant sources are closer to the event.".to_string()
    };
    (true, 1, feedback)
}
