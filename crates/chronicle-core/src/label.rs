//! Classification labels.
//!
//! [`ClassificationLabel`] is what a learner may submit; [`Verdict`] is the
//! ground truth computed for one node under one topic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A learner-submitted classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationLabel {
    Primary,
    Secondary,
    /// The learner claims the label changes with the chosen topic.
    DependentOnTopic,
}

impl ClassificationLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationLabel::Primary => "primary",
            ClassificationLabel::Secondary => "secondary",
            ClassificationLabel::DependentOnTopic => "dependent_on_topic",
        }
    }
}

impl fmt::Display for ClassificationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the three known labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown classification '{0}': expected 'primary', 'secondary' or 'dependent_on_topic'")]
pub struct UnknownLabel(pub String);

impl FromStr for ClassificationLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "primary" => Ok(ClassificationLabel::Primary),
            "secondary" => Ok(ClassificationLabel::Secondary),
            "dependent_on_topic" | "topic-dependent" | "topic_dependent" => {
                Ok(ClassificationLabel::DependentOnTopic)
            }
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

/// Ground-truth outcome for an extant node under one topic anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Primary,
    Secondary,
    /// No path from the anchor reaches the node.
    Unknown,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Primary => "primary",
            Verdict::Secondary => "secondary",
            Verdict::Unknown => "unknown",
        }
    }

    /// Whether a submitted primary/secondary label agrees with this verdict.
    pub fn matches(&self, label: ClassificationLabel) -> bool {
        matches!(
            (self, label),
            (Verdict::Primary, ClassificationLabel::Primary)
                | (Verdict::Secondary, ClassificationLabel::Secondary)
        )
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
