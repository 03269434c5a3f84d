//! Source classification and grading for chronicle scenarios.
//!
//! - [`classify`]: the closest-extant rule that labels each surviving source
//!   primary or secondary relative to a topic anchor.
//! - [`topic`]: detects sources whose label changes with the chosen topic.
//! - [`grading`]: scores a learner's answers and justifications.
//! - [`explain`]: long-form explanation of one source under one topic.

pub mod classify;
pub mod explain;
pub mod grading;
pub mod topic;

pub use classify::{classify, classify_topic, Classification};
pub use explain::explain;
pub use grading::{grade, Answer, GradeReport, GradingConfig, NodeResult};
pub use topic::{is_topic_dependent, labels_by_topic};

#[cfg(test)]
pub(crate) mod fixtures;
