//! TrainerService: the single coordinator between HTTP handlers and the
//! content/check crates.
//!
//! All request logic flows through [`TrainerService`]. Handlers are thin
//! wrappers that delegate to these methods. The service holds only
//! read-only data, so one instance is shared by every request.

use chronicle_check::{classify_topic, explain, grade, Answer, GradingConfig};
use chronicle_content::{CatalogStats, ScenarioCatalog};
use chronicle_core::{Scenario, SourceId, Topic};

use crate::error::ApiError;
use crate::report::format_session_report;
use crate::schema::classify::{ClassifyResponse, FeedbackResponse};
use crate::schema::grading::{GradeRequest, ScenarioResult};
use crate::schema::report::{ReportResponse, SessionSubmission};
use crate::schema::scenarios::HealthResponse;

pub struct TrainerService {
    catalog: ScenarioCatalog,
    grading: GradingConfig,
    instructor_email: String,
}

impl TrainerService {
    pub fn new(catalog: ScenarioCatalog, grading: GradingConfig, instructor_email: String) -> Self {
        TrainerService {
            catalog,
            grading,
            instructor_email,
        }
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    fn scenario(&self, scenario_id: &str) -> Result<&Scenario, ApiError> {
        self.catalog
            .get(scenario_id)
            .ok_or_else(|| ApiError::NotFound("Scenario not found".to_string()))
    }

    fn scenario_topic(
        &self,
        scenario_id: &str,
        topic_id: &str,
    ) -> Result<(&Scenario, &Topic), ApiError> {
        let scenario = self.scenario(scenario_id)?;
        let topic = scenario
            .topic(topic_id)
            .ok_or_else(|| ApiError::NotFound("Topic not found".to_string()))?;
        Ok((scenario, topic))
    }

    // -----------------------------------------------------------------------
    // Catalog
    // -----------------------------------------------------------------------

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            message: "Primary Source Trainer API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            scenarios_available: self.catalog.len(),
        }
    }

    pub fn list_scenarios(&self) -> Vec<Scenario> {
        self.catalog.iter().cloned().collect()
    }

    pub fn get_scenario(&self, scenario_id: &str) -> Result<Scenario, ApiError> {
        self.scenario(scenario_id).cloned()
    }

    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }

    // -----------------------------------------------------------------------
    // Classification and grading
    // -----------------------------------------------------------------------

    /// Ground truth for one scenario and topic.
    pub fn classify(&self, scenario_id: &str, topic_id: &str) -> Result<ClassifyResponse, ApiError> {
        let (scenario, topic) = self.scenario_topic(scenario_id, topic_id)?;
        let classification = classify_topic(scenario, topic);
        tracing::debug!(
            scenario = %scenario.id,
            topic = %topic.id,
            primary = classification.primary.len(),
            secondary = classification.secondary.len(),
            "classified scenario"
        );
        Ok(ClassifyResponse {
            scenario_id: scenario.id.clone(),
            topic_id: topic.id.clone(),
            topic_label: topic.label.clone(),
            primary_sources: classification.primary.into_iter().collect(),
            secondary_sources: classification.secondary.into_iter().collect(),
        })
    }

    /// Grades a learner submission for one scenario.
    pub fn grade(&self, request: &GradeRequest) -> Result<ScenarioResult, ApiError> {
        let (scenario, topic) =
            self.scenario_topic(request.scenario_id.as_str(), request.topic_id.as_str())?;
        let answers = request
            .classifications
            .iter()
            .map(|input| input.to_answer())
            .collect::<Result<Vec<Answer>, ApiError>>()?;

        let report = grade(scenario, topic, &answers, &self.grading);
        tracing::info!(
            student = %request.student_name,
            scenario = %scenario.id,
            topic = %topic.id,
            score = report.score,
            max_score = report.max_score,
            "graded submission"
        );

        Ok(ScenarioResult {
            scenario_id: scenario.id.clone(),
            score: report.score,
            max_score: report.max_score,
            results: report.results,
            topic_label: topic.label.clone(),
        })
    }

    /// Explanation of one node under one topic.
    pub fn feedback(
        &self,
        scenario_id: &str,
        node_id: &str,
        topic_id: &str,
    ) -> Result<FeedbackResponse, ApiError> {
        let (scenario, topic) = self.scenario_topic(scenario_id, topic_id)?;
        let feedback = explain(scenario, node_id, topic)?;
        Ok(FeedbackResponse {
            scenario_id: scenario.id.clone(),
            node_id: SourceId::from(node_id),
            topic_id: topic.id.clone(),
            feedback,
        })
    }

    // -----------------------------------------------------------------------
    // Reports
    // -----------------------------------------------------------------------

    pub fn generate_report(&self, submission: &SessionSubmission) -> ReportResponse {
        tracing::info!(
            student = %submission.student_name,
            scenarios = submission.scenario_results.len(),
            "generated session report"
        );
        ReportResponse {
            report: format_session_report(submission),
            instructor_email: self.instructor_email.clone(),
        }
    }
}
