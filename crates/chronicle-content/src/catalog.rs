//! ScenarioCatalog: the immutable scenario collection.
//!
//! Built once at startup from a [`ScenarioSource`]; afterwards it is only
//! read, so it can be shared behind an `Arc` without locking.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use chronicle_core::{CoreError, Scenario, ScenarioId, Topic};

use crate::error::ContentError;
use crate::traits::ScenarioSource;

/// Validated scenarios keyed by id, in source order.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: IndexMap<ScenarioId, Scenario>,
}

/// Summary counts over the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total_scenarios: usize,
    /// Scenario count per difficulty ("easy", "medium", "hard").
    pub difficulties: BTreeMap<String, usize>,
    pub total_topics: usize,
    /// Rounded to one decimal place.
    pub avg_topics_per_scenario: f64,
}

impl ScenarioCatalog {
    /// Loads, validates and freezes every scenario from `source`.
    pub fn load(source: &impl ScenarioSource) -> Result<Self, ContentError> {
        let loaded = source.load()?;
        if loaded.is_empty() {
            return Err(ContentError::Empty(source.describe()));
        }

        let mut scenarios = IndexMap::with_capacity(loaded.len());
        for scenario in loaded {
            scenario.validate()?;
            if scenarios.contains_key(&scenario.id) {
                return Err(ContentError::DuplicateScenario(scenario.id));
            }
            scenarios.insert(scenario.id.clone(), scenario);
        }

        tracing::info!(
            source = %source.describe(),
            count = scenarios.len(),
            "scenario catalog loaded"
        );
        Ok(ScenarioCatalog { scenarios })
    }

    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.get(id)
    }

    /// Looks up a scenario and one of its topics.
    ///
    /// `None` when the scenario is unknown; `Some(Err(_))` when the scenario
    /// exists but has no such topic.
    pub fn topic(&self, scenario: &str, topic: &str) -> Option<Result<(&Scenario, &Topic), CoreError>> {
        self.get(scenario)
            .map(|s| s.require_topic(topic).map(|t| (s, t)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.values()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        let mut difficulties = BTreeMap::new();
        let mut total_topics = 0;
        for scenario in self.iter() {
            *difficulties
                .entry(scenario.difficulty.as_str().to_string())
                .or_insert(0) += 1;
            total_topics += scenario.topics.len();
        }
        let avg = if self.is_empty() {
            0.0
        } else {
            total_topics as f64 / self.len() as f64
        };
        CatalogStats {
            total_scenarios: self.len(),
            difficulties,
            total_topics,
            avg_topics_per_scenario: (avg * 10.0).round() / 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedded::EmbeddedSource;

    #[test]
    fn embedded_catalog_keeps_source_order() {
        let catalog = ScenarioCatalog::load(&EmbeddedSource).unwrap();
        assert_eq!(catalog.len(), 10);
        let first = catalog.iter().next().unwrap();
        assert_eq!(first.id.as_str(), "scenario_1_lindisfarne");
        assert!(catalog.get("scenario_7_conversion").is_some());
        assert!(catalog.get("scenario_99").is_none());
    }

    #[test]
    fn stats_over_embedded_catalog() {
        let stats = ScenarioCatalog::load(&EmbeddedSource).unwrap().stats();
        assert_eq!(stats.total_scenarios, 10);
        assert_eq!(stats.total_topics, 18);
        assert_eq!(stats.avg_topics_per_scenario, 1.8);
        assert_eq!(stats.difficulties.values().sum::<usize>(), 10);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let scenarios = EmbeddedSource.load().unwrap();
        let doubled = vec![scenarios[0].clone(), scenarios[0].clone()];
        let err = ScenarioCatalog::load(&doubled).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateScenario(_)));
    }

    #[test]
    fn invalid_scenario_is_rejected() {
        let mut scenario = EmbeddedSource.load().unwrap().remove(0);
        scenario.topics[0].anchor = "nowhere".into();
        let err = ScenarioCatalog::load(&vec![scenario]).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(CoreError::UnknownAnchor { .. })));
    }

    #[test]
    fn empty_source_is_rejected() {
        let err = ScenarioCatalog::load(&Vec::<Scenario>::new()).unwrap_err();
        assert!(matches!(err, ContentError::Empty(_)));
    }

    #[test]
    fn topic_lookup() {
        let catalog = ScenarioCatalog::load(&EmbeddedSource).unwrap();
        let (scenario, topic) = catalog
            .topic("scenario_2_plague", "t_historiography")
            .unwrap()
            .unwrap();
        assert_eq!(scenario.event.year, 541);
        assert_eq!(topic.anchor.as_str(), "n3");
        assert!(catalog.topic("scenario_2_plague", "t_nope").unwrap().is_err());
        assert!(catalog.topic("nope", "t_event").is_none());
    }
}
