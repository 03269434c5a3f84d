//! Scenario content types.
//!
//! A [`Scenario`] is authored as a JSON document and loaded by the content
//! crate. Field names follow the document format (`type`, `from`), so the
//! types deserialize directly from the bundled scenario files.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::{ScenarioId, SourceId, TopicId};

/// The historical event at the root of a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: SourceId,
    pub title: String,
    pub year: i32,
    pub place: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Short note on how the surviving sources were composed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition_info: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Text,
    Artifact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransmissionType {
    Copy,
    Summary,
    Translation,
    Compilation,
}

impl TransmissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransmissionType::Copy => "copy",
            TransmissionType::Summary => "summary",
            TransmissionType::Translation => "translation",
            TransmissionType::Compilation => "compilation",
        }
    }
}

/// One documented hop in how a surviving source received its information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionStep {
    /// Human-readable name of the intermediary, e.g. "lost: Northumbrian chronicle".
    pub via: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub kind: TransmissionType,
}

/// A document or artifact, surviving or lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceNode {
    pub id: SourceId,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub title: String,
    pub author_role: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    /// Whether the document survives to the present.
    pub extant: bool,
    #[serde(default)]
    pub transmission: Vec<TransmissionStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Directed transmission edge: `to` was produced by consulting `from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(rename = "from", alias = "from_id")]
    pub from: SourceId,
    pub to: SourceId,
    /// Free-form relation name ("eyewitness", "compilation", ...).
    #[serde(default)]
    pub kind: String,
}

impl Edge {
    pub fn new(from: impl Into<SourceId>, to: impl Into<SourceId>, kind: &str) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            kind: kind.to_string(),
        }
    }
}

/// A research question, anchored on the node distance is measured from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub label: String,
    pub anchor: SourceId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// A complete training scenario: one event, its sources, and the topics a
/// learner may classify against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub event: Event,
    pub nodes: Vec<SourceNode>,
    pub edges: Vec<Edge>,
    pub topics: Vec<Topic>,
}

impl Scenario {
    /// Looks up a declared source node.
    pub fn node(&self, id: &str) -> Option<&SourceNode> {
        self.nodes.iter().find(|n| n.id.as_str() == id)
    }

    /// Looks up a declared source node, failing with [`CoreError::NodeNotFound`].
    pub fn require_node(&self, id: &str) -> Result<&SourceNode, CoreError> {
        self.node(id).ok_or_else(|| CoreError::NodeNotFound {
            scenario: self.id.clone(),
            id: SourceId::from(id),
        })
    }

    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id.as_str() == id)
    }

    /// Looks up a topic, failing with [`CoreError::TopicNotFound`].
    pub fn require_topic(&self, id: &str) -> Result<&Topic, CoreError> {
        self.topic(id).ok_or_else(|| CoreError::TopicNotFound {
            scenario: self.id.clone(),
            id: TopicId::from(id),
        })
    }

    /// Surviving nodes in declaration order.
    pub fn extant_nodes(&self) -> impl Iterator<Item = &SourceNode> {
        self.nodes.iter().filter(|n| n.extant)
    }

    /// Checks the structural rules the classifier relies on.
    ///
    /// Node and topic ids must be unique (the event id counts as a node id),
    /// and every topic anchor must name the event, a declared node, or an
    /// edge endpoint.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut node_ids: HashSet<&str> = HashSet::new();
        node_ids.insert(self.event.id.as_str());
        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(CoreError::DuplicateNode {
                    scenario: self.id.clone(),
                    id: node.id.clone(),
                });
            }
        }

        let mut vertices = node_ids;
        for edge in &self.edges {
            vertices.insert(edge.from.as_str());
            vertices.insert(edge.to.as_str());
        }

        let mut topic_ids: HashSet<&str> = HashSet::new();
        for topic in &self.topics {
            if !topic_ids.insert(topic.id.as_str()) {
                return Err(CoreError::DuplicateTopic {
                    scenario: self.id.clone(),
                    id: topic.id.clone(),
                });
            }
            if !vertices.contains(topic.anchor.as_str()) {
                return Err(CoreError::UnknownAnchor {
                    scenario: self.id.clone(),
                    topic: topic.id.clone(),
                    anchor: topic.anchor.clone(),
                });
            }
        }

        Ok(())
    }
}
