//! Topic dependence: does a source's label change with the research question?

use chronicle_core::{Scenario, Topic, TransmissionGraph, Verdict};

use crate::classify::classify;

/// The verdict for `node_id` under every topic of the scenario, in topic order.
pub fn labels_by_topic<'s>(scenario: &'s Scenario, node_id: &str) -> Vec<(&'s Topic, Verdict)> {
    let graph = TransmissionGraph::from_scenario(scenario);
    scenario
        .topics
        .iter()
        .map(|topic| (topic, classify(&graph, topic.anchor.as_str()).verdict(node_id)))
        .collect()
}

/// True when the node is labeled primary under some topic and secondary under
/// another. Topics that leave the node unlabeled are ignored, and a scenario
/// with fewer than two topics is never topic-dependent.
pub fn is_topic_dependent(scenario: &Scenario, node_id: &str) -> bool {
    if scenario.topics.len() < 2 {
        return false;
    }
    let labels = labels_by_topic(scenario, node_id);
    let seen = |wanted: Verdict| labels.iter().any(|(_, verdict)| *verdict == wanted);
    seen(Verdict::Primary) && seen(Verdict::Secondary)
}
