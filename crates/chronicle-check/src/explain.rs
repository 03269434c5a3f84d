//! Long-form explanation of why a source is primary or secondary for a topic.
//!
//! The text is Markdown and is shown after grading, so it states the facts
//! the classifier used: mediation depth, author role and transmission chain.

use chronicle_core::{CoreError, Distance, Scenario, Topic, TransmissionGraph};

use crate::classify::classify;

/// Explains the classification of `node_id` under `topic`.
///
/// Fails only when the node is not declared in the scenario.
pub fn explain(scenario: &Scenario, node_id: &str, topic: &Topic) -> Result<String, CoreError> {
    let node = scenario.require_node(node_id)?;

    if !node.extant {
        return Ok(format!(
            "'{}' is lost and therefore cannot be a primary source.",
            node.title
        ));
    }

    let graph = TransmissionGraph::from_scenario(scenario);
    let depth = graph.hops(topic.anchor.as_str(), node_id);
    let is_primary = classify(&graph, topic.anchor.as_str())
        .primary
        .contains(node_id);

    let mut text = format!("**{}** ({} CE)\n\n", node.title, node.year);

    let Distance::Hops(steps) = depth else {
        text.push_str("This source has no documented connection to the event in question.");
        return Ok(text);
    };
    if steps == 0 {
        text.push_str("This is the event/anchor itself.");
        return Ok(text);
    }

    let heading = if is_primary { "Primary" } else { "Secondary" };
    text.push_str(&format!("**{} source** for this topic.\n", heading));
    text.push_str(&format!(
        "- Mediation depth: {} step(s) from {}\n",
        steps, topic.label
    ));
    text.push_str(&format!("- Author role: {}\n", node.author_role));

    if is_primary {
        if node.transmission.is_empty() {
            text.push_str("- Direct relationship to the event\n");
        } else {
            text.push_str(&format!(
                "- Transmission: via {} intermediary step(s)\n",
                node.transmission.len()
            ));
        }
        text.push_str("\nThis is the closest extant source to the topic anchor.");
    } else {
        if !node.transmission.is_empty() {
            let chain: Vec<String> = node
                .transmission
                .iter()
                .map(|step| format!("{} ({})", step.kind.as_str(), step.year))
                .collect();
            text.push_str(&format!("- Transmission chain: {}\n", chain.join(", ")));
        }
        text.push_str("\nOther extant sources are closer to the topic anchor.");
    }

    Ok(text)
}
