//! Closest-extant classification.
//!
//! An extant node N at finite depth `d` from the anchor is SECONDARY when some
//! other extant node M sits strictly closer to the anchor and on a shortest
//! anchor-to-N path, i.e. `depth(anchor, M) + depth(M, N) == d`. Otherwise N
//! is PRIMARY: lost intermediaries between it and the anchor do not count.
//! Extant nodes the anchor cannot reach get no label at all.

use std::collections::BTreeSet;

use chronicle_core::graph::DepthMap;
use chronicle_core::{Distance, Scenario, SourceId, Topic, TransmissionGraph, Verdict};

/// Primary and secondary sets for one anchor. The sets are disjoint and
/// contain only extant nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub primary: BTreeSet<SourceId>,
    pub secondary: BTreeSet<SourceId>,
}

impl Classification {
    pub fn verdict(&self, id: &str) -> Verdict {
        if self.primary.contains(id) {
            Verdict::Primary
        } else if self.secondary.contains(id) {
            Verdict::Secondary
        } else {
            Verdict::Unknown
        }
    }
}

/// Partitions every reachable extant node of `graph` relative to `anchor`.
///
/// Distances from the anchor and from each reachable extant node are computed
/// once by single-source BFS and reused for every pairwise check.
pub fn classify(graph: &TransmissionGraph, anchor: &str) -> Classification {
    let from_anchor = graph.depths_from(anchor);

    // Candidate mediators: reachable extant nodes with their own distance maps.
    let mediators: Vec<(&SourceId, u32, DepthMap<'_>)> = graph
        .extant_ids()
        .filter_map(|id| {
            from_anchor
                .to(id.as_str())
                .hops()
                .map(|depth| (id, depth, graph.depths_from(id.as_str())))
        })
        .collect();

    let mut result = Classification::default();
    for (node, depth, _) in &mediators {
        let mediated = mediators.iter().any(|(other, other_depth, from_other)| {
            other != node
                && other_depth < depth
                && Distance::Hops(*other_depth) + from_other.to(node.as_str())
                    == Distance::Hops(*depth)
        });
        if mediated {
            result.secondary.insert((*node).clone());
        } else {
            result.primary.insert((*node).clone());
        }
    }
    result
}

/// Builds the scenario graph and classifies it against `topic`'s anchor.
pub fn classify_topic(scenario: &Scenario, topic: &Topic) -> Classification {
    let graph = TransmissionGraph::from_scenario(scenario);
    classify(&graph, topic.anchor.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chronicle_core::Edge;
    use proptest::prelude::*;

    fn set(ids: &[&str]) -> BTreeSet<SourceId> {
        ids.iter().map(|id| SourceId::from(*id)).collect()
    }

    fn graph(declared: &[(&str, bool)], edges: &[(&str, &str)]) -> TransmissionGraph {
        let edges: Vec<Edge> = edges.iter().map(|(a, b)| Edge::new(*a, *b, "")).collect();
        TransmissionGraph::build(
            declared.iter().map(|(id, extant)| (SourceId::from(*id), *extant)),
            &edges,
        )
    }

    #[test]
    fn lost_intermediary_does_not_demote() {
        let g = graph(
            &[("E", false), ("A", true), ("L", false), ("B", true)],
            &[("E", "A"), ("E", "L"), ("L", "B")],
        );
        let c = classify(&g, "E");
        assert_eq!(c.primary, set(&["A", "B"]));
        assert!(c.secondary.is_empty());
    }

    #[test]
    fn extant_mediator_demotes() {
        let g = graph(
            &[("E", false), ("A", true), ("C", true)],
            &[("E", "A"), ("A", "C")],
        );
        let c = classify(&g, "E");
        assert_eq!(c.primary, set(&["A"]));
        assert_eq!(c.secondary, set(&["C"]));
    }

    #[test]
    fn sibling_is_not_a_mediator() {
        // A is closer than C but not on C's shortest path.
        let g = graph(
            &[("E", false), ("A", true), ("L", false), ("C", true)],
            &[("E", "A"), ("E", "L"), ("L", "C")],
        );
        let c = classify(&g, "E");
        assert_eq!(c.primary, set(&["A", "C"]));
    }

    #[test]
    fn mediator_on_a_longer_path_only_does_not_demote() {
        // Shortest path E->C is direct; the route via A is longer.
        let g = graph(
            &[("E", false), ("A", true), ("C", true)],
            &[("E", "A"), ("A", "C"), ("E", "C")],
        );
        let c = classify(&g, "E");
        assert_eq!(c.primary, set(&["A", "C"]));
    }

    #[test]
    fn any_shortest_path_through_extant_node_demotes() {
        // Two shortest paths to C, one through extant A, one through lost L.
        let g = graph(
            &[("E", false), ("A", true), ("L", false), ("C", true)],
            &[("E", "L"), ("L", "C"), ("E", "A"), ("A", "C")],
        );
        let c = classify(&g, "E");
        assert_eq!(c.secondary, set(&["C"]));
    }

    #[test]
    fn unreachable_extant_nodes_are_excluded() {
        let g = graph(
            &[("E", false), ("A", true), ("Z", true)],
            &[("E", "A"), ("Z", "A")],
        );
        let c = classify(&g, "E");
        assert_eq!(c.primary, set(&["A"]));
        assert_eq!(c.verdict("Z"), Verdict::Unknown);
    }

    #[test]
    fn extant_anchor_is_primary_and_mediates_descendants() {
        let g = graph(
            &[("E", false), ("A", true), ("C", true)],
            &[("E", "A"), ("A", "C")],
        );
        let c = classify(&g, "A");
        assert_eq!(c.primary, set(&["A"]));
        assert_eq!(c.secondary, set(&["C"]));
    }

    #[test]
    fn deep_node_without_extant_competitor_is_primary() {
        let g = graph(
            &[("E", false), ("L1", false), ("L2", false), ("L3", false), ("D", true)],
            &[("E", "L1"), ("L1", "L2"), ("L2", "L3"), ("L3", "D")],
        );
        assert_eq!(classify(&g, "E").primary, set(&["D"]));
    }

    #[test]
    fn cyclic_graph_classifies() {
        let g = graph(
            &[("E", false), ("A", true), ("B", true)],
            &[("E", "A"), ("A", "B"), ("B", "A"), ("B", "B")],
        );
        let c = classify(&g, "E");
        assert_eq!(c.primary, set(&["A"]));
        assert_eq!(c.secondary, set(&["B"]));
    }

    #[test]
    fn unknown_anchor_labels_nothing() {
        let g = graph(&[("E", false), ("A", true)], &[("E", "A")]);
        assert_eq!(classify(&g, "nope"), Classification::default());
    }

    #[test]
    fn plague_scenario_by_topic() {
        let scenario = fixtures::plague();
        let event = classify_topic(&scenario, scenario.topic("t_event").unwrap());
        assert_eq!(event.primary, set(&["n1", "n2"]));
        assert_eq!(event.secondary, set(&["n3"]));

        let modern = classify_topic(&scenario, scenario.topic("t_historiography").unwrap());
        assert_eq!(modern.primary, set(&["n3"]));
        assert!(modern.secondary.is_empty());
    }

    // -- properties ---------------------------------------------------------

    const VERTICES: u8 = 7;

    fn arb_graph() -> impl Strategy<Value = (Vec<bool>, Vec<(u8, u8)>)> {
        (
            prop::collection::vec(any::<bool>(), VERTICES as usize),
            prop::collection::vec((0..VERTICES, 0..VERTICES), 0..18),
        )
    }

    fn name(i: u8) -> String {
        format!("v{}", i)
    }

    fn build(extant: &[bool], edges: &[(u8, u8)], without: Option<u8>) -> TransmissionGraph {
        let declared = (0..VERTICES)
            .filter(|i| Some(*i) != without)
            .map(|i| (SourceId::new(name(i)), extant[i as usize]));
        let edges: Vec<Edge> = edges
            .iter()
            .filter(|(a, b)| Some(*a) != without && Some(*b) != without)
            .map(|(a, b)| Edge::new(name(*a), name(*b), ""))
            .collect();
        TransmissionGraph::build(declared, &edges)
    }

    proptest! {
        #[test]
        fn sets_are_disjoint_and_extant_only((extant, edges) in arb_graph(), anchor in 0..VERTICES) {
            let g = build(&extant, &edges, None);
            let c = classify(&g, &name(anchor));
            prop_assert!(c.primary.is_disjoint(&c.secondary));
            for id in c.primary.iter().chain(c.secondary.iter()) {
                prop_assert!(g.is_extant(id.as_str()));
                prop_assert!(g.hops(&name(anchor), id.as_str()).is_reachable());
            }
        }

        #[test]
        fn classification_is_idempotent((extant, edges) in arb_graph(), anchor in 0..VERTICES) {
            let g = build(&extant, &edges, None);
            prop_assert_eq!(classify(&g, &name(anchor)), classify(&g, &name(anchor)));
        }

        #[test]
        fn direct_children_of_anchor_are_primary((extant, edges) in arb_graph(), anchor in 0..VERTICES) {
            let g = build(&extant, &edges, None);
            let anchor = name(anchor);
            let c = classify(&g, &anchor);
            for child in g.successors(&anchor) {
                if g.is_extant(child.as_str()) && child.as_str() != anchor && !g.is_extant(&anchor) {
                    prop_assert!(c.primary.contains(child));
                }
            }
        }

        #[test]
        fn marking_a_node_lost_never_demotes(
            (extant, edges) in arb_graph(),
            anchor in 0..VERTICES,
            removed in 0..VERTICES,
        ) {
            let before = classify(&build(&extant, &edges, None), &name(anchor));
            let mut fewer = extant.clone();
            fewer[removed as usize] = false;
            let after = classify(&build(&fewer, &edges, None), &name(anchor));
            for id in &before.primary {
                if id.as_str() != name(removed) {
                    prop_assert!(after.primary.contains(id));
                }
            }
        }

        #[test]
        fn deleting_an_extant_node_never_demotes(
            (extant, edges) in arb_graph(),
            anchor in 0..VERTICES,
            removed in 0..VERTICES,
        ) {
            prop_assume!(extant[removed as usize]);
            let before = classify(&build(&extant, &edges, None), &name(anchor));
            let after = classify(&build(&extant, &edges, Some(removed)), &name(anchor));
            for id in &before.primary {
                prop_assert!(!after.secondary.contains(id));
            }
        }
    }
}
