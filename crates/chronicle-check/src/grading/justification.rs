//! Keyword heuristic for free-text justifications.
//!
//! Best-effort only: the text is lowercased and searched for reasoning
//! markers that fit the node's actual verdict. Any non-empty justification
//! for a correct answer earns at least one point; a matching marker earns two.

use chronicle_core::Distance;

use super::GradingConfig;

/// Facts about the graded node that the markers are checked against.
#[derive(Debug, Clone, Copy)]
pub struct JustificationContext {
    /// Whether the node is primary under the graded topic.
    pub is_primary: bool,
    /// Mediation depth from the topic anchor.
    pub depth: Distance,
    pub node_year: i32,
    pub event_year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JustificationScore {
    /// 0, 1 or 2.
    pub points: u32,
    /// Appended to the classification feedback; starts with a space.
    pub feedback: String,
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

fn full(feedback: impl Into<String>) -> JustificationScore {
    JustificationScore {
        points: 2,
        feedback: feedback.into(),
    }
}

/// Scores a justification for a correctly classified node.
pub fn score_justification(
    text: &str,
    ctx: &JustificationContext,
    config: &GradingConfig,
) -> JustificationScore {
    let text = text.to_lowercase();
    if text.is_empty() {
        return JustificationScore {
            points: 0,
            feedback: String::new(),
        };
    }

    if ctx.is_primary {
        score_primary(&text, ctx, config)
    } else {
        score_secondary(&text, ctx, config)
    }
}

fn score_primary(text: &str, ctx: &JustificationContext, config: &GradingConfig) -> JustificationScore {
    if text.contains("witness") && ctx.depth == Distance::Hops(1) {
        full(" ✓ Excellent reasoning - this is indeed an eyewitness account!")
    } else if contains_any(text, &["closest", "surviving"]) {
        full(" ✓ Excellent - correctly identified as the closest extant source!")
    } else if contains_any(text, &["earlier sources", "no longer exist"])
        && text.contains("closest extant")
    {
        full(" ✓ Perfect! This depends on lost sources, making it the closest extant source!")
    } else if contains_any(text, &["time of", "shortly after"])
        && ctx.node_year <= ctx.event_year + config.contemporary_window_years
    {
        full(" ✓ Correct - the timing makes this primary!")
    } else {
        JustificationScore {
            points: 1,
            feedback: " Justification is reasonable but could be more specific about why this is the *closest extant* source.".into(),
        }
    }
}

fn score_secondary(
    text: &str,
    ctx: &JustificationContext,
    config: &GradingConfig,
) -> JustificationScore {
    let elapsed = ctx.node_year - ctx.event_year;
    if text.contains("long after") && elapsed > config.long_after_years {
        full(format!(
            " ✓ Excellent - written {} years after the event, and other extant sources are closer!",
            elapsed
        ))
    } else if text.contains("modern scholarship")
        || (text.contains("modern") && text.contains("analyz"))
    {
        full(" ✓ Correct - modern scholarship analyzing other surviving sources!")
    } else if contains_any(text, &["summarizes", "analyzes", "compiles", "synthesizes"])
        && contains_any(text, &["surviving", "extant", "earlier"])
    {
        full(" ✓ Correct - this analyzes/compiles other surviving sources!")
    } else if contains_any(
        text,
        &["multiple steps", "several", "removed from", "transmission steps"],
    ) {
        full(" ✓ Good reasoning about mediation depth!")
    } else {
        JustificationScore {
            points: 1,
            feedback: " Justification is reasonable but could be more specific about why other extant sources are closer to the event.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary(depth: u32, node_year: i32) -> JustificationContext {
        JustificationContext {
            is_primary: true,
            depth: Distance::Hops(depth),
            node_year,
            event_year: 800,
        }
    }

    fn secondary(node_year: i32) -> JustificationContext {
        JustificationContext {
            is_primary: false,
            depth: Distance::Hops(2),
            node_year,
            event_year: 800,
        }
    }

    fn points(text: &str, ctx: JustificationContext) -> u32 {
        score_justification(text, &ctx, &GradingConfig::default()).points
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(points("", primary(1, 800)), 0);
    }

    #[test]
    fn whitespace_text_earns_fallback_point() {
        let score = score_justification("   ", &primary(1, 800), &GradingConfig::default());
        assert_eq!(score.points, 1);
        assert!(score.feedback.contains("could be more specific"));
    }

    #[test]
    fn witness_only_counts_one_hop_from_anchor() {
        assert_eq!(points("An eyeWITNESS wrote this", primary(1, 800)), 2);
        assert_eq!(points("An eyewitness wrote this", primary(2, 800)), 1);
    }

    #[test]
    fn closest_or_surviving_earns_full_marks() {
        assert_eq!(points("It is the closest source we have", primary(3, 1100)), 2);
        assert_eq!(points("Oldest surviving text", primary(3, 1100)), 2);
    }

    #[test]
    fn timing_respects_contemporary_window() {
        assert_eq!(points("written at the time of the raid", primary(2, 810)), 2);
        assert_eq!(points("written at the time of the raid", primary(2, 811)), 1);

        let wide = GradingConfig {
            contemporary_window_years: 20,
            ..GradingConfig::default()
        };
        let score = score_justification("shortly after", &primary(2, 815), &wide);
        assert_eq!(score.points, 2);
    }

    #[test]
    fn long_after_needs_more_than_threshold_years() {
        let score = score_justification(
            "Written long after the fact",
            &secondary(851),
            &GradingConfig::default(),
        );
        assert_eq!(score.points, 2);
        assert!(score.feedback.contains("written 51 years after"));
        assert_eq!(points("Written long after the fact", secondary(850)), 1);
    }

    #[test]
    fn secondary_markers() {
        assert_eq!(points("modern scholarship", secondary(2000)), 2);
        assert_eq!(points("a modern author analyzing texts", secondary(2000)), 2);
        assert_eq!(points("a modern author", secondary(2000)), 1);
        assert_eq!(points("it compiles earlier chronicles", secondary(900)), 2);
        assert_eq!(points("it compiles things", secondary(900)), 1);
        assert_eq!(points("several hands copied it", secondary(900)), 2);
    }

    #[test]
    fn score_never_exceeds_two() {
        let text = "closest surviving witness long after modern scholarship several";
        for ctx in [primary(1, 800), secondary(2000)] {
            assert!(points(text, ctx) <= 2);
        }
    }
}
