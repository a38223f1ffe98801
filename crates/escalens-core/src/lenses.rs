//! Causal lens catalog and query-focus detection.
//!
//! A lens is a named, keyword-backed hypothesis about why conversations
//! escalate. The catalog is fixed at compile time: five lenses, always
//! evaluated in definition order wherever order matters. Keywords match as
//! case-insensitive substrings of the text under test.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed catalog of causal lenses, in definition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LensName {
    Delay,
    Repetition,
    EscalationRequest,
    LegalThreat,
    ResolutionFailure,
}

impl LensName {
    /// Every lens, in catalog order.
    pub const ALL: [LensName; 5] = [
        LensName::Delay,
        LensName::Repetition,
        LensName::EscalationRequest,
        LensName::LegalThreat,
        LensName::ResolutionFailure,
    ];

    /// Catalog name, snake_case, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            LensName::Delay => "delay",
            LensName::Repetition => "repetition",
            LensName::EscalationRequest => "escalation_request",
            LensName::LegalThreat => "legal_threat",
            LensName::ResolutionFailure => "resolution_failure",
        }
    }

    /// Human-facing title for rendering, e.g. "Escalation Request".
    pub fn title(self) -> &'static str {
        match self {
            LensName::Delay => "Delay",
            LensName::Repetition => "Repetition",
            LensName::EscalationRequest => "Escalation Request",
            LensName::LegalThreat => "Legal Threat",
            LensName::ResolutionFailure => "Resolution Failure",
        }
    }

    /// Trigger keywords. Lenses are disjoint by design but not enforced
    /// disjoint; a keyword carried by two lenses scores under both.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            LensName::Delay => &["wait", "long", "time", "delay", "hours", "days"],
            LensName::Repetition => &["again", "multiple", "times", "repeated", "called"],
            LensName::EscalationRequest => &["supervisor", "manager", "escalate"],
            LensName::LegalThreat => &["legal", "lawyer", "complaint", "sue"],
            LensName::ResolutionFailure => &["not fixed", "didn't work", "unresolved"],
        }
    }
}

impl fmt::Display for LensName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a free-text query to the lenses it touches.
///
/// The query is lowered once; each lens is appended at most once, on its
/// first keyword hit, so the output is deduplicated by construction and
/// ordered by catalog position, not by match position within the query.
/// Empty and unrelated queries yield an empty set; that is a normal result,
/// not an error.
pub fn detect_lenses(query: &str) -> Vec<LensName> {
    let query = query.to_lowercase();

    let mut active = Vec::new();
    for lens in LensName::ALL {
        if lens.keywords().iter().any(|kw| query.contains(kw)) {
            active.push(lens);
        }
    }

    if !active.is_empty() {
        tracing::debug!(lenses = ?active, "query focus detected");
    }

    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_catalog_has_five_lenses_with_keywords() {
        assert_eq!(LensName::ALL.len(), 5);
        for lens in LensName::ALL {
            assert!(!lens.keywords().is_empty());
        }
    }

    #[test]
    fn test_empty_query_detects_nothing() {
        assert!(detect_lenses("").is_empty());
    }

    #[test]
    fn test_unrelated_query_detects_nothing() {
        assert!(detect_lenses("unrelated gibberish").is_empty());
    }

    #[test]
    fn test_supervisor_query_is_case_insensitive() {
        let lenses = detect_lenses("Why do customers ask for a SUPERVISOR?");
        assert!(lenses.contains(&LensName::EscalationRequest));
    }

    #[test]
    fn test_output_follows_catalog_order_not_match_order() {
        // The legal keyword appears before the delay keyword in the query,
        // but delay precedes legal_threat in the catalog.
        let lenses = detect_lenses("will a lawyer help with this delay?");
        assert_eq!(lenses, vec![LensName::Delay, LensName::LegalThreat]);
    }

    #[test]
    fn test_lens_appears_at_most_once() {
        let lenses = detect_lenses("the delay took hours, then days");
        assert_eq!(lenses, vec![LensName::Delay]);
    }

    #[test]
    fn test_multi_lens_query() {
        let lenses = detect_lenses("waited for hours, asked multiple people, still not fixed");
        assert_eq!(
            lenses,
            vec![
                LensName::Delay,
                LensName::Repetition,
                LensName::ResolutionFailure,
            ]
        );
    }

    #[test]
    fn test_serializes_as_catalog_name() {
        let json = serde_json::to_string(&LensName::EscalationRequest).unwrap();
        assert_eq!(json, "\"escalation_request\"");
        assert_eq!(LensName::EscalationRequest.as_str(), "escalation_request");
    }

    proptest! {
        #[test]
        fn detector_output_is_deduplicated_and_catalog_ordered(query in ".*") {
            let lenses = detect_lenses(&query);
            prop_assert!(lenses.len() <= LensName::ALL.len());

            // Catalog positions must strictly increase, which implies both
            // uniqueness and catalog ordering.
            let positions: Vec<usize> = lenses
                .iter()
                .map(|l| LensName::ALL.iter().position(|c| c == l).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
