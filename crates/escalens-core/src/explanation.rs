//! Explanation composition from a detected lens set.
//!
//! A pure lookup step: each lens carries one canned sentence, emitted in
//! catalog order and joined with single spaces. No lens detected falls back
//! to a fixed generic sentence.

use crate::lenses::LensName;

/// Fallback when the query matched no lens.
const DEFAULT_EXPLANATION: &str = "Escalations are primarily caused by unresolved repeated issues, \
     explicit requests for supervisors, and a perceived lack of resolution.";

fn lens_sentence(lens: LensName) -> &'static str {
    match lens {
        LensName::Delay => {
            "Prolonged delays in resolving customer issues increase frustration, \
             making escalation more likely."
        }
        LensName::Repetition => {
            "Repeated unresolved interactions signal service failure, which strongly \
             contributes to escalation."
        }
        LensName::EscalationRequest => {
            "Explicit requests for supervisors indicate loss of trust in frontline support, \
             often preceding escalation."
        }
        LensName::LegalThreat => {
            "Mentions of legal action or formal complaints reflect severe dissatisfaction \
             and directly trigger escalation outcomes."
        }
        LensName::ResolutionFailure => {
            "Perceived lack of resolution reinforces customer dissatisfaction, \
             leading to escalation."
        }
    }
}

/// Compose the explanation paragraph for a detected lens set.
///
/// Sentences appear in catalog order regardless of the order lenses were
/// handed in. An empty lens set returns the fixed default sentence.
pub fn generate_explanation(lenses: &[LensName]) -> String {
    if lenses.is_empty() {
        return DEFAULT_EXPLANATION.to_string();
    }

    LensName::ALL
        .iter()
        .filter(|lens| lenses.contains(lens))
        .map(|lens| lens_sentence(*lens))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lenses_return_default_verbatim() {
        assert_eq!(generate_explanation(&[]), DEFAULT_EXPLANATION);
    }

    #[test]
    fn test_single_lens_returns_its_sentence() {
        let explanation = generate_explanation(&[LensName::EscalationRequest]);
        assert!(explanation.contains("loss of trust in frontline support"));
        assert_eq!(explanation, lens_sentence(LensName::EscalationRequest));
    }

    #[test]
    fn test_sentences_follow_catalog_order_not_input_order() {
        let explanation =
            generate_explanation(&[LensName::LegalThreat, LensName::Delay]);

        let delay_at = explanation.find("Prolonged delays").unwrap();
        let legal_at = explanation.find("Mentions of legal action").unwrap();
        assert!(delay_at < legal_at);
    }

    #[test]
    fn test_sentences_join_with_single_space() {
        let explanation =
            generate_explanation(&[LensName::Delay, LensName::Repetition]);
        assert!(explanation.contains("more likely. Repeated unresolved"));
        assert!(!explanation.contains("  "));
    }

    #[test]
    fn test_all_lenses_yield_five_sentences() {
        let explanation = generate_explanation(&LensName::ALL);
        assert_eq!(explanation.matches(". ").count() + 1, 5);
    }
}
