//! # escalens-core
//!
//! Deterministic causal-analysis engine for escalated customer-service
//! conversations.
//!
//! Answers natural-language questions of the form "why do conversations
//! escalate?" by:
//! - mapping the query onto a fixed catalog of causal lenses,
//! - scoring every turn of every escalated transcript against those lenses,
//! - bundling the strongest turns per transcript as evidence,
//! - composing a textual explanation from the detected lens set.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: the same dataset and query always produce the same
//!    report (up to the timestamp)
//! 2. **No inference**: all scoring is fixed keyword containment; nothing is
//!    learned from the data
//! 3. **Never fails**: empty data, no lens match, and no evidence are
//!    ordinary results, not errors
//! 4. **Share-nothing**: every function borrows its input and mutates
//!    nothing; safe to call concurrently
//!
//! ## Example
//!
//! ```rust,ignore
//! use escalens_core::{analyze, Dataset};
//!
//! let turns = Dataset::load_turns("transcripts.json")?;
//! let report = analyze(&turns, "Why do customers ask for supervisors?");
//!
//! println!("{}", report.explanation);
//! for bundle in &report.evidence {
//!     println!("{}: {:?}", bundle.transcript_id, bundle.factors);
//! }
//! ```

pub mod evidence;
pub mod explanation;
pub mod intensity;
pub mod lenses;
pub mod transcript;
pub mod types;

// Re-export main types at crate root
pub use evidence::{causal_score, extract_evidence, EvidenceBundle};
pub use explanation::generate_explanation;
pub use intensity::{hottest_turns, intensity_score, Hotspot};
pub use lenses::{detect_lenses, LensName};
pub use transcript::{Dataset, TranscriptError, TranscriptRecord, Utterance};
pub use types::{AnalysisReport, Turn};

use chrono::Utc;

/// Run the full pipeline for one query against a flattened turn table.
///
/// This is the main entry point: detect the query's lens focus, extract
/// per-transcript evidence, and compose the explanation. Pure apart from
/// the timestamp read.
pub fn analyze(turns: &[Turn], query: &str) -> AnalysisReport {
    let lenses = detect_lenses(query);
    let (evidence, lenses) = extract_evidence(turns, &lenses);
    let explanation = generate_explanation(&lenses);

    tracing::debug!(
        lenses = lenses.len(),
        bundles = evidence.len(),
        "analysis complete"
    );

    AnalysisReport {
        lenses,
        evidence,
        explanation,
        analyzed_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_turns() -> Vec<Turn> {
        let dataset = Dataset::from_json(
            r#"{
                "transcripts": [
                    {
                        "transcript_id": "T1",
                        "intent": "escalation_complaint",
                        "domain": "telecom",
                        "conversation": [
                            {"speaker": "customer", "text": "I have called three times about this"},
                            {"speaker": "customer", "text": "Please escalate this to a supervisor"}
                        ]
                    },
                    {
                        "transcript_id": "T2",
                        "intent": "billing_inquiry",
                        "domain": "billing",
                        "conversation": [
                            {"speaker": "customer", "text": "I demand a supervisor right now"}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();
        dataset.flatten()
    }

    #[test]
    fn test_supervisor_question_end_to_end() {
        let turns = sample_turns();
        let report = analyze(&turns, "Why do customers ask for supervisors?");

        assert_eq!(report.lenses, vec![LensName::EscalationRequest]);

        // T2 is not escalation-flagged, so only T1 yields evidence; within
        // T1 only the supervisor turn scores.
        assert_eq!(report.evidence.len(), 1);
        assert_eq!(report.evidence[0].transcript_id, "T1");
        assert_eq!(
            report.evidence[0].factors,
            vec!["Please escalate this to a supervisor"]
        );

        assert!(report
            .explanation
            .contains("loss of trust in frontline support"));
    }

    #[test]
    fn test_unmatched_question_falls_back_to_default() {
        let turns = sample_turns();
        let report = analyze(&turns, "What is the meaning of all this?");

        assert!(report.lenses.is_empty());
        assert!(report.evidence.is_empty());
        assert!(report
            .explanation
            .starts_with("Escalations are primarily caused by"));
    }

    #[test]
    fn test_empty_turn_table_end_to_end() {
        let report = analyze(&[], "Why do long delays cause escalation?");

        assert_eq!(report.lenses, vec![LensName::Delay]);
        assert!(report.evidence.is_empty());
        assert!(report.explanation.contains("Prolonged delays"));
    }

    #[test]
    fn test_report_serializes_with_catalog_lens_names() {
        let turns = sample_turns();
        let report = analyze(&turns, "Why do customers ask for supervisors?");

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"escalation_request\""));
        assert!(json.contains("\"transcript_id\":\"T1\""));
    }
}
