//! Evidence extraction: scoring escalated turns against the active lenses.
//!
//! Works over a fully materialized turn table, never over raw transcripts.
//! The pipeline per transcript: filter to escalation-flagged turns, score
//! each turn, keep positive scores, stable-sort descending, truncate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::lenses::LensName;
use crate::types::Turn;

/// Maximum factor texts carried per bundle.
const MAX_FACTORS: usize = 3;

/// Per-transcript record of the top-scoring turn texts supporting the
/// detected lenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceBundle {
    /// Transcript the factors were drawn from.
    pub transcript_id: String,

    /// One to three turn texts, highest causal score first.
    pub factors: Vec<String>,
}

/// Additive causal score for one turn text.
///
/// Every keyword of every active lens contained in the lowered text adds 2.
/// There is no short-circuit: a keyword carried by two active lenses counts
/// under both, unlike the detector, which stops at a lens's first hit.
pub fn causal_score(text: &str, lenses: &[LensName]) -> u32 {
    let text = text.to_lowercase();

    let mut score = 0;
    for lens in lenses {
        for kw in lens.keywords() {
            if text.contains(kw) {
                score += 2;
            }
        }
    }
    score
}

/// Score every escalation-flagged turn against the active lenses and bundle
/// the strongest evidence per transcript.
///
/// Transcripts are visited in first-appearance order of their id among the
/// escalation-flagged turns, so output order is deterministic for a given
/// turn table. Within a transcript, turns with a positive score are sorted
/// descending by score; the sort is stable, so equal scores keep their
/// conversation order. A transcript with no qualifying turn emits no bundle.
///
/// The active lens set is echoed back as the second tuple element so a
/// caller that resolved lenses from a query can hand both to the renderer
/// in one move. Empty `turns` or empty `lenses` produce an empty bundle
/// list, never an error.
pub fn extract_evidence(
    turns: &[Turn],
    lenses: &[LensName],
) -> (Vec<EvidenceBundle>, Vec<LensName>) {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Turn>> = HashMap::new();

    for turn in turns.iter().filter(|t| t.is_escalation) {
        let id = turn.transcript_id.as_str();
        if !groups.contains_key(id) {
            order.push(id);
        }
        groups.entry(id).or_default().push(turn);
    }

    let mut evidence = Vec::new();
    for transcript_id in order {
        // Caller-local working set; input rows are never mutated.
        let mut scored: Vec<(u32, &Turn)> = groups[transcript_id]
            .iter()
            .map(|t| (causal_score(&t.text, lenses), *t))
            .filter(|(score, _)| *score > 0)
            .collect();

        if scored.is_empty() {
            continue;
        }

        scored.sort_by_key(|(score, _)| std::cmp::Reverse(*score));

        evidence.push(EvidenceBundle {
            transcript_id: transcript_id.to_string(),
            factors: scored
                .iter()
                .take(MAX_FACTORS)
                .map(|(_, t)| t.text.clone())
                .collect(),
        });
    }

    tracing::debug!(bundles = evidence.len(), "evidence extracted");
    (evidence, lenses.to_vec())
}
