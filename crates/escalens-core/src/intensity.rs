//! Flat intensity scoring for escalated dialogue.
//!
//! Unlike the lens scorer, intensity ignores the query entirely: it measures
//! how heated a single turn reads against a fixed escalation vocabulary,
//! with small bonuses for negation and repetition wording. Used to surface
//! the hottest transcripts in a dataset without asking a question first.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::types::Turn;

lazy_static! {
    /// Vocabulary marking escalation pressure, scored flat per entry.
    /// Matched as case-insensitive substrings, like the lens keywords.
    static ref ESCALATION_KEYWORDS: Vec<&'static str> = vec![
        "supervisor",
        "manager",
        "complaint",
        "legal",
        "frustrating",
        "unacceptable",
        "wasted enough time",
        "lawyer",
        "escalate",
        "formal complaint",
    ];
}

/// Score one turn text: 2 per vocabulary hit, plus 1 when negation wording
/// ("not" / "never") is present and 1 when repetition wording ("again" /
/// "multiple") is present.
pub fn intensity_score(text: &str) -> u32 {
    let text = text.to_lowercase();

    let mut score = 0;
    for kw in ESCALATION_KEYWORDS.iter() {
        if text.contains(kw) {
            score += 2;
        }
    }

    if text.contains("not") || text.contains("never") {
        score += 1;
    }
    if text.contains("again") || text.contains("multiple") {
        score += 1;
    }

    score
}

/// One transcript ranked by its hottest turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Transcript the turn belongs to.
    pub transcript_id: String,

    /// Intensity of the hottest turn.
    pub score: u32,

    /// Text of the hottest turn; the earliest one on a tie.
    pub turn_text: String,
}

/// Rank escalation-flagged transcripts by their maximum-intensity turn.
///
/// Transcripts whose hottest turn scores 0 are dropped. Output is sorted
/// descending by score with a stable tie-break on first-appearance order,
/// then truncated to `limit`.
pub fn hottest_turns(turns: &[Turn], limit: usize) -> Vec<Hotspot> {
    let mut order: Vec<&str> = Vec::new();
    let mut best: HashMap<&str, (u32, &str)> = HashMap::new();

    for turn in turns.iter().filter(|t| t.is_escalation) {
        let id = turn.transcript_id.as_str();
        let score = intensity_score(&turn.text);

        match best.entry(id) {
            Entry::Vacant(slot) => {
                order.push(id);
                slot.insert((score, turn.text.as_str()));
            }
            Entry::Occupied(mut slot) => {
                if score > slot.get().0 {
                    slot.insert((score, turn.text.as_str()));
                }
            }
        }
    }

    let mut hotspots: Vec<Hotspot> = order
        .into_iter()
        .map(|id| {
            let (score, text) = best[id];
            Hotspot {
                transcript_id: id.to_string(),
                score,
                turn_text: text.to_string(),
            }
        })
        .filter(|h| h.score > 0)
        .collect();

    hotspots.sort_by_key(|h| std::cmp::Reverse(h.score));
    hotspots.truncate(limit);
    hotspots
}
