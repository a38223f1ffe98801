//! Core data rows shared across the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::evidence::EvidenceBundle;
use crate::lenses::LensName;

/// One utterance of a flattened transcript. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Transcript this turn belongs to.
    pub transcript_id: String,

    /// Position within the source conversation, order-significant.
    pub turn_index: usize,

    /// Who spoke the turn (e.g. "customer", "agent").
    pub speaker: String,

    /// The utterance text.
    pub text: String,

    /// Conversation-level intent label, copied onto every row.
    pub intent: String,

    /// Conversation-level domain label, copied onto every row.
    pub domain: String,

    /// Derived at load time: the intent label starts with "escalation",
    /// case-insensitive.
    pub is_escalation: bool,
}

impl Turn {
    /// Whether an intent label marks its conversation as escalated.
    pub fn intent_signals_escalation(intent: &str) -> bool {
        intent.to_lowercase().starts_with("escalation")
    }
}

/// Everything one query produces: the detected lens set, the supporting
/// evidence, and the composed explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Lenses the query activated, in catalog order.
    pub lenses: Vec<LensName>,

    /// Per-transcript evidence, strongest turns first.
    pub evidence: Vec<EvidenceBundle>,

    /// Human-readable explanation composed from the lens set.
    pub explanation: String,

    /// When the analysis ran.
    pub analyzed_at: DateTime<Utc>,
}
