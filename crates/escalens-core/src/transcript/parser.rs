//! Dataset parsing from JSON.
//!
//! The source document is a nested JSON file of conversations; the engine
//! wants a flat, ordered table of [`Turn`] rows. All malformed-input
//! surfacing happens here — downstream analysis never fails.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::types::Turn;

/// Errors that can occur when loading a transcript dataset.
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One utterance as it appears in the source document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Utterance {
    /// Who spoke (e.g. "customer", "agent").
    pub speaker: String,

    /// The utterance text.
    pub text: String,
}

/// One conversation record in the source document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranscriptRecord {
    /// Unique conversation identifier.
    pub transcript_id: String,

    /// Intent label for the whole conversation.
    pub intent: String,

    /// Business domain label for the whole conversation.
    pub domain: String,

    /// Ordered utterances.
    pub conversation: Vec<Utterance>,
}

/// The top-level transcript dataset document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub transcripts: Vec<TranscriptRecord>,
}

impl Dataset {
    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, TranscriptError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a dataset from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TranscriptError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Flatten into ordered turn rows.
    ///
    /// Turn indices are assigned by position within each conversation; the
    /// escalation flag is derived from the conversation's intent label and
    /// copied onto every row. Dataset order is preserved.
    pub fn flatten(&self) -> Vec<Turn> {
        let mut rows = Vec::new();

        for record in &self.transcripts {
            let is_escalation = Turn::intent_signals_escalation(&record.intent);

            for (turn_index, utterance) in record.conversation.iter().enumerate() {
                rows.push(Turn {
                    transcript_id: record.transcript_id.clone(),
                    turn_index,
                    speaker: utterance.speaker.clone(),
                    text: utterance.text.clone(),
                    intent: record.intent.clone(),
                    domain: record.domain.clone(),
                    is_escalation,
                });
            }
        }

        tracing::debug!(
            transcripts = self.transcripts.len(),
            turns = rows.len(),
            "dataset flattened"
        );
        rows
    }

    /// Read a dataset file and flatten it in one step.
    pub fn load_turns(path: impl AsRef<Path>) -> Result<Vec<Turn>, TranscriptError> {
        Ok(Self::from_json_file(path)?.flatten())
    }
}
