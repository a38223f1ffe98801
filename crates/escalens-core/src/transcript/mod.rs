//! Transcript dataset loading and flattening.

mod parser;

pub use parser::{Dataset, TranscriptError, TranscriptRecord, Utterance};
