//! Input documents
//!
//! JSON readers for the shapes the engine accepts: a transcript (free text,
//! role-tagged turns or a chat-log exchange list), a list of texts to
//! cluster and a class roster mapping learner names to transcripts.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use tutorlens_domain::error::{Error, Result};
use tutorlens_domain::{Exchange, Transcript, TranscriptInput};

use crate::error_ext::ErrorContext;

/// Parse a transcript document
///
/// An array whose records carry `user_message` or `ai_response` is read as
/// a chat log. Anything else must be a string or a list of `{role, content}`
/// turns; a turn missing either field is a JSON error.
pub fn parse_transcript(json: &str) -> Result<Transcript> {
    transcript_from_value(serde_json::from_str(json)?)
}

/// Read a transcript document from disk
pub fn load_transcript(path: &Path) -> Result<Transcript> {
    parse_transcript(&read(path)?)
}

/// Read a JSON array of strings
pub fn load_texts(path: &Path) -> Result<Vec<String>> {
    Ok(serde_json::from_str(&read(path)?)?)
}

/// Read a class roster: a JSON object of learner name to transcript document
///
/// Learners come back sorted by name.
pub fn load_class(path: &Path) -> Result<Vec<(String, Transcript)>> {
    parse_class(&read(path)?)
}

/// Parse a class roster document
pub fn parse_class(json: &str) -> Result<Vec<(String, Transcript)>> {
    let roster: BTreeMap<String, Value> = serde_json::from_str(json)?;
    roster
        .into_iter()
        .map(|(learner, document)| Ok((learner, transcript_from_value(document)?)))
        .collect()
}

fn transcript_from_value(value: Value) -> Result<Transcript> {
    if is_exchange_log(&value) {
        let exchanges: Vec<Exchange> = serde_json::from_value(value)?;
        return Ok(Transcript::from_exchanges(&exchanges));
    }
    let input: TranscriptInput = serde_json::from_value(value)?;
    Ok(input.into())
}

fn is_exchange_log(value: &Value) -> bool {
    value.as_array().is_some_and(|records| {
        records
            .iter()
            .any(|record| record.get("user_message").is_some() || record.get("ai_response").is_some())
    })
}

fn read(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::not_found(path.display().to_string()));
    }
    std::fs::read_to_string(path).io_context(format!("Failed to read {}", path.display()))
}
