//! Structured-field requester — turns extracted resume text into a JSON record
//! via the model, and the HTTP handler that drives the whole pipeline.

pub mod handlers;
pub mod prompts;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::llm_client::{LlmError, TextGenerator};
use crate::parser::prompts::build_resume_prompt;

/// Error tag returned in place of a record when the model output isn't JSON.
pub const PARSE_FAILURE_TAG: &str = "Failed to parse JSON";

/// Result of one parse request: either the decoded record, passed through
/// without schema checks, or the raw model output that failed to decode.
///
/// Serialized untagged, so the wire body is exactly one of
/// `{"name": ..., ...}` or `{"error": ..., "raw_output": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParseOutcome {
    Record(Value),
    Failure { error: String, raw_output: String },
}

impl ParseOutcome {
    fn failure(raw_output: &str) -> Self {
        ParseOutcome::Failure {
            error: PARSE_FAILURE_TAG.to_string(),
            raw_output: raw_output.to_string(),
        }
    }
}

/// Prompts the model once with `resume_text` and decodes its reply.
///
/// A model-call error propagates; a reply that isn't JSON does not.
pub async fn parse_resume(
    model: &dyn TextGenerator,
    resume_text: &str,
) -> Result<ParseOutcome, LlmError> {
    let prompt = build_resume_prompt(resume_text);
    info!(
        "Requesting structured fields ({} bytes of resume text)",
        resume_text.len()
    );
    let raw = model.generate(&prompt).await?;
    Ok(decode_model_output(&raw))
}

/// Trims the reply, strips every code-fence marker and decodes strictly.
pub fn decode_model_output(raw: &str) -> ParseOutcome {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => ParseOutcome::Record(value),
        Err(e) => {
            warn!("Model output is not valid JSON: {e}");
            ParseOutcome::failure(raw)
        }
    }
}

/// Removes every "```json" and "```" marker, wherever it occurs.
fn strip_code_fences(text: &str) -> String {
    text.trim().replace("```json", "").replace("```", "")
}
