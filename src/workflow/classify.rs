//! Emergency classification stage.
//!
//! Maps an unstructured symptom statement to a [`TriageVerdict`] via the LLM.
//! This stage never fails the workflow: a model error or unparseable
//! completion becomes the `{ERROR, ERROR}` sentinel verdict, which the alert
//! stage treats as "skip".

use tracing::{info, instrument, warn};

use crate::{
    base::{prompts, types::TriageVerdict},
    service::llm::LlmClient,
};

/// Classify a symptom statement into a triage verdict.
#[instrument(skip(llm))]
pub async fn classify(llm: &LlmClient, statement: &str) -> TriageVerdict {
    let prompt = prompts::triage_prompt(statement);

    match llm.complete(&prompt).await {
        Ok(completion) => {
            let verdict = parse_verdict(&completion);
            info!("Classified statement as `{}` / `{}`.", verdict.emergency_type, verdict.action);
            verdict
        }
        Err(err) => {
            warn!("Classification call failed, returning sentinel verdict: {err}");
            TriageVerdict::error()
        }
    }
}

/// Parse a model completion into a verdict.
///
/// Model output is not always clean JSON despite instructions, so the object
/// is sliced out between the first `{` and the last `}` before parsing. Any
/// failure, including field values outside the closed sets, yields the
/// sentinel verdict rather than an error.
pub fn parse_verdict(completion: &str) -> TriageVerdict {
    extract_json_object(completion)
        .and_then(|candidate| serde_json::from_str(candidate).ok())
        .unwrap_or_else(TriageVerdict::error)
}

/// Slice the substring from the first `{` to the last `}`, if both exist in
/// that order.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    if start < end { Some(&text[start..=end]) } else { None }
}

// Tests.
