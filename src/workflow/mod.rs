//! The triage-and-notify workflow.
//!
//! Sequencing is strictly linear: profile lookup, then classification, then
//! conditional alert dispatch, then response assembly. Only two kinds of
//! failure ever escape this module as errors: a missing patient record and
//! anything unexpected. Classification and dispatch failures are absorbed
//! into the response as data ([`TriageVerdict::error`] and a `FAILED`
//! [`AlertOutcome`](crate::base::types::AlertOutcome) respectively), because
//! an LLM hiccup or a missing email address must not prevent the rest of the
//! triage record from reaching the caller.

pub mod alert;
pub mod classify;

use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        types::{ReadyAck, Res, TriageReport, TriageRequest, TriageResponse},
    },
    service::{llm::LlmClient, mail::MailClient, profile::ProfileStore},
};

/// Placeholder substituted for an empty or missing symptom field.
const NO_SYMPTOMS_PLACEHOLDER: &str = "No symptoms provided.";

/// Run one request through the workflow.
///
/// Probe requests return the static ready acknowledgment and touch no
/// external dependency. Submit requests execute the full
/// lookup → classify → dispatch sequence against the configured patient.
#[instrument(skip(config, profiles, llm, mail))]
pub async fn run(request: TriageRequest, config: &Config, profiles: &ProfileStore, llm: &LlmClient, mail: &MailClient) -> Res<TriageResponse> {
    match request {
        TriageRequest::Probe => Ok(TriageResponse::Ready(ReadyAck::default())),
        TriageRequest::Submit { symptoms } => {
            let report = submit(symptoms, config, profiles, llm, mail).await?;
            Ok(TriageResponse::Report(Box::new(report)))
        }
    }
}

/// Execute the triage workflow for one symptom submission.
#[instrument(skip_all)]
async fn submit(symptoms: Option<String>, config: &Config, profiles: &ProfileStore, llm: &LlmClient, mail: &MailClient) -> Res<TriageReport> {
    let statement = normalize_symptoms(symptoms);

    // Lookup: absent profile aborts the workflow before classification.
    let profile = profiles
        .get_patient(&config.patient_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Patient ID {} not found.", config.patient_id))?;

    // Classify and dispatch never abort; their failures are carried as data.
    let verdict = classify::classify(llm, &statement).await;
    let outcome = alert::dispatch(mail, config, &profile, &verdict).await;

    info!("Workflow completed for patient `{}`.", profile.patient_id);

    Ok(TriageReport {
        status: "Success".to_string(),
        message: "AI Agent workflow completed.".to_string(),
        input_symptoms: statement,
        ai_classification: verdict,
        patient_info_packet: (&profile).into(),
        alert_status: outcome,
    })
}

/// Trim the submitted symptom text, substituting a fixed placeholder when
/// empty or missing.
fn normalize_symptoms(symptoms: Option<String>) -> String {
    match symptoms {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => NO_SYMPTOMS_PLACEHOLDER.to_string(),
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_symptoms_trims() {
        assert_eq!(normalize_symptoms(Some("  chest pain  ".to_string())), "chest pain");
    }

    #[test]
    fn test_normalize_symptoms_substitutes_placeholder() {
        assert_eq!(normalize_symptoms(None), NO_SYMPTOMS_PLACEHOLDER);
        assert_eq!(normalize_symptoms(Some(String::new())), NO_SYMPTOMS_PLACEHOLDER);
        assert_eq!(normalize_symptoms(Some("   ".to_string())), NO_SYMPTOMS_PLACEHOLDER);
    }
}
