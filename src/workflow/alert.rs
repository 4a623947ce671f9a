//! Alert dispatch stage.
//!
//! Decides whether a verdict warrants a caregiver notification and attempts
//! at most one email send. This stage never fails the workflow: a missing
//! contact or a provider rejection becomes a `FAILED` outcome carried in the
//! response, not an error.

use tracing::{info, instrument, warn};

use crate::{
    base::{
        config::Config,
        types::{AlertOutcome, AlertStatus, PatientProfile, TriageVerdict},
    },
    service::mail::MailClient,
};

/// Dispatch a caregiver alert for an urgent verdict.
#[instrument(skip_all)]
pub async fn dispatch(mail: &MailClient, config: &Config, profile: &PatientProfile, verdict: &TriageVerdict) -> AlertOutcome {
    if !verdict.emergency_type.is_urgent() {
        info!("Verdict `{}` requires no alert.", verdict.emergency_type);
        return AlertOutcome::skipped();
    }

    let Some(recipient) = profile.caregiver_email.as_deref() else {
        warn!("Caregiver email missing for patient `{}`; alert not attempted.", profile.patient_id);
        return AlertOutcome::failed("Caregiver email missing from patient profile.");
    };

    let subject = format!("{}: {} DETECTED", config.alert_subject_prefix, verdict.emergency_type);
    let body = alert_body(profile, verdict);

    match mail.send_email(&config.sender_email, recipient, &subject, &body).await {
        Ok(()) => {
            info!("Alert email sent for `{}`.", verdict.emergency_type);
            AlertOutcome {
                status: AlertStatus::EmailSentConfirmed,
                message: format!("Guaranteed email alert sent for {} to caregiver: {recipient}", verdict.emergency_type),
            }
        }
        Err(err) => {
            warn!("Alert email failed: {err}");
            AlertOutcome::failed(format!("Mail send failed: {err}"))
        }
    }
}

/// Build the fixed-format plaintext alert body.
fn alert_body(profile: &PatientProfile, verdict: &TriageVerdict) -> String {
    format!(
        "*** URGENT LIFE-GUARD AI ALERT ***\n\
         Time: {time}\n\
         Patient: {name} ({age}) - ID {id}\n\
         EMERGENCY: {emergency}\n\
         ACTION: {action}\n\
         Patient Info Packet: Comorbidities: {comorbidities}. Medications: {meds}.\n\
         ---\n\
         This alert guarantees delivery and provides an auditable record of the crisis triage.",
        time = chrono::Utc::now().to_rfc3339(),
        name = profile.name,
        age = profile.age,
        id = profile.patient_id,
        emergency = verdict.emergency_type,
        action = verdict.action,
        comorbidities = profile.comorbidities,
        meds = profile.meds,
    )
}

// Tests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::{mock, predicate::eq};

    use super::*;
    use crate::{
        base::{
            config::ConfigInner,
            types::{EmergencyType, TriageAction, Void},
        },
        service::mail::GenericMailClient,
    };

    mock! {
        pub Mail {}

        #[async_trait]
        impl GenericMailClient for Mail {
            async fn send_email(&self, sender: &str, recipient: &str, subject: &str, body: &str) -> Void;
        }
    }

    fn test_config() -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                sender_email: "alerts@example.com".to_string(),
                alert_subject_prefix: "URGENT LIFE-GUARD AI ALERT".to_string(),
                ..Default::default()
            }),
        }
    }

    fn test_profile(caregiver_email: Option<&str>) -> PatientProfile {
        PatientProfile {
            patient_id: "P101".to_string(),
            name: "Abe Simpson".to_string(),
            age: 83,
            comorbidities: "COPD, Arthritis".to_string(),
            meds: "Tiotropium".to_string(),
            caregiver_email: caregiver_email.map(str::to_string),
        }
    }

    fn urgent_verdict() -> TriageVerdict {
        TriageVerdict {
            emergency_type: EmergencyType::FallsFractures,
            action: TriageAction::MockAmbulanceDispatch,
        }
    }

    #[tokio::test]
    async fn test_none_verdict_is_skipped_without_send() {
        let mut mock = MockMail::new();
        mock.expect_send_email().times(0);
        let mail = MailClient::new(Arc::new(mock));

        let verdict = TriageVerdict {
            emergency_type: EmergencyType::None,
            action: TriageAction::None,
        };

        let outcome = dispatch(&mail, &test_config(), &test_profile(Some("c@example.com")), &verdict).await;

        assert_eq!(outcome.status, AlertStatus::Skipped);
    }

    #[tokio::test]
    async fn test_error_verdict_is_skipped_without_send() {
        let mut mock = MockMail::new();
        mock.expect_send_email().times(0);
        let mail = MailClient::new(Arc::new(mock));

        let outcome = dispatch(&mail, &test_config(), &test_profile(Some("c@example.com")), &TriageVerdict::error()).await;

        assert_eq!(outcome.status, AlertStatus::Skipped);
    }

    #[tokio::test]
    async fn test_urgent_verdict_sends_exactly_one_email() {
        let mut mock = MockMail::new();
        mock.expect_send_email()
            .with(eq("alerts@example.com"), eq("caregiver@example.com"), mockall::predicate::always(), mockall::predicate::always())
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        let mail = MailClient::new(Arc::new(mock));

        let outcome = dispatch(&mail, &test_config(), &test_profile(Some("caregiver@example.com")), &urgent_verdict()).await;

        assert_eq!(outcome.status, AlertStatus::EmailSentConfirmed);
        assert!(outcome.message.contains("FALLS_FRACTURES"));
        assert!(outcome.message.contains("caregiver@example.com"));
    }

    #[tokio::test]
    async fn test_missing_caregiver_email_fails_without_send() {
        let mut mock = MockMail::new();
        mock.expect_send_email().times(0);
        let mail = MailClient::new(Arc::new(mock));

        let outcome = dispatch(&mail, &test_config(), &test_profile(None), &urgent_verdict()).await;

        assert_eq!(outcome.status, AlertStatus::Failed);
        assert!(outcome.message.contains("Caregiver email missing"));
    }

    #[tokio::test]
    async fn test_provider_rejection_carries_detail() {
        let mut mock = MockMail::new();
        mock.expect_send_email()
            .times(1)
            .returning(|_, _, _, _| Err(anyhow::anyhow!("sender address not verified")));
        let mail = MailClient::new(Arc::new(mock));

        let outcome = dispatch(&mail, &test_config(), &test_profile(Some("c@example.com")), &urgent_verdict()).await;

        assert_eq!(outcome.status, AlertStatus::Failed);
        assert!(outcome.message.contains("sender address not verified"));
    }

    #[test]
    fn test_alert_body_contains_patient_and_verdict_fields() {
        let body = alert_body(&test_profile(Some("c@example.com")), &urgent_verdict());

        assert!(body.contains("Abe Simpson"));
        assert!(body.contains("(83)"));
        assert!(body.contains("ID P101"));
        assert!(body.contains("EMERGENCY: FALLS_FRACTURES"));
        assert!(body.contains("ACTION: MOCK_AMBULANCE_DISPATCH"));
        assert!(body.contains("COPD, Arthritis"));
        assert!(body.contains("Tiotropium"));
    }
}
