//! Common types and result aliases shared across the agent.

use std::fmt;

use serde::{Deserialize, Serialize};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// The closed set of emergency categories the classifier may assign.
///
/// `Error` is a sentinel distinct from `None`: `None` means "assessed, not
/// urgent" while `Error` means "assessment failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmergencyType {
    CardiacStroke,
    FallsFractures,
    BreathingCrisis,
    None,
    Error,
}

impl EmergencyType {
    /// Whether this category warrants a caregiver alert.
    pub fn is_urgent(&self) -> bool {
        !matches!(self, EmergencyType::None | EmergencyType::Error)
    }
}

impl fmt::Display for EmergencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmergencyType::CardiacStroke => "CARDIAC_STROKE",
            EmergencyType::FallsFractures => "FALLS_FRACTURES",
            EmergencyType::BreathingCrisis => "BREATHING_CRISIS",
            EmergencyType::None => "NONE",
            EmergencyType::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// The closed set of first actions the classifier may recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriageAction {
    MockAmbulanceDispatch,
    AdviseInhaler,
    AlertFamily,
    None,
    Error,
}

impl fmt::Display for TriageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TriageAction::MockAmbulanceDispatch => "MOCK_AMBULANCE_DISPATCH",
            TriageAction::AdviseInhaler => "ADVISE_INHALER",
            TriageAction::AlertFamily => "ALERT_FAMILY",
            TriageAction::None => "NONE",
            TriageAction::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// The structured classification result for one symptom statement.
///
/// Exactly one type and one action per statement. Values outside the closed
/// sets fail enum deserialization and collapse to [`TriageVerdict::error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriageVerdict {
    pub emergency_type: EmergencyType,
    pub action: TriageAction,
}

impl TriageVerdict {
    /// The sentinel verdict representing a failed assessment.
    pub fn error() -> Self {
        Self {
            emergency_type: EmergencyType::Error,
            action: TriageAction::Error,
        }
    }
}

/// Status of one alert dispatch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Skipped,
    #[serde(rename = "EMAIL_SENT_CONFIRMED")]
    EmailSentConfirmed,
    #[serde(rename = "FAILED")]
    Failed,
}

/// The result of an attempted caregiver notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertOutcome {
    #[serde(rename = "AlertStatus")]
    pub status: AlertStatus,
    #[serde(rename = "Message")]
    pub message: String,
}

impl AlertOutcome {
    pub fn skipped() -> Self {
        Self {
            status: AlertStatus::Skipped,
            message: "No critical action required.".to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: AlertStatus::Failed,
            message: message.into(),
        }
    }
}

/// The static medical and contact record for one monitored individual.
///
/// Read-only from the agent's perspective; maintained by an external
/// data-entry process and fetched fresh on every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub patient_id: String,
    pub name: String,
    pub age: u32,
    pub comorbidities: String,
    pub meds: String,
    pub caregiver_email: Option<String>,
}

/// The reduced patient packet surfaced in responses.
///
/// Deliberately omits the identifier and the caregiver contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfoPacket {
    pub name: String,
    pub comorbidities: String,
    pub meds: String,
}

impl From<&PatientProfile> for PatientInfoPacket {
    fn from(profile: &PatientProfile) -> Self {
        Self {
            name: profile.name.clone(),
            comorbidities: profile.comorbidities.clone(),
            meds: profile.meds.clone(),
        }
    }
}

/// A request at the agent boundary, determined before the workflow runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriageRequest {
    /// A health-check probe; touches no external dependency.
    Probe,
    /// A symptom submission.
    Submit { symptoms: Option<String> },
}

/// Static acknowledgment returned for probe requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyAck {
    pub status: String,
    pub message: String,
}

impl Default for ReadyAck {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
            message: "Agent is waiting for symptom data.".to_string(),
        }
    }
}

/// The success envelope for one completed triage workflow.
///
/// Alert failure is a sub-status here, not a transport error: the envelope
/// still reports `Success` when the email could not be sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReport {
    pub status: String,
    pub message: String,
    pub input_symptoms: String,
    pub ai_classification: TriageVerdict,
    pub patient_info_packet: PatientInfoPacket,
    pub alert_status: AlertOutcome,
}

/// The response produced by the workflow for either request variant.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TriageResponse {
    Ready(ReadyAck),
    Report(Box<TriageReport>),
}

/// The uniform failure envelope for the single fatal-error path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub status: String,
    pub message: String,
    pub error_detail: String,
}

impl ErrorEnvelope {
    pub fn new(detail: impl fmt::Display) -> Self {
        Self {
            status: "Error".to_string(),
            message: "Backend processing failure.".to_string(),
            error_detail: detail.to_string(),
        }
    }
}
