//! Prompt templates for LLM triage.

/// Instruction prefix sent with every classification request.
pub const TRIAGE_DIRECTIVE: &str = "You are an AI Triage Agent. Given the statement, classify the emergency type and the required action.";

/// Build the full triage prompt for a symptom statement.
///
/// The statement is embedded verbatim: this is an injection-prone boundary,
/// which is why the response is parsed into closed enums rather than trusted.
pub fn triage_prompt(statement: &str) -> String {
    format!(
        r#"{TRIAGE_DIRECTIVE}
Emergency Type MUST be one of: [CARDIAC_STROKE, FALLS_FRACTURES, BREATHING_CRISIS, NONE].
Action MUST be one of: [MOCK_AMBULANCE_DISPATCH, ADVISE_INHALER, ALERT_FAMILY, NONE].

Statement: "{statement}"

Respond ONLY with the EXACT JSON object format below. DO NOT add any extra text or markdown.
{{"emergency_type": "<TYPE>", "action": "<ACTION>"}}"#
    )
}
