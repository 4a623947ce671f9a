//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default OpenAI model to use for triage classification.
fn default_openai_model() -> String {
    "gpt-4.1".to_string()
}

/// Default sampling temperature: fully deterministic decoding.
fn default_openai_temperature() -> f32 {
    0.0
}

/// Default max output tokens for the triage verdict.
fn default_openai_max_tokens() -> u32 {
    500
}

/// Default socket address to serve on.
fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Default email subject prefix for caregiver alerts.
fn default_alert_subject_prefix() -> String {
    "URGENT LIFE-GUARD AI ALERT".to_string()
}

/// Configuration for the lifeguard agent.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// OpenAI API key (`OPENAI_API_KEY`).
    pub openai_api_key: String,
    /// OpenAI model to use for classification (`OPENAI_MODEL`).
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Sampling temperature for classification (`OPENAI_TEMPERATURE`).
    /// Kept at 0 so identical statements yield identical verdicts.
    #[serde(default = "default_openai_temperature")]
    pub openai_temperature: f32,
    /// Max output tokens for the verdict (`OPENAI_MAX_TOKENS`).
    #[serde(default = "default_openai_max_tokens")]
    pub openai_max_tokens: u32,
    /// Identifier of the monitored patient (`PATIENT_ID`).
    pub patient_id: String,
    /// Pre-verified sender address for alert email (`SENDER_EMAIL`).
    pub sender_email: String,
    /// Subject prefix for alert email (`ALERT_SUBJECT_PREFIX`).
    #[serde(default = "default_alert_subject_prefix")]
    pub alert_subject_prefix: String,
    /// Transactional mail service endpoint (`MAIL_ENDPOINT`).
    pub mail_endpoint: String,
    /// Transactional mail service API key (`MAIL_API_KEY`).
    pub mail_api_key: String,
    /// Profile store endpoint URL (`DB_ENDPOINT`); `memory` for in-process.
    pub db_endpoint: String,
    /// Profile store username (`DB_USERNAME`).
    #[serde(default)]
    pub db_username: String,
    /// Profile store password (`DB_PASSWORD`).
    #[serde(default)]
    pub db_password: String,
    /// Socket address to serve on (`LISTEN_ADDR`).
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("LIFEGUARD"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        if result.openai_temperature < 0.0 || result.openai_temperature > 2.0 {
            return Err(anyhow::anyhow!("OpenAI temperature must be between 0 and 2."));
        }

        if result.openai_max_tokens < 1 || result.openai_max_tokens > 128000 {
            return Err(anyhow::anyhow!("OpenAI max tokens must be between 1 and 128000."));
        }

        if result.patient_id.trim().is_empty() {
            return Err(anyhow::anyhow!("Patient identifier must not be empty."));
        }

        if result.sender_email.trim().is_empty() {
            return Err(anyhow::anyhow!("Sender email must not be empty."));
        }

        Ok(result)
    }
}
