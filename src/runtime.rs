//! Runtime services and shared state for the lifeguard agent.

use tracing::instrument;

use crate::{
    base::{
        config::Config,
        types::{Res, TriageRequest, TriageResponse},
    },
    service::{llm::LlmClient, mail::MailClient, profile::ProfileStore},
    workflow,
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the profile store, LLM client, mail client, and
/// configuration. It is designed to be trivially cloneable, allowing it to be
/// passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The profile store instance.
    pub profiles: ProfileStore,
    /// The LLM client instance.
    pub llm: LlmClient,
    /// The mail client instance.
    pub mail: MailClient,
}

impl Runtime {
    /// Create a new runtime instance.
    ///
    /// Any client that cannot be constructed short-circuits here, before the
    /// workflow can run.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Initialize the profile store.
        let profiles = ProfileStore::surreal(&config).await?;

        // Initialize the LLM client.
        let llm = LlmClient::openai(&config);

        // Initialize the mail client.
        let mail = MailClient::http(&config)?;

        Ok(Self { config, profiles, llm, mail })
    }

    /// Run one request through the triage workflow.
    pub async fn triage(&self, request: TriageRequest) -> Res<TriageResponse> {
        workflow::run(request, &self.config, &self.profiles, &self.llm, &self.mail).await
    }
}
