pub mod openai;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Res;

// Traits.

/// Generic LLM client trait that clients must implement.
///
/// This trait defines the completion contract used for triage classification.
/// Implementing it allows different LLM providers to be used with the agent.
#[async_trait]
pub trait GenericLlmClient: Send + Sync + 'static {
    /// Send a prompt to the model and return its raw text completion.
    ///
    /// The caller owns all interpretation of the returned text; this method
    /// makes no promise that the completion is well-formed JSON.
    async fn complete(&self, prompt: &str) -> Res<String>;
}

// Structs.

/// LLM client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<dyn GenericLlmClient>,
}

impl Deref for LlmClient {
    type Target = dyn GenericLlmClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LlmClient {
    pub fn new(inner: Arc<dyn GenericLlmClient>) -> Self {
        Self { inner }
    }
}
