//! Library root for `lifeguard`.
//!
//! Lifeguard is an LLM-powered triage agent for a monitored patient, designed to:
//! - Classify free-text symptom reports into emergency categories
//! - Retrieve the patient's medical profile for context
//! - Dispatch a caregiver alert email when the classification is urgent
//!
//! The agent integrates with SurrealDB for profile storage, OpenAI for
//! classification, and a transactional mail service for alerts. The
//! architecture is built around extensible traits that allow for different
//! implementations of each service.

#[warn(missing_docs)]
pub mod base;
pub mod runtime;
pub mod server;
pub mod service;
pub mod workflow;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the lifeguard agent:
/// - Creates the runtime context with profile store, LLM, and mail clients
/// - Starts the HTTP listener for probe and submit requests
pub async fn start(config: Config) -> Void {
    info!("Starting lifeguard ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start serving.
    server::serve(runtime).await
}
