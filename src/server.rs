//! HTTP boundary for the lifeguard agent.
//!
//! Two routes: a health probe that returns a static ready acknowledgment
//! without touching any dependency, and a submit route that runs the triage
//! workflow. Workflow failures of any kind are converted here into the
//! uniform error envelope; alert failures are a sub-status inside a success
//! envelope and never surface as a transport error.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::{error, instrument};

use crate::{
    base::types::{ErrorEnvelope, ReadyAck, TriageRequest, Void},
    runtime::Runtime,
};

/// Body accepted by the submit route.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitBody {
    #[serde(default)]
    pub symptoms: Option<String>,
}

/// Build the application router.
pub fn router(runtime: Runtime) -> Router {
    Router::new().route("/", get(ready)).route("/triage", post(submit)).with_state(runtime)
}

/// Serve the agent on the configured address until the process is stopped.
#[instrument(skip_all)]
pub async fn serve(runtime: Runtime) -> Void {
    let addr = runtime.config.listen_addr.clone();
    let app = router(runtime);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr} ...");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health probe; no side effects.
async fn ready() -> Json<ReadyAck> {
    Json(ReadyAck::default())
}

/// Submit a symptom statement for triage.
#[instrument(skip_all)]
async fn submit(State(runtime): State<Runtime>, body: Option<Json<SubmitBody>>) -> Response {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    match runtime.triage(TriageRequest::Submit { symptoms: body.symptoms }).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            error!("Workflow failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorEnvelope::new(err))).into_response()
        }
    }
}
