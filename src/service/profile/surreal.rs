//! SurrealDB implementation for patient profile storage.

use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::{
    Surreal,
    engine::any::{Any, connect},
    opt::auth::Root,
};
use tracing::{info, instrument};

use crate::base::{
    config::Config,
    types::{PatientProfile, Res, Void},
};

use super::{GenericProfileStore, ProfileStore};

// Extra methods on `ProfileStore` applied by the surreal implementation.

impl ProfileStore {
    /// Connect to the configured SurrealDB endpoint.
    pub async fn surreal(config: &Config) -> Res<Self> {
        let client = SurrealProfileStore::new(config).await?;
        Ok(Self { inner: Arc::new(client) })
    }

    /// Create an in-memory profile store.
    pub async fn surreal_memory() -> Res<Self> {
        let client = SurrealProfileStore::memory().await?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Specific implementations.

/// SurrealDB-backed profile store.
#[derive(Clone)]
pub struct SurrealProfileStore {
    db: Surreal<Any>,
}

impl SurrealProfileStore {
    /// Create a new profile store from configuration.
    #[instrument(name = "SurrealProfileStore::new", skip_all)]
    pub async fn new(config: &Config) -> Res<Self> {
        let db = connect(&config.db_endpoint).await?;

        // Remote endpoints require root authentication; the in-memory engine does not.
        if !config.db_endpoint.starts_with("mem") {
            db.signin(Root {
                username: &config.db_username,
                password: &config.db_password,
            })
            .await?;
        }

        Self::init(db).await
    }

    /// Create a new in-memory profile store.
    #[instrument(name = "SurrealProfileStore::memory", skip_all)]
    pub async fn memory() -> Res<Self> {
        let db = connect("mem://").await?;
        Self::init(db).await
    }

    async fn init(db: Surreal<Any>) -> Res<Self> {
        db.use_ns("lifeguard").use_db("care").await?;

        info!("Profile store initialized successfully.");

        Ok(Self { db })
    }
}

#[async_trait]
impl GenericProfileStore for SurrealProfileStore {
    #[instrument(name = "SurrealProfileStore::get_patient", skip(self))]
    async fn get_patient(&self, patient_id: &str) -> Res<Option<PatientProfile>> {
        let profile: Option<PatientProfile> = self.db.select(("patient", patient_id)).await?;

        if profile.is_some() {
            info!("Patient `{}` found.", patient_id);
        } else {
            info!("Patient `{}` not found.", patient_id);
        }

        Ok(profile)
    }

    #[instrument(name = "SurrealProfileStore::put_patient", skip_all)]
    async fn put_patient(&self, profile: &PatientProfile) -> Void {
        let _: Option<PatientProfile> = self
            .db
            .upsert(("patient", profile.patient_id.as_str()))
            .content(profile.clone())
            .await?;

        Ok(())
    }
}

// Tests.
