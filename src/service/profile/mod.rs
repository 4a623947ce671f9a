pub mod surreal;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{PatientProfile, Res, Void};

// Traits.

/// Generic profile store trait that clients must implement.
///
/// This trait defines the lookup contract for patient records. Implementing
/// it allows different key-value backends to be used with the agent.
#[async_trait]
pub trait GenericProfileStore: Send + Sync + 'static {
    /// Fetch the profile for a patient identifier.
    ///
    /// Returns `None` when no record exists for the identifier; never a
    /// partially-populated record. Infrastructure failures (store
    /// unreachable, permission denied) surface as `Err`.
    async fn get_patient(&self, patient_id: &str) -> Res<Option<PatientProfile>>;

    /// Insert or replace a patient record.
    ///
    /// Records are maintained by an external data-entry process; this is
    /// exposed for seeding and operational tooling.
    async fn put_patient(&self, profile: &PatientProfile) -> Void;
}

// Structs.

/// Profile store client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ProfileStore {
    inner: Arc<dyn GenericProfileStore>,
}

impl Deref for ProfileStore {
    type Target = dyn GenericProfileStore;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ProfileStore {
    pub fn new(inner: Arc<dyn GenericProfileStore>) -> Self {
        Self { inner }
    }
}
