pub mod http;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Void;

// Traits.

/// Generic transactional mail trait that clients must implement.
///
/// This trait defines the single-attempt send contract used for caregiver
/// alerts. Implementing it allows different mail providers to be used with
/// the agent.
#[async_trait]
pub trait GenericMailClient: Send + Sync + 'static {
    /// Send one plaintext email.
    ///
    /// A provider rejection (bad sender, bad recipient, throttling) surfaces
    /// as `Err` carrying the provider's detail. There is no retry and no
    /// queuing at this layer.
    async fn send_email(&self, sender: &str, recipient: &str, subject: &str, body: &str) -> Void;
}

// Structs.

/// Mail client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct MailClient {
    inner: Arc<dyn GenericMailClient>,
}

impl Deref for MailClient {
    type Target = dyn GenericMailClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl MailClient {
    pub fn new(inner: Arc<dyn GenericMailClient>) -> Self {
        Self { inner }
    }
}
