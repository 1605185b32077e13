use std::sync::Arc;
use std::sync::Mutex;

use crate::domain::models::Credential;
use crate::domain::models::CredentialStore;

/// Process-local credential cache. Clones share the same slot, so a test can
/// keep a handle to the store it hands to a session.
#[derive(Debug, Default, Clone)]
pub struct MemoryCredentialStore {
    inner: Arc<Mutex<Option<Credential>>>,
}

impl CredentialStore for MemoryCredentialStore {
    fn save(&self, credential: &Credential) {
        match self.inner.lock() {
            Ok(mut slot) => *slot = Some(credential.clone()),
            Err(err) => tracing::warn!(error = %err, "credential cache is poisoned"),
        }
    }

    fn load(&self) -> Option<Credential> {
        self.inner.lock().ok().and_then(|slot| slot.clone())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = None;
        }
    }
}
