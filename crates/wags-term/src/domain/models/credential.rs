use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Username and API key identifying a session. Both are always present.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

impl Credential {
    pub fn new(username: &str, api_key: &str) -> Credential {
        return Credential {
            username: username.to_string(),
            api_key: api_key.to_string(),
        };
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Durable client-side cache for one credential.
///
/// Implementations never fail outward: an unavailable backing store makes
/// `load` return `None` and turns `save`/`clear` into logged no-ops.
pub trait CredentialStore: Send + Sync {
    fn save(&self, credential: &Credential);
    fn load(&self) -> Option<Credential>;
    fn clear(&self);
}

pub type CredentialStoreBox = Box<dyn CredentialStore>;
