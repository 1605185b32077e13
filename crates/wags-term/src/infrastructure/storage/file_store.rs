#[cfg(test)]
#[path = "file_store_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::models::Credential;
use crate::domain::models::CredentialStore;

const USERNAME_KEY: &str = "username";
const API_KEY_KEY: &str = "apiKey";

#[derive(Error, Debug)]
enum StoreError {
    #[error("credential file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("credential file is not valid JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Credential cache kept as a small JSON document on disk.
///
/// The file holds the `username` and `apiKey` entries. A file missing either
/// one, or holding an empty value, is treated as no cache at all.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> FileCredentialStore {
        return FileCredentialStore { path: path.into() };
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<Credential>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let entries = serde_json::from_str::<BTreeMap<String, String>>(&raw)?;
        let username = entries.get(USERNAME_KEY).filter(|v| !v.is_empty());
        let api_key = entries.get(API_KEY_KEY).filter(|v| !v.is_empty());

        match (username, api_key) {
            (Some(username), Some(api_key)) => Ok(Some(Credential::new(username, api_key))),
            _ => Ok(None),
        }
    }

    fn write(&self, credential: &Credential) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut entries = BTreeMap::new();
        entries.insert(USERNAME_KEY, credential.username.as_str());
        entries.insert(API_KEY_KEY, credential.api_key.as_str());
        let body = serde_json::to_string_pretty(&entries)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body)?;
        restrict_permissions(&tmp)?;
        fs::rename(&tmp, &self.path)?;

        return Ok(());
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

impl CredentialStore for FileCredentialStore {
    fn save(&self, credential: &Credential) {
        if let Err(err) = self.write(credential) {
            tracing::warn!(path = %self.path.display(), error = %err, "could not cache credential");
        }
    }

    fn load(&self) -> Option<Credential> {
        match self.read() {
            Ok(credential) => credential,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "ignoring unreadable credential cache");
                None
            }
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "could not remove credential cache");
            }
        }
    }
}
