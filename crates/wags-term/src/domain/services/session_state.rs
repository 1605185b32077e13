use crate::domain::models::ClientError;
use crate::domain::models::Credential;
use crate::domain::models::CredentialStoreBox;
use crate::domain::models::PageId;

/// Authenticated/unauthenticated lifecycle of the console.
///
/// The only transitions are `restore`/`begin_session` into the authenticated
/// state and `end_session` out of it. Fields are private so every mutation
/// goes through these methods.
pub struct SessionState {
    store: CredentialStoreBox,
    credential: Option<Credential>,
    current_page: PageId,
    available_years: Vec<i32>,
}

impl SessionState {
    pub fn new(store: CredentialStoreBox) -> SessionState {
        return SessionState {
            store,
            credential: None,
            current_page: PageId::default(),
            available_years: vec![],
        };
    }

    /// Picks up a cached credential. Returns whether the session is now
    /// authenticated.
    pub fn restore(&mut self) -> bool {
        if let Some(credential) = self.store.load() {
            tracing::debug!(username = %credential.username, "restored cached credential");
            self.credential = Some(credential);
            self.current_page = PageId::Dashboard;
        }

        return self.is_authenticated();
    }

    pub fn begin_session(&mut self, credential: Credential) {
        self.store.save(&credential);
        tracing::info!(username = %credential.username, "session started");
        self.credential = Some(credential);
        self.current_page = PageId::Dashboard;
    }

    /// Tears the session down. Safe to call in any state.
    pub fn end_session(&mut self) {
        self.store.clear();
        if let Some(credential) = self.credential.take() {
            tracing::info!(username = %credential.username, "session ended");
        }
        self.current_page = PageId::Dashboard;
        self.available_years.clear();
    }

    pub fn set_page(&mut self, page: PageId) -> Result<(), ClientError> {
        if !self.is_authenticated() {
            return Err(ClientError::InvalidState(
                "Please login first.".to_string(),
            ));
        }

        self.current_page = page;
        return Ok(());
    }

    pub fn set_available_years(&mut self, years: Vec<i32>) {
        if self.is_authenticated() {
            self.available_years = years;
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn username(&self) -> Option<&str> {
        self.credential.as_ref().map(|c| c.username.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    pub fn available_years(&self) -> &[i32] {
        &self.available_years
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CredentialStore;
    use crate::infrastructure::storage::MemoryCredentialStore;

    fn session_with_store() -> (SessionState, MemoryCredentialStore) {
        let store = MemoryCredentialStore::default();
        let session = SessionState::new(Box::new(store.clone()));
        (session, store)
    }

    #[test]
    fn test_new_session_is_unauthenticated() {
        let (session, _) = session_with_store();
        assert!(!session.is_authenticated());
        assert_eq!(session.credential(), None);
        assert!(session.available_years().is_empty());
    }

    #[test]
    fn test_begin_session_persists_credential() {
        let (mut session, store) = session_with_store();
        session.begin_session(Credential::new("alice", "k1"));

        assert!(session.is_authenticated());
        assert_eq!(session.current_page(), PageId::Dashboard);
        assert_eq!(session.username(), Some("alice"));
        assert_eq!(store.load(), Some(Credential::new("alice", "k1")));
    }

    #[test]
    fn test_end_session_is_idempotent() {
        let (mut session, store) = session_with_store();
        session.end_session();
        assert!(!session.is_authenticated());

        session.begin_session(Credential::new("alice", "k1"));
        session.set_available_years(vec![2024]);
        session.end_session();
        session.end_session();

        assert!(!session.is_authenticated());
        assert!(session.available_years().is_empty());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_restore_uses_cached_credential() {
        let store = MemoryCredentialStore::default();
        store.save(&Credential::new("bob", "k2"));

        let mut session = SessionState::new(Box::new(store.clone()));
        assert!(session.restore());
        assert_eq!(session.username(), Some("bob"));
        assert_eq!(session.current_page(), PageId::Dashboard);
    }

    #[test]
    fn test_restore_without_cache_stays_unauthenticated() {
        let (mut session, _) = session_with_store();
        assert!(!session.restore());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_set_page_requires_authentication() {
        let (mut session, _) = session_with_store();
        let res = session.set_page(PageId::Messages);
        assert!(matches!(res, Err(ClientError::InvalidState(_))));
        assert_eq!(session.current_page(), PageId::Dashboard);

        session.begin_session(Credential::new("alice", "k1"));
        session.set_page(PageId::Messages).unwrap();
        assert_eq!(session.current_page(), PageId::Messages);
    }

    #[test]
    fn test_years_ignored_while_unauthenticated() {
        let (mut session, _) = session_with_store();
        session.set_available_years(vec![2023, 2024]);
        assert!(session.available_years().is_empty());
    }

    #[test]
    fn test_authenticated_iff_last_call_was_begin() {
        let (mut session, _) = session_with_store();
        let steps = [true, true, false, true, false, false, true];

        for begin in steps {
            if begin {
                session.begin_session(Credential::new("alice", "k1"));
            } else {
                session.end_session();
            }
            assert_eq!(session.is_authenticated(), begin);
        }
    }
}
