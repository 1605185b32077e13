use super::*;

fn store_in(dir: &tempfile::TempDir) -> FileCredentialStore {
    FileCredentialStore::new(dir.path().join("wags").join("credentials.json"))
}

#[test]
fn test_round_trips_a_credential() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    assert_eq!(store.load(), None);
    store.save(&Credential::new("alice", "k1"));
    assert_eq!(store.load(), Some(Credential::new("alice", "k1")));

    let raw = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["username"], "alice");
    assert_eq!(value["apiKey"], "k1");
}

#[test]
fn test_overwrites_the_previous_credential() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.save(&Credential::new("alice", "k1"));
    store.save(&Credential::new("bob", "k2"));
    assert_eq!(store.load(), Some(Credential::new("bob", "k2")));
}

#[test]
fn test_clears_idempotently() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.clear();
    store.save(&Credential::new("alice", "k1"));
    store.clear();
    store.clear();

    assert_eq!(store.load(), None);
    assert!(!store.path().exists());
}

#[test]
fn test_ignores_a_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    fs::write(&path, r#"{"username": "alice"}"#).unwrap();

    let store = FileCredentialStore::new(&path);
    assert_eq!(store.load(), None);
}

#[test]
fn test_ignores_empty_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    fs::write(&path, r#"{"username": "alice", "apiKey": ""}"#).unwrap();

    let store = FileCredentialStore::new(&path);
    assert_eq!(store.load(), None);
}

#[test]
fn test_ignores_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    fs::write(&path, "not json").unwrap();

    let store = FileCredentialStore::new(&path);
    assert_eq!(store.load(), None);
}

#[test]
fn test_survives_an_unwritable_location() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    // The parent is a regular file, so nothing can be created under it.
    let store = FileCredentialStore::new(blocker.join("credentials.json"));
    store.save(&Credential::new("alice", "k1"));
    store.clear();
    assert_eq!(store.load(), None);
}

#[cfg(unix)]
#[test]
fn test_restricts_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&Credential::new("alice", "k1"));

    let mode = fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
