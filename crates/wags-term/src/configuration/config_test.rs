use clap::Arg;
use serial_test::serial;

use super::*;

fn command() -> Command {
    Command::new("wags")
        .arg(
            Arg::new("server-url")
                .long("server-url")
                .help("Base URL of the WAGS server. [default: http://localhost:8080]"),
        )
        .arg(
            Arg::new("config-file")
                .long("config-file")
                .help("Path to the config file."),
        )
        .arg(
            Arg::new("credentials-file")
                .long("credentials-file")
                .help("Where the login credential is cached."),
        )
}

#[tokio::test]
#[serial]
async fn test_uses_defaults_without_a_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("missing.toml");
    let matches = command()
        .try_get_matches_from(vec!["wags", "--config-file", config_file.to_str().unwrap()])
        .unwrap();

    Config::load(vec![&matches]).await.unwrap();

    assert_eq!(Config::get(ConfigKey::ServerURL), "http://localhost:8080");
    assert_eq!(
        Config::get(ConfigKey::ConfigFile),
        config_file.to_str().unwrap()
    );
    assert!(Config::get(ConfigKey::CredentialsFile).ends_with("credentials.json"));
}

#[tokio::test]
#[serial]
async fn test_reads_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("config.toml");
    std::fs::write(
        &config_file,
        "server-url = \"http://queue.internal:9000\"\ncredentials-file = \"\"\n",
    )
    .unwrap();

    let matches = command()
        .try_get_matches_from(vec!["wags", "--config-file", config_file.to_str().unwrap()])
        .unwrap();

    Config::load(vec![&matches]).await.unwrap();

    assert_eq!(Config::get(ConfigKey::ServerURL), "http://queue.internal:9000");
    assert_eq!(
        Config::get(ConfigKey::CredentialsFile),
        Config::default(ConfigKey::CredentialsFile)
    );
}

#[tokio::test]
#[serial]
async fn test_prefers_flags_over_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("config.toml");
    std::fs::write(&config_file, "server-url = \"http://from-file:9000\"\n").unwrap();

    let matches = command()
        .try_get_matches_from(vec![
            "wags",
            "--config-file",
            config_file.to_str().unwrap(),
            "--server-url",
            "http://from-flag:9000",
        ])
        .unwrap();

    Config::load(vec![&matches]).await.unwrap();

    assert_eq!(Config::get(ConfigKey::ServerURL), "http://from-flag:9000");
}

#[tokio::test]
#[serial]
async fn test_rejects_non_string_values() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("config.toml");
    std::fs::write(&config_file, "server-url = 8080\n").unwrap();

    let matches = command()
        .try_get_matches_from(vec!["wags", "--config-file", config_file.to_str().unwrap()])
        .unwrap();

    let res = Config::load(vec![&matches]).await;
    assert!(res.is_err());
}

#[test]
fn test_serializes_the_default_config() {
    let toml_str = Config::serialize_default(command());

    assert!(toml_str.starts_with("# Where the login credential is cached."));
    assert!(toml_str.contains("# Base URL of the WAGS server.\nserver-url = \"http://localhost:8080\""));
    assert!(!toml_str.contains("config-file"));
    assert!(toml_str.parse::<toml_edit::Document>().is_ok());
}
