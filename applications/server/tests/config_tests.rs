/// Configuration loading tests
/// Tests file-based configuration and version resolution end to end
use roster_server::{config::ServerConfig, ServerError, VersionInfo};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Test values from a TOML file are loaded
#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 9191

[app]
version = "3.1.0"
profile = "staging"

[git]
commit = "0a1b2c3"
branch = "main"
"#,
    );

    let config = ServerConfig::load_from(Some(file.path())).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9191);
    assert!(config.validate().is_ok());

    let info = VersionInfo::resolve_with(&config, |_| None);
    assert_eq!(info.version, "3.1.0");
    assert_eq!(info.environment, "staging");
    assert_eq!(info.git_commit, "0a1b2c3");
    assert_eq!(info.git_branch, "main");
}

/// Test a config file without a .toml extension is still read as TOML
#[test]
fn test_load_from_file_without_extension() {
    let mut file = tempfile::Builder::new().suffix(".conf").tempfile().unwrap();
    file.write_all(b"[server]\nport = 7070\n\n[git]\nbranch = \"develop\"\n")
        .unwrap();

    let config = ServerConfig::load_from(Some(file.path())).unwrap();

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.git.branch.as_deref(), Some("develop"));
}

/// Test missing sections fall back to defaults
#[test]
fn test_partial_file_uses_defaults() {
    let file = write_config("[app]\nprofile = \"production\"\n");

    let config = ServerConfig::load_from(Some(file.path())).unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.app.profile.as_deref(), Some("production"));
    assert!(config.git.commit.is_none());
}

/// Test an explicit path that does not exist is an error
#[test]
fn test_missing_explicit_file() {
    let result = ServerConfig::load_from(Some(std::path::Path::new(
        "/nonexistent/roster/config.toml",
    )));

    assert!(matches!(result, Err(ServerError::Config(_))));
}

/// Test malformed values are reported as configuration errors
#[test]
fn test_invalid_port_type() {
    let file = write_config("[server]\nport = \"not-a-port\"\n");

    let result = ServerConfig::load_from(Some(file.path()));

    assert!(matches!(result, Err(ServerError::Config(_))));
}
