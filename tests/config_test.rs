//! Tests for kmpull::config — the optional TOML defaults file.

use std::path::PathBuf;

use kmpull::config::{load_from, FileConfig};

#[test]
fn full_config_parses_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
namespace = "staging"
output = "/var/backups/configmaps"
kubeconfig = "/home/op/.kube/staging"
context = "staging-admin"
"#,
    )
    .unwrap();

    let config = load_from(&path).unwrap();
    assert_eq!(config.namespace.as_deref(), Some("staging"));
    assert_eq!(config.output, Some(PathBuf::from("/var/backups/configmaps")));
    assert_eq!(config.kubeconfig, Some(PathBuf::from("/home/op/.kube/staging")));
    assert_eq!(config.context.as_deref(), Some("staging-admin"));
}

#[test]
fn partial_config_leaves_other_fields_unset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "namespace = \"ops\"\n").unwrap();

    let config = load_from(&path).unwrap();
    assert_eq!(config.namespace.as_deref(), Some("ops"));
    assert_eq!(config.output, None);
    assert_eq!(config.kubeconfig, None);
    assert_eq!(config.context, None);
}

#[test]
fn empty_file_parses_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    assert_eq!(load_from(&path).unwrap(), FileConfig::default());
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "namespace = [not toml\n").unwrap();

    assert!(load_from(&path).is_err());
}

#[test]
fn missing_file_is_an_error() {
    let result = load_from(std::path::Path::new("/nonexistent/kmpull-config.toml"));
    assert!(result.is_err());
}
