//! Tests for kmpull::k8s::client — kubeconfig helpers and client-construction
//! error paths. No live cluster is required.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use kmpull::k8s::client::{build_client, current_context, default_kubeconfig};

/// Serialises tests that mutate $KUBECONFIG so they don't race.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

// ── current_context ───────────────────────────────────────────────────────────

#[test]
fn current_context_returns_non_empty_string() {
    // Without a kubeconfig the function returns "unknown"; with one it returns
    // the context name. Either way the result must be a non-empty string.
    let ctx = current_context(None);
    assert!(
        !ctx.is_empty(),
        "current_context must never return an empty string"
    );
}

#[test]
fn current_context_missing_file_falls_back_to_unknown() {
    let ctx = current_context(Some(Path::new("/nonexistent/kubeconfig.yaml")));
    assert_eq!(ctx, "unknown");
}

#[test]
fn current_context_reads_named_context_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kubeconfig.yaml");
    std::fs::write(&path, minimal_kubeconfig()).unwrap();

    assert_eq!(current_context(Some(&path)), "test-context");
}

// ── default_kubeconfig ────────────────────────────────────────────────────────

#[test]
fn default_kubeconfig_prefers_kubeconfig_env() {
    let _guard = ENV_MUTEX.lock().unwrap();
    let original = std::env::var_os("KUBECONFIG");

    std::env::set_var("KUBECONFIG", "/tmp/kmpull-test-kubeconfig.yaml");
    assert_eq!(
        default_kubeconfig(),
        Some(PathBuf::from("/tmp/kmpull-test-kubeconfig.yaml"))
    );

    match original {
        Some(value) => std::env::set_var("KUBECONFIG", value),
        None => std::env::remove_var("KUBECONFIG"),
    }
}

#[test]
fn default_kubeconfig_falls_back_to_home_dot_kube() {
    let _guard = ENV_MUTEX.lock().unwrap();
    let original = std::env::var_os("KUBECONFIG");

    std::env::remove_var("KUBECONFIG");
    if let Some(path) = default_kubeconfig() {
        assert!(
            path.ends_with(Path::new(".kube").join("config")),
            "fallback must be ~/.kube/config, got '{}'",
            path.display()
        );
    }

    if let Some(value) = original {
        std::env::set_var("KUBECONFIG", value);
    }
}

// ── build_client — error paths ────────────────────────────────────────────────

#[tokio::test]
async fn build_client_nonexistent_kubeconfig_returns_error() {
    let result = build_client(Some(Path::new("/nonexistent/kubeconfig.yaml")), None).await;
    assert!(
        result.is_err(),
        "build_client with nonexistent kubeconfig must return Err"
    );
}

#[tokio::test]
async fn build_client_unknown_context_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kubeconfig.yaml");
    std::fs::write(&path, minimal_kubeconfig()).unwrap();

    let result = build_client(Some(&path), Some("kmpull-nonexistent-ctx-zzzz")).await;
    assert!(
        result.is_err(),
        "build_client with unknown context must return Err"
    );
}

// ── Fixture ───────────────────────────────────────────────────────────────────

fn minimal_kubeconfig() -> &'static str {
    r"
apiVersion: v1
kind: Config
current-context: test-context
clusters:
  - name: test-cluster
    cluster:
      server: https://127.0.0.1:6443
contexts:
  - name: test-context
    context:
      cluster: test-cluster
      user: test-user
      namespace: test-ns
users:
  - name: test-user
    user:
      token: not-a-real-token
"
}
