use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kube::{
    config::{KubeConfigOptions, Kubeconfig, KubeconfigError},
    Client,
};

/// Build a `kube::Client` from an explicit kubeconfig path or the default
/// location ($KUBECONFIG or ~/.kube/config), optionally pinning a context.
pub async fn build_client(kubeconfig: Option<&Path>, context: Option<&str>) -> Result<Client> {
    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    let config = match kubeconfig {
        Some(path) => {
            let raw = Kubeconfig::read_from(path)
                .with_context(|| format!("Failed to read kubeconfig '{}'", path.display()))?;
            kube::Config::from_custom_kubeconfig(raw, &options).await
        }
        None => kube::Config::from_kubeconfig(&options).await,
    }
    .context("Failed to load kubeconfig")?;

    Client::try_from(config).context("Failed to build Kubernetes client")
}

/// Return the current context name from kubeconfig (for display).
pub fn current_context(kubeconfig: Option<&Path>) -> String {
    read_kubeconfig(kubeconfig)
        .ok()
        .and_then(|cfg| cfg.current_context)
        .unwrap_or_else(|| "unknown".to_string())
}

/// The default kubeconfig path: $KUBECONFIG if set, else ~/.kube/config.
pub fn default_kubeconfig() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("KUBECONFIG") {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::home_dir().map(|home| home.join(".kube").join("config"))
}

fn read_kubeconfig(path: Option<&Path>) -> Result<Kubeconfig, KubeconfigError> {
    match path {
        Some(path) => Kubeconfig::read_from(path),
        None => Kubeconfig::read(),
    }
}

/// Connection details shown by the `info` subcommand.
#[derive(Debug)]
pub struct ClusterInfo {
    pub context: String,
    pub cluster: String,
    pub endpoint: String,
    pub namespace: String,
    pub version: String,
    pub kubeconfig_path: String,
}

/// Resolve cluster connection details from the kubeconfig plus one
/// API-server version call.
pub async fn cluster_info(client: &Client, kubeconfig: Option<&Path>) -> Result<ClusterInfo> {
    let version = client
        .apiserver_version()
        .await
        .context("Failed to query server version")?;

    let raw = read_kubeconfig(kubeconfig).context("Failed to load kubeconfig")?;
    let context_name = raw.current_context.clone().unwrap_or_default();

    let mut cluster_name = String::new();
    let mut namespace = "default".to_string();
    if let Some(ctx) = raw
        .contexts
        .iter()
        .find(|named| named.name == context_name)
        .and_then(|named| named.context.as_ref())
    {
        cluster_name = ctx.cluster.clone();
        if let Some(ns) = ctx.namespace.as_ref().filter(|ns| !ns.is_empty()) {
            namespace = ns.clone();
        }
    }

    let endpoint = raw
        .clusters
        .iter()
        .find(|named| named.name == cluster_name)
        .and_then(|named| named.cluster.as_ref())
        .and_then(|cluster| cluster.server.clone())
        .unwrap_or_default();

    let kubeconfig_path = kubeconfig
        .map(Path::to_path_buf)
        .or_else(default_kubeconfig)
        .map(|path| path.display().to_string())
        .unwrap_or_default();

    Ok(ClusterInfo {
        context: context_name,
        cluster: cluster_name,
        endpoint,
        namespace,
        version: version.git_version,
        kubeconfig_path,
    })
}
