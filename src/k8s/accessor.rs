//! Cluster access boundary — the engine consumes this trait, never `kube` directly.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{ConfigMap, Namespace};
use kube::{
    api::{Api, ListParams},
    Client, ResourceExt,
};

use crate::configmap::{ConfigMapPayload, ConfigMapSummary};
use crate::errors::Error;

/// The capabilities the engine needs from a cluster: fetch one ConfigMap's
/// payload, list the ConfigMaps in a namespace, list namespaces. Implemented
/// by [`KubeAccessor`] for a live cluster and by in-memory fakes in the test
/// suite.
#[async_trait]
pub trait ClusterAccessor {
    async fn fetch_config_map(&self, namespace: &str, name: &str)
        -> Result<ConfigMapPayload, Error>;

    async fn list_config_maps(&self, namespace: &str) -> Result<Vec<ConfigMapSummary>, Error>;

    async fn list_namespaces(&self) -> Result<Vec<String>, Error>;
}

/// Accessor backed by a live `kube::Client`.
pub struct KubeAccessor {
    client: Client,
}

impl KubeAccessor {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn config_maps(&self, namespace: &str) -> Api<ConfigMap> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl ClusterAccessor for KubeAccessor {
    async fn fetch_config_map(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ConfigMapPayload, Error> {
        let config_map = self
            .config_maps(namespace)
            .get(name)
            .await
            .map_err(|err| match err {
                // API 404 means the resource is absent, not that the cluster failed
                kube::Error::Api(ref response) if response.code == 404 => Error::NotFound {
                    namespace: namespace.to_string(),
                    name: name.to_string(),
                },
                err => Error::Retrieval {
                    context: format!(
                        "failed to get ConfigMap '{name}' in namespace '{namespace}'"
                    ),
                    source: err,
                },
            })?;
        Ok(payload_from(config_map))
    }

    async fn list_config_maps(&self, namespace: &str) -> Result<Vec<ConfigMapSummary>, Error> {
        let list = self
            .config_maps(namespace)
            .list(&ListParams::default())
            .await
            .map_err(|err| Error::Retrieval {
                context: format!("failed to list ConfigMaps in namespace '{namespace}'"),
                source: err,
            })?;
        Ok(list.items.iter().map(summary_from).collect())
    }

    async fn list_namespaces(&self) -> Result<Vec<String>, Error> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        let list = api
            .list(&ListParams::default())
            .await
            .map_err(|err| Error::Retrieval {
                context: "failed to list namespaces".to_string(),
                source: err,
            })?;
        Ok(list.items.iter().map(ResourceExt::name_any).collect())
    }
}

/// Split a fetched ConfigMap into its text and binary entry maps.
fn payload_from(config_map: ConfigMap) -> ConfigMapPayload {
    ConfigMapPayload {
        text: config_map.data.unwrap_or_default(),
        binary: config_map
            .binary_data
            .unwrap_or_default()
            .into_iter()
            .map(|(key, bytes)| (key, bytes.0))
            .collect(),
    }
}

/// Reduce a ConfigMap to its identity and key inventory.
fn summary_from(config_map: &ConfigMap) -> ConfigMapSummary {
    ConfigMapSummary {
        namespace: config_map.namespace().unwrap_or_default(),
        name: config_map.name_any(),
        text_keys: config_map
            .data
            .as_ref()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default(),
        binary_keys: config_map
            .binary_data
            .as_ref()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default(),
    }
}
