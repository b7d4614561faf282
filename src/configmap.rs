//! ConfigMap retrieval and materialization — the engine behind `list` and `pull`.
//!
//! Every operation takes a [`ClusterAccessor`] and explicit parameters; there is
//! no process-wide state. Results are plain data handed to the display layer.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::Error;
use crate::k8s::accessor::ClusterAccessor;

/// Identity and key inventory of one ConfigMap, as reported by a listing.
#[derive(Debug, Clone)]
pub struct ConfigMapSummary {
    pub namespace: String,
    pub name: String,
    pub text_keys: Vec<String>,
    pub binary_keys: Vec<String>,
}

impl ConfigMapSummary {
    pub fn text_count(&self) -> usize {
        self.text_keys.len()
    }

    pub fn binary_count(&self) -> usize {
        self.binary_keys.len()
    }

    /// True when the ConfigMap holds no entries at all. Bulk pulls skip empty
    /// ConfigMaps so they never produce output directories.
    pub fn is_empty(&self) -> bool {
        self.text_keys.is_empty() && self.binary_keys.is_empty()
    }
}

/// Full entry contents of one ConfigMap, fetched on demand for a single pull.
#[derive(Debug, Clone, Default)]
pub struct ConfigMapPayload {
    pub text: BTreeMap<String, String>,
    pub binary: BTreeMap<String, Vec<u8>>,
}

/// Outcome of writing one entry to disk. A failed write is captured here and
/// never aborts the surrounding pull.
#[derive(Debug)]
pub struct SaveOutcome {
    pub path: PathBuf,
    /// Whether the entry came from the binary map rather than the text map.
    pub binary: bool,
    /// The write error, if the file could not be saved.
    pub error: Option<io::Error>,
}

impl SaveOutcome {
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregated outcome of pulling one ConfigMap.
///
/// `total_files` always equals the ConfigMap's text-entry count plus
/// binary-entry count at fetch time, even when individual saves fail.
#[derive(Debug)]
pub struct PullResult {
    pub namespace: String,
    pub name: String,
    pub saved_files: Vec<SaveOutcome>,
    pub total_files: usize,
}

impl PullResult {
    pub fn success_count(&self) -> usize {
        self.saved_files.iter().filter(|f| f.success()).count()
    }
}

/// List all ConfigMaps in one namespace. All-or-nothing: a failed listing
/// yields no partial result.
pub async fn list_config_maps(
    accessor: &impl ClusterAccessor,
    namespace: &str,
) -> Result<Vec<ConfigMapSummary>, Error> {
    accessor.list_config_maps(namespace).await
}

/// List ConfigMaps from every namespace, keyed by namespace name.
///
/// Namespaces without ConfigMaps are omitted from the map entirely. Fails
/// fast on the first enumeration or per-namespace listing error; no partial
/// result is returned. The `BTreeMap` keeps namespace order lexicographic,
/// so callers see reproducible output.
pub async fn list_all_config_maps(
    accessor: &impl ClusterAccessor,
) -> Result<BTreeMap<String, Vec<ConfigMapSummary>>, Error> {
    let namespaces = accessor.list_namespaces().await?;

    let mut all = BTreeMap::new();
    for namespace in namespaces {
        let config_maps = accessor.list_config_maps(&namespace).await?;
        if !config_maps.is_empty() {
            all.insert(namespace, config_maps);
        }
    }
    Ok(all)
}

/// Fetch one ConfigMap and write every entry to `output_dir/<key>`,
/// overwriting existing files.
///
/// Fetch and directory-creation failures abort the whole pull. A failure
/// writing an individual file is recorded in its [`SaveOutcome`] and the
/// remaining entries are still attempted — one unwritable file must not
/// discard the rest of the ConfigMap's savable data. Outcomes are ordered
/// text keys first, then binary keys.
pub async fn pull_config_map(
    accessor: &impl ClusterAccessor,
    namespace: &str,
    name: &str,
    output_dir: &Path,
) -> Result<PullResult, Error> {
    let payload = accessor.fetch_config_map(namespace, name).await?;

    fs::create_dir_all(output_dir).map_err(|err| Error::Io {
        path: output_dir.to_path_buf(),
        source: err,
    })?;

    let mut saved_files = Vec::with_capacity(payload.text.len() + payload.binary.len());
    for (key, value) in &payload.text {
        saved_files.push(save_entry(output_dir, key, value.as_bytes(), false));
    }
    for (key, value) in &payload.binary {
        saved_files.push(save_entry(output_dir, key, value, true));
    }

    let total_files = saved_files.len();
    Ok(PullResult {
        namespace: namespace.to_string(),
        name: name.to_string(),
        saved_files,
        total_files,
    })
}

/// Write one entry, overwriting any existing file at the target path.
fn save_entry(output_dir: &Path, key: &str, bytes: &[u8], binary: bool) -> SaveOutcome {
    let path = output_dir.join(key);
    let error = fs::write(&path, bytes).err();
    SaveOutcome { path, binary, error }
}

/// Pull every non-empty ConfigMap from every namespace into
/// `output_dir/<namespace>/`.
///
/// Namespaces are visited in lexicographic order. The first fetch or
/// directory-creation failure aborts the whole operation and discards the
/// results accumulated so far; the returned [`Error::Aggregate`] names the
/// ConfigMap being processed. Per-file write failures do not abort — they
/// stay inside the affected [`PullResult`].
pub async fn pull_all_config_maps(
    accessor: &impl ClusterAccessor,
    output_dir: &Path,
) -> Result<Vec<PullResult>, Error> {
    let all = list_all_config_maps(accessor).await?;

    let mut results = Vec::new();
    for (namespace, config_maps) in &all {
        for cm in config_maps {
            if cm.is_empty() {
                continue; // skip empty ConfigMaps
            }
            let namespace_dir = output_dir.join(namespace);
            let result = pull_config_map(accessor, namespace, &cm.name, &namespace_dir)
                .await
                .map_err(|err| Error::Aggregate {
                    namespace: namespace.clone(),
                    name: cm.name.clone(),
                    source: Box::new(err),
                })?;
            results.push(result);
        }
    }
    Ok(results)
}
