use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort an operation. Per-file write failures are deliberately
/// NOT represented here — they are captured inside a `SaveOutcome` and never
/// propagate past the pull that produced them.
#[derive(Debug, Error)]
pub enum Error {
    /// The named ConfigMap does not exist in the given namespace.
    #[error("ConfigMap '{name}' not found in namespace '{namespace}'")]
    NotFound { namespace: String, name: String },

    /// Cluster communication or resource-access failure.
    #[error("{context}: {source}")]
    Retrieval {
        context: String,
        #[source]
        source: kube::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A bulk pull failed while processing one ConfigMap. Names the resource
    /// being handled when the underlying error occurred.
    #[error("failed to pull ConfigMap '{name}' from namespace '{namespace}': {source}")]
    Aggregate {
        namespace: String,
        name: String,
        #[source]
        source: Box<Error>,
    },
}
