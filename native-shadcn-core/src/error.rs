//! Error types for the registry pipeline, with clear, actionable messages

use std::path::PathBuf;
use thiserror::Error;

/// Fatal registry pipeline errors
///
/// Every variant aborts the current build or install. Dependency installation
/// failures are reported separately through [`InstallError`] because the
/// installer downgrades them to a warning.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry document could not be retrieved
    #[error("Failed to fetch registry from {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The registry document does not match the expected shape
    #[error("Registry document is malformed: {reason}")]
    Malformed { reason: String },

    /// The requested component is not part of the registry
    #[error(
        "Component \"{name}\" not found in registry.\n\nAvailable components: {}",
        .available.join(", ")
    )]
    ComponentNotFound {
        name: String,
        available: Vec<String>,
    },

    /// Creating a directory or writing a file failed
    #[error("Failed to write {path}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The registry could not be serialized
    #[error("Failed to serialize registry")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl RegistryError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RegistryError::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RegistryError::Malformed {
            reason: reason.into(),
        }
    }
}

/// Failures of the host package manager invocation
#[derive(Error, Debug)]
pub enum InstallError {
    /// The package manager process could not be started
    #[error("Failed to start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The package manager ran but reported failure
    #[error("`{command}` exited with {status}")]
    ExitStatus { command: String, status: String },
}
