use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Usage: osearch [--grep] --vault vaultname --path vaultpath searchterm")]
    MissingTerm,

    #[error("no vault name given and no open vault in {}", .registry.display())]
    MissingVaultName { registry: PathBuf },

    #[error("no vault path given and no open vault in {}", .registry.display())]
    MissingVaultPath { registry: PathBuf },

    #[error("could not open {}", .path.display())]
    RegistryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {}: {content}", .path.display())]
    RegistryMalformed {
        path: PathBuf,
        content: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("more than one open vault in {}: {}", .path.display(), .candidates.join(", "))]
    AmbiguousVault {
        path: PathBuf,
        candidates: Vec<String>,
    },

    #[error("no such directory {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("could not run {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    ToolFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("could not parse {line}")]
    MalformedRecord {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not parse match {line}")]
    MalformedMatch {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{program} output is not valid UTF-8")]
    NonUtf8Output { program: String },
}

pub type Result<T> = std::result::Result<T, SearchError>;
