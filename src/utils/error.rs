use thiserror::Error;

#[derive(Error, Debug)]
pub enum PushError {
    #[error("failed to read manifest file {path}: {source}")]
    ManifestIoError {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to decode manifest file {path}: {source}")]
    ManifestDecodeError {
        path: String,
        source: serde_yaml::Error,
    },

    #[error("single application manifest required, {count} found")]
    ApplicationCountError { count: usize },

    #[error("invalid maven configuration: {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("request to {url} could not complete: {source}")]
    TransportError { url: String, source: reqwest::Error },

    #[error("download of {url} failed with status {status}")]
    HttpStatusError {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to run cf: {source}")]
    DeploySpawnError { source: std::io::Error },

    #[error("cf exited with {status}")]
    DeployExitError { status: std::process::ExitStatus },
}

pub type Result<T> = std::result::Result<T, PushError>;
