use std::path::PathBuf;

use crate::profile::ProfileError;

/// Errors raised while loading the model or scoring customers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model artifact not found at {}", path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("failed to access model artifact {}: {source}", path.display())]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode model artifact {}: {source}", path.display())]
    ArtifactDecode {
        path: PathBuf,
        #[source]
        source: rmp_serde::decode::Error,
    },

    #[error("failed to encode model artifact: {0}")]
    ArtifactEncode(#[from] rmp_serde::encode::Error),

    #[error("model artifact lists {names} features but {importances} importances")]
    ImportanceMismatch { names: usize, importances: usize },

    #[error("model did not report a probability for class {class}")]
    MissingClass { class: usize },

    #[error("model returned no prediction")]
    EmptyPrediction,

    #[error("invalid customer profile: {0}")]
    InvalidProfile(#[from] ProfileError),

    #[error("invalid customer profile on line {line}: {source}")]
    InvalidRow {
        line: u64,
        #[source]
        source: ProfileError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
