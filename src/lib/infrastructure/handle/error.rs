use crate::config::ConfigError;
use crate::infrastructure::model::ModelError;
use thiserror::Error;

/// Errors surfaced by handle requests.
#[derive(Debug, Error)]
pub enum HandleError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Why a specialized handle could not be used.
#[derive(Debug, Error)]
pub enum SpecializedFailure {
    #[error("construction failed: {0}")]
    Construction(#[source] ModelError),
    #[error("probe request failed: {0}")]
    Probe(#[source] ModelError),
}
