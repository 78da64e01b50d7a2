//! Errors surfaced to emitter callers

use thiserror::Error;

use crate::config::ConfigError;
use crate::severity::SeverityError;

#[derive(Error, Debug)]
pub enum EmitterError {
    #[error(transparent)]
    InvalidSeverity(#[from] SeverityError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type EmitterResult<T> = Result<T, EmitterError>;
