use crate::config::ConfigError;
use crate::location::ValidationFailure;
use crate::state::StateError;
use thiserror::Error;

pub type DialogResult<T> = std::result::Result<T, DialogError>;

#[derive(Debug, Error)]
pub enum DialogError {
    #[error(transparent)]
    State(#[from] StateError),
    #[error("invalid annotation request: {0}")]
    Validation(#[from] ValidationFailure),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
