use thiserror::Error;

use crate::resolver::engine::ResolveError;
use crate::validation::ConfigError;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Any failure the crate can produce: a misauthored configuration at build
/// time, or a failed resolve call.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
