use crate::{
    config::{ConfigError, schema::ConfigSchemaError},
    int::IntError,
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error. Each module keeps its own error enum; this wrapper lets
/// callers bubble any of them up with `?`.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Int(#[from] IntError),
}

impl From<ConfigSchemaError> for Error {
    fn from(err: ConfigSchemaError) -> Self {
        ConfigError::from(err).into()
    }
}
