use crate::interface::config::ConfigError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Model reflection failed: {0}")]
    Reflection(String),

    #[error("Missing reference template: {0}")]
    MissingTemplate(String),

    #[error("Can't find model at {0}")]
    ModelNotFound(String),

    #[error("Invalid resources path: {0}")]
    InvalidResourcesPath(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
