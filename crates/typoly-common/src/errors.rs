use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of the editor-group tree. Pane geometry itself never errors;
/// out-of-range values are clamped instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("unknown editor group: {0}")]
    UnknownGroup(String),

    #[error("unknown split: {0}")]
    UnknownSplit(String),

    #[error("cannot close the last editor group")]
    LastGroup,

    #[error("invalid split sizes: {0}")]
    InvalidSizes(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TypolyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("scenario error: {0}")]
    Scenario(String),

    #[error("{0}")]
    Other(String),
}
