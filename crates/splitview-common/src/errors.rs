use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("state write error: {0}")]
    StateWriteError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("webview error: {0}")]
    WebView(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SplitViewError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Panel(#[from] PanelError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
