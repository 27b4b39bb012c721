use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid log filter in MARKETQUANTIFY_LOG: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install logger: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("{0}")]
    Run(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// True when the error happened before logging was available to report it.
    pub const fn is_logging_setup(&self) -> bool {
        matches!(self, Self::LogFilter(_) | Self::Logging(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
