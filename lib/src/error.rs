use std::backtrace::Backtrace;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub backtrace: Backtrace,
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::capture(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.backtrace.status() == std::backtrace::BacktraceStatus::Captured {
            write!(f, ", {}", self.backtrace)?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ErrorKind {
    #[error("unexpected error")]
    StdIoError(#[from] std::io::Error),

    #[error("config error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("failed parsing value from string: {0}")]
    ParsingError(String),

    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    /// Remote answered with a non-success status code.
    #[error("remote returned status {status}: {message}")]
    RemoteError { status: u16, message: String },

    #[error("other error: {0}")]
    Other(String),

    #[error("bad input: {0}")]
    BadInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("sled db error: {0}")]
    SledError(#[from] sled::Error),

    #[error("json decode error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("toml decode error: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("pot decode error: {0}")]
    PotError(#[from] pot::Error),

    #[error("url parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("infallible?")]
    Infallible(#[from] Infallible),
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Self::new(ErrorKind::Other(e))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::new(ErrorKind::ReqwestError(e))
    }
}

impl From<sled::Error> for Error {
    fn from(e: sled::Error) -> Self {
        Self::new(ErrorKind::SledError(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(ErrorKind::JsonError(e))
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::new(ErrorKind::TomlError(e))
    }
}

impl From<pot::Error> for Error {
    fn from(e: pot::Error) -> Self {
        Self::new(ErrorKind::PotError(e))
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::new(ErrorKind::UrlParseError(e))
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Self::new(ErrorKind::ConfigError(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::StdIoError(e))
    }
}

impl From<Infallible> for Error {
    fn from(e: Infallible) -> Self {
        Self::new(ErrorKind::Infallible(e))
    }
}

impl From<ErrorKind> for Error {
    fn from(k: ErrorKind) -> Self {
        Self::new(k)
    }
}
