//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// A JSON-lines record could not be parsed (or lacks a required field).
    /// `line` is 1-based.
    Parse {
        line: usize,
        source: serde_json::Error,
    },
    Serde(serde_json::Error),
    Annotation(String),
    Custom(String),
}

impl Error {
    pub fn parse(line: usize, source: serde_json::Error) -> Self {
        Error::Parse { line, source }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Parse { line, source } => write!(f, "parse error on line {}: {}", line, source),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Annotation(e) => write!(f, "annotation error: {}", e),
            Error::Custom(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Parse { source, .. } => Some(source),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
