use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;

/// Problems building a layer registry
#[derive(Debug)]
pub enum Error {
    /// Layer name is not valid (message says why)
    MalformedName(String),

    /// Same layer appears twice, so it would have two ranks
    DuplicateLayer(String),

    IoError(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Error::MalformedName(msg) => write!(f, "Malformed layer name: {}", msg),
            Error::DuplicateLayer(name) => {
                write!(f, "Layer '{}' is registered more than once", name)
            }
            Error::IoError(err) => write!(f, "Failed to read layer registry: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}
