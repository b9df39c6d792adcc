use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// No company settings were supplied. Every page footer depends on them,
    /// so this is detected before any layout work begins.
    MissingSettings(String),
    /// The PDF could not be assembled.
    Pdf(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingSettings(what) => write!(f, "missing company settings: {what}"),
            Error::Pdf(msg) => write!(f, "PDF assembly failed: {msg}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
