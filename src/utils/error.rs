use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Toctree operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Toctree operations
#[derive(Debug)]
pub enum TocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Exclusion pattern error
    Pattern(String),
    /// Heading extraction error
    Headings(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::Io(err) => write!(f, "IO error: {}", err),
            TocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TocError::Pattern(msg) => write!(f, "Exclusion pattern error: {}", msg),
            TocError::Headings(msg) => write!(f, "Heading extraction error: {}", msg),
            TocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TocError {}

impl From<io::Error> for TocError {
    fn from(err: io::Error) -> Self {
        TocError::Io(err)
    }
}

impl From<String> for TocError {
    fn from(msg: String) -> Self {
        TocError::Generic(msg)
    }
}

impl From<&str> for TocError {
    fn from(msg: &str) -> Self {
        TocError::Generic(msg.to_string())
    }
}
