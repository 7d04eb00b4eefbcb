use std::fmt;
use std::io;
use std::result;

#[derive(Debug)]
pub enum Error {
    Argument(String),
    Io(String),
    Network(String),
    Status(u16, String),
    Protocol(String),
    State(String),
}

impl Error {
    /// HTTP status code carried by a non-success response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status(code, _) => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument(msg)    => write!(f, "{}", msg),
            Error::Io(msg)          => write!(f, "{}", msg),
            Error::Network(msg)     => write!(f, "{}", msg),
            Error::Status(code, msg)=> write!(f, "HTTP status {}: {}", code, msg),
            Error::Protocol(msg)    => write!(f, "{}", msg),
            Error::State(msg)       => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(format!("IO error: {}", err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            let reason = status.canonical_reason().unwrap_or("invalid http response");
            return Error::Status(status.as_u16(), format!("Http error: {}", reason));
        }
        if err.is_decode() {
            return Error::Protocol(format!("Http error: decoding response body error {}", err));
        }
        Error::Network(format!("Http error: sending http request error {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Protocol(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Argument(format!("Invalid url: {}", err))
    }
}

pub type Result<T> = result::Result<T, Error>;
