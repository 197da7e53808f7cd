use firestore::errors::FirestoreError;

use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Database(FirestoreError),
    Json(serde_json::Error),
    Io(std::io::Error),
    Config(String),
}

impl Error {
    pub fn config_error(msg: &str) -> Self {
        Self::Config(msg.to_string())
    }
}

impl From<FirestoreError> for Error {
    fn from(e: FirestoreError) -> Self {
        Self::Database(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Database(e) => write!(f, "Database error: {e}"),
            Self::Json(e) => write!(f, "Json error: {e}"),
            Self::Io(e) => write!(f, "Io error: {e}"),
            Self::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
