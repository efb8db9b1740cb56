use rocket::http::Status;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("deadline exceeded")]
    Timeout,
    #[error("request budget exhausted before the call started")]
    Canceled,
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    BadStatus(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_deadline(&self) -> bool {
        matches!(self, FetchError::Timeout | FetchError::Canceled)
    }

    pub fn status(&self) -> Status {
        if self.is_deadline() {
            Status::GatewayTimeout
        } else {
            Status::InternalServerError
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Transport(e)
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("deadline exceeded")]
    Timeout,
    #[error("store budget exhausted before the write started")]
    Canceled,
    #[error("refusing to store an empty bid")]
    EmptyBid,
    #[error(transparent)]
    Pool(#[from] r2d2::Error),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error("store task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl StoreError {
    pub fn is_deadline(&self) -> bool {
        matches!(self, StoreError::Timeout | StoreError::Canceled)
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
