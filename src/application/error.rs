// Errors surfaced by the application layer
use crate::domain::chart::GeometryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("incorrect email or password")]
    InvalidCredentials,
    #[error("request to {path} failed with status {status}")]
    Status { status: u16, path: String },
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session store lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("not signed in")]
    Unauthenticated,
    #[error("session expired: {0}")]
    SessionExpired(#[source] ApiError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("cannot build chart: {0}")]
    Geometry(#[from] GeometryError),
}
