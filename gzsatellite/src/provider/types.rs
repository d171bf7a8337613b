//! Provider types

use std::fmt;

/// Errors that can occur while talking to a tile server.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The HTTP client could not be built
    ClientInit(String),
    /// The request could not be sent or the body could not be read
    HttpError(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::ClientInit(msg) => write!(f, "Failed to create HTTP client: {}", msg),
            ProviderError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Status code and raw body of a completed HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Only `200 OK` counts as a delivered tile.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}
