// errors.rs
use std::fmt;

/// Failures from the catalog core: generation, lookups, pricing math.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    InvalidArgument(String),
    ListingNotFound(u32),
    ZeroArea,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            DomainError::ListingNotFound(id) => write!(f, "No listing with id {id}"),
            DomainError::ZeroArea => write!(f, "Listing has zero area"),
        }
    }
}

impl std::error::Error for DomainError {}

/// Errors originating from the server layer (routing, malformed query
/// input) or mapped up from the catalog core.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Internal(msg) => write!(f, "Internal Server Error: {msg}"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<DomainError> for ServerError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ListingNotFound(_) => ServerError::NotFound,
            DomainError::InvalidArgument(msg) => ServerError::BadRequest(msg),
            DomainError::ZeroArea => ServerError::Internal("listing has zero area".to_string()),
        }
    }
}
