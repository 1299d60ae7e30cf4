//! Error types
//!
//! Local failures only. Anything a remote peer did wrong is answered with a
//! negative acknowledgment instead of surfacing here.

use std::fmt;

/// Result alias for fallible crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Component bus rejected an operation
    Bus(BusError),
    /// Video server lifecycle failure
    Server(ServerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "Bus error: {}", e),
            Error::Server(e) => write!(f, "Server error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Bus(e) => Some(e),
            Error::Server(e) => Some(e),
        }
    }
}

impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Error::Bus(e)
    }
}

impl From<ServerError> for Error {
    fn from(e: ServerError) -> Self {
        Error::Server(e)
    }
}

/// Component bus errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// A component with this id is already registered
    IdInUse(u8),
    /// No component with this id
    NotFound(u8),
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::IdInUse(id) => write!(f, "Component id {} already in use", id),
            BusError::NotFound(id) => write!(f, "Component id {} not registered", id),
        }
    }
}

impl std::error::Error for BusError {}

/// Video server lifecycle errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerError {
    /// `init` has not been called with a routing context
    NotInitialized,
    /// `init` was already called
    AlreadyInitialized,
    /// Server has no media components to serve
    NoComponents,
    /// All camera component ids are taken
    NoFreeSlot,
    /// Component id outside the camera range
    OutOfRange(u8),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotInitialized => write!(f, "Video server not initialized"),
            ServerError::AlreadyInitialized => write!(f, "Video server already initialized"),
            ServerError::NoComponents => write!(f, "No media components registered"),
            ServerError::NoFreeSlot => write!(f, "No free camera component id"),
            ServerError::OutOfRange(id) => {
                write!(f, "Component id {} outside camera range", id)
            }
        }
    }
}

impl std::error::Error for ServerError {}
