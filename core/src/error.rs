//! Error types for the todo synchronizer.
//!
//! # Design
//! Three layers, matching the call path: `ApiError` for request building and
//! response parsing, `ServiceError` for everything a remote-service binding
//! can fail with, and `SyncError` for the two failure kinds the synchronizer
//! surfaces to its caller. Non-2xx responses keep the raw status code and
//! body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a status other than the expected one.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Errors returned by a [`TodoService`](crate::service::TodoService)
/// implementation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never produced a response (connection refused, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The request produced a response the client could not accept.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Failures surfaced by the synchronizer.
///
/// Each variant is recorded once on the diagnostics sink before being
/// returned, so hosts that drop the error still leave a trace.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Listing the remote collection failed. The local list is unchanged.
    #[error("remote read failed: {0}")]
    RemoteRead(#[source] ServiceError),

    /// Creating an item on the remote service failed. The optimistic local
    /// item remains until a later reload reconciles it.
    #[error("remote write failed: {0}")]
    RemoteWrite(#[source] ServiceError),
}
