//! Domain primitives and ports.
//!
//! Purpose: hold the transport-agnostic error model, the request-scoped trace
//! identifier and the ports inbound adapters call into. Candidate generation
//! itself lives in the `email-patterns` crate; the domain wraps it behind
//! [`ports::EmailFinder`] so handlers stay testable without the real
//! catalogue.
//!
//! Public surface:
//! - Error (alias to `error::Error`): failure payload mapped by adapters.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - TraceId (alias to `trace_id::TraceId`): per-request correlation id.

pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;

/// Response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
