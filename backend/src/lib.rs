//! Email finder service library.
//!
//! Layout:
//! - `domain`: port traits, the transport-agnostic error and trace identifiers
//! - `inbound::http`: Actix handlers, request/response DTOs and error mapping
//! - `middleware`: request tracing
//! - `doc`: the OpenAPI document

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
