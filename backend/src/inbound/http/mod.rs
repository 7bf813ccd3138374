//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod find_email;
pub mod health;
pub mod patterns;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
