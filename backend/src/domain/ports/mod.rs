//! Domain ports used by inbound adapters.
//!
//! Handlers depend on these traits rather than on the generation crate
//! directly, so tests can substitute deterministic or failing doubles.

mod email_finder;

#[cfg(test)]
pub use email_finder::MockEmailFinder;
pub use email_finder::{CatalogueEmailFinder, EmailFinder};
