//! Error model, message catalogs, clock and rule configuration.
//!
//! Shared by the value objects, the document aggregate and the rule
//! strategies.

mod clock;
mod config;
mod error;
pub mod messages;

pub use clock::*;
pub use config::*;
pub use error::*;
pub use messages::{EnglishCatalog, MessageCatalog, SpanishCatalog};
