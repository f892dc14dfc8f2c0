//! Pronto API client library
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use pronto_api_rs::prelude::*;
//! ```
//!
//! This re-exports the most commonly used types including [`client::ProntoClient`],
//! error types, and the search/lead/enrichment data models.

pub mod client;
pub mod error;
pub mod models;
pub mod prelude;

mod retry;
