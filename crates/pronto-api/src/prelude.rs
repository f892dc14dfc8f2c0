//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the pronto-api
//! crate, making it easy for library consumers to import everything they need
//! with a single use statement.
//!
//! # Example
//!
//! ```
//! use pronto_api_rs::prelude::*;
//!
//! // Now you have access to:
//! // - ProntoClient, ProntoClientBuilder (API client)
//! // - Error, ApiError, Result (error handling)
//! // - Search, SearchDetail, Lead, LeadsPage, LeadsQuery (search data)
//! // - EnrichmentContact, BulkEnrichmentRequest, BulkEnrichmentSummary
//! // - FileUploadRequest, FileUploadAck
//! ```

// Client types
pub use crate::client::{ProntoClient, ProntoClientBuilder};

// Error types
pub use crate::error::{ApiError, Error, Result};

// Data models
pub use crate::models::{
    BulkEnrichmentRequest,
    BulkEnrichmentSummary,
    EnrichmentContact,
    FileUploadAck,
    FileUploadRequest,
    Lead,
    LeadsPage,
    LeadsQuery,
    Search,
    SearchDetail,
};
