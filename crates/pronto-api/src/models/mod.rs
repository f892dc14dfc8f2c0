//! Data models for the Pronto API.

mod enrichment;
mod file;
mod search;

pub use enrichment::{BulkEnrichmentRequest, BulkEnrichmentSummary, EnrichmentContact};
pub use file::{FileUploadAck, FileUploadRequest};
pub use search::{Lead, LeadsPage, LeadsQuery, Search, SearchDetail};
