//! Bulk contact enrichment models.
//!
//! Enrichment takes a batch of contacts the caller already has (typically
//! exported rows) and asks the provider to fill in the requested attribute
//! types, e.g. `"email"` or `"phone"`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One contact submitted for enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentContact {
    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Current company name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Known email address, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// LinkedIn profile URL, if known. Improves match accuracy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
}

impl EnrichmentContact {
    /// Creates a contact with just a name pair.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            company_name: None,
            email: None,
            linkedin_url: None,
        }
    }
}

/// Request body for `POST /pronto/enrichments/contacts/bulk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkEnrichmentRequest {
    /// The contacts to enrich.
    pub contacts: Vec<EnrichmentContact>,

    /// Which attribute types to enrich, e.g. `["email", "phone"]`.
    pub enrichment_type: Vec<String>,
}

impl BulkEnrichmentRequest {
    /// Creates a request for the given contacts and enrichment types.
    pub fn new(
        contacts: Vec<EnrichmentContact>,
        enrichment_type: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            contacts,
            enrichment_type: enrichment_type.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result summary for a bulk enrichment call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkEnrichmentSummary {
    /// Number of contacts submitted.
    #[serde(default)]
    pub total: u32,

    /// Number of contacts successfully enriched.
    #[serde(default)]
    pub enriched: u32,

    /// Number of contacts the provider could not enrich.
    #[serde(default)]
    pub failed: u32,

    /// Per-type enriched counts, when the provider breaks them down.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub by_type: HashMap<String, u32>,
}
