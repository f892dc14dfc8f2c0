//! Search (lead category) and lead models.
//!
//! A "search" is a saved prospecting query on the provider side. It acts as a
//! category: every lead belongs to exactly one search, and membership never
//! changes once fetched.

use serde::{Deserialize, Serialize};

/// A saved search as returned by `GET /searches`.
///
/// `leads_count` is the count declared by the provider, not the number of
/// leads fetched so far. The two can drift; consumers paging over searches
/// should index by actual fetched lists and treat this as a display total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    /// Unique search identifier.
    pub id: String,

    /// Display name of the search.
    pub name: String,

    /// Number of leads the provider declares for this search.
    #[serde(default)]
    pub leads_count: u32,
}

/// Full detail for a single search, including its lead list.
///
/// Returned by `GET /searches/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDetail {
    /// Unique search identifier.
    pub id: String,

    /// Display name of the search.
    pub name: String,

    /// Number of leads the provider declares for this search.
    #[serde(default)]
    pub leads_count: u32,

    /// The search's leads, in provider order.
    #[serde(default)]
    pub leads: Vec<Lead>,
}

/// A single lead (contact-style record) belonging to a search.
///
/// The provider omits fields it has no data for, so everything beyond the
/// name pair is optional and missing fields deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Lead {
    /// Provider-side lead identifier, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// First name.
    #[serde(default)]
    pub first_name: String,

    /// Last name.
    #[serde(default)]
    pub last_name: String,

    /// Job title or headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Current company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Email address, when already enriched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number, when already enriched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// LinkedIn profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,

    /// Free-text location label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Lead {
    /// Returns the lead's display name ("First Last", trimmed).
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// One page of leads for a search, as returned by
/// `GET /searches/{id}/leads?page=&limit=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadsPage {
    /// The requested page of leads, in provider order.
    #[serde(default)]
    pub leads: Vec<Lead>,

    /// Page number echoed by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Page size echoed by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Query parameters for the paged leads endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeadsQuery {
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}
