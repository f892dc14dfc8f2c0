//! Lazy per-search lead cache.

use std::collections::HashMap;

use pronto_api_rs::client::ProntoClient;
use pronto_api_rs::models::Lead;
use tokio::sync::Mutex;

/// Result of a cache lookup.
#[derive(Debug)]
pub(crate) struct CachedLeads {
    /// The search's leads, in upstream order. Empty for a search whose
    /// fetch failed at some point in the session.
    pub leads: Vec<Lead>,
    /// True when this call attempted the fetch and it failed. Later lookups
    /// of the same search return the memoized empty list with this unset.
    pub fresh_failure: bool,
}

/// Session-scoped cache mapping search id to its fetched lead list.
///
/// Each search is fetched at most once: the first lookup fetches the full
/// lead list and memoizes it. A failed fetch is memoized as an empty list,
/// so a broken search contributes nothing instead of being re-fetched on
/// every page turn.
#[derive(Debug, Default)]
pub(crate) struct SearchCache {
    entries: Mutex<HashMap<String, Vec<Lead>>>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the search's leads, fetching and memoizing on first access.
    pub async fn get_or_fetch(&self, client: &ProntoClient, id: &str) -> CachedLeads {
        if let Some(leads) = self.entries.lock().await.get(id).cloned() {
            return CachedLeads {
                leads,
                fresh_failure: false,
            };
        }

        match client.get_search(id).await {
            Ok(detail) => {
                let leads = detail.leads;
                self.entries.lock().await.insert(id.to_string(), leads.clone());
                CachedLeads {
                    leads,
                    fresh_failure: false,
                }
            }
            Err(e) => {
                eprintln!("Warning: failed to load leads for search '{}': {}", id, e);
                self.entries.lock().await.insert(id.to_string(), Vec::new());
                CachedLeads {
                    leads: Vec::new(),
                    fresh_failure: true,
                }
            }
        }
    }
}
