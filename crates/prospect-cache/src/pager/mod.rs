//! Paged view over lazily fetched search leads.
//!
//! [`LeadPager`] presents all leads from all saved searches as one flat,
//! page-able list. The search list is fetched once; each search's leads are
//! fetched in full the first time a page computation touches them and cached
//! for the session. Pages are windows over the logical concatenation of all
//! searches' leads, in search-list order.
//!
//! Operations never return errors: failures are recorded in the observable
//! state (see [`PagerSnapshot`]) the way a UI consumes them. A single
//! in-flight guard admits at most one outstanding operation; a call arriving
//! while another is running is silently dropped, not queued, so callers
//! re-trigger instead of assuming eventual execution.
//!
//! # Example
//!
//! ```no_run
//! use pronto_api_rs::client::ProntoClient;
//! use prospect_cache_rs::pager::LeadPager;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ProntoClient::new("api-key");
//!     let pager = LeadPager::new(client);
//!
//!     pager.fetch_searches().await;
//!     pager.load_page(1).await;
//!
//!     let view = pager.snapshot().await;
//!     println!("page {}/{}: {} leads", view.current_page, view.total_pages, view.leads.len());
//! }
//! ```

mod cache;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pronto_api_rs::client::ProntoClient;
use pronto_api_rs::models::{Lead, Search};
use strsim::levenshtein;
use tokio::sync::Mutex;

use cache::SearchCache;

/// Default number of leads per page.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Maximum Levenshtein distance to consider a name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Formats the "not found" error message, optionally including a suggestion.
fn format_not_found_error(name: &str, suggestion: Option<&str>) -> String {
    let base = format!(
        "search '{}' not found. Try refreshing the search list.",
        name
    );
    match suggestion {
        Some(s) => format!("{} Did you mean '{}'?", base, s),
        None => base,
    }
}

/// Finds the best matching name from a list of candidates using Levenshtein distance.
///
/// Returns the best match if its edit distance is within the threshold,
/// otherwise returns `None`.
fn find_similar_name<'a>(query: &str, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| {
            let distance = levenshtein(&query_lower, &name.to_lowercase());
            (name.to_string(), distance)
        })
        .min_by_key(|(_, d)| *d)?;

    // Only suggest if the distance is within threshold and not an exact match
    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

/// Errors from synchronous pager lookups.
#[derive(Debug, thiserror::Error)]
pub enum PagerError {
    /// No search with the requested display name.
    #[error("{}", format_not_found_error(name, suggestion.as_deref()))]
    SearchNotFound {
        /// The name that was searched for.
        name: String,
        /// Optional suggestion for a similar search name.
        suggestion: Option<String>,
    },
}

/// Observable pager state, the bundle a UI layer renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerSnapshot {
    /// The leads of the most recently loaded page window. May be shorter
    /// than the page size at the end of the data or after fetch failures.
    pub leads: Vec<Lead>,

    /// True while an operation is in flight.
    pub loading: bool,

    /// Message from the most recent failed search-list fetch, if any.
    pub error: Option<String>,

    /// 1-based page number of the loaded window; 0 until a page is loaded.
    pub current_page: usize,

    /// Page count derived from the declared totals and the page size.
    pub total_pages: usize,

    /// Leads per page.
    pub page_size: usize,

    /// Sum of the declared lead counts across all searches.
    pub total_leads: u32,

    /// Number of searches whose fetch failed during the most recent page
    /// computation. Earlier failures memoized as empty do not recount.
    pub failed_searches: usize,
}

#[derive(Debug)]
struct PagerState {
    searches: Vec<Search>,
    leads: Vec<Lead>,
    current_page: usize,
    page_size: usize,
    total_leads: u32,
    failed_searches: usize,
    error: Option<String>,
}

/// Releases the in-flight flag when the operation completes.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Flat paged view over all searches' leads.
///
/// The pager is a cheap-to-clone handle: clones share the search list, the
/// lead cache and the in-flight guard, so a UI can hand copies to event
/// handlers freely.
#[derive(Debug, Clone)]
pub struct LeadPager {
    client: ProntoClient,
    cache: Arc<SearchCache>,
    state: Arc<Mutex<PagerState>>,
    in_flight: Arc<AtomicBool>,
}

impl LeadPager {
    /// Creates a pager with the default page size.
    pub fn new(client: ProntoClient) -> Self {
        Self::with_page_size(client, DEFAULT_PAGE_SIZE)
    }

    /// Creates a pager with a custom page size (clamped to at least 1).
    pub fn with_page_size(client: ProntoClient, page_size: usize) -> Self {
        Self {
            client,
            cache: Arc::new(SearchCache::new()),
            state: Arc::new(Mutex::new(PagerState {
                searches: Vec::new(),
                leads: Vec::new(),
                current_page: 0,
                page_size: page_size.max(1),
                total_leads: 0,
                failed_searches: 0,
                error: None,
            })),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Claims the in-flight guard, or returns `None` when another operation
    /// is already running and this call should be dropped.
    fn try_begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(InFlight(&self.in_flight))
    }

    /// Fetches the search list and the declared lead total.
    ///
    /// Dropped silently if another operation is in flight. On failure the
    /// error message is recorded and previously fetched searches are kept.
    pub async fn fetch_searches(&self) {
        let Some(_guard) = self.try_begin() else {
            return;
        };

        match self.client.get_searches().await {
            Ok(searches) => {
                let mut state = self.state.lock().await;
                state.total_leads = searches.iter().map(|s| s.leads_count).sum();
                state.searches = searches;
                state.error = None;
            }
            Err(e) => {
                let mut state = self.state.lock().await;
                state.error = Some(format!("failed to load searches: {}", e));
            }
        }
    }

    /// Loads the given 1-based page (0 is treated as 1).
    ///
    /// Dropped silently if another operation is in flight. Searches are
    /// walked in list order and fetched sequentially on first touch; a
    /// search whose fetch fails contributes no leads, is memoized as empty
    /// and counts toward [`PagerSnapshot::failed_searches`] for this call.
    /// The page window is served even when short.
    pub async fn load_page(&self, page: usize) {
        let Some(_guard) = self.try_begin() else {
            return;
        };
        self.load_page_inner(page.max(1)).await;
    }

    /// Changes the page size and recomputes the current page with it.
    ///
    /// Dropped silently if another operation is in flight, or if `page_size`
    /// is zero. Already-cached searches are reused; only searches not yet
    /// covering the new window are fetched.
    pub async fn set_page_size(&self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        let Some(_guard) = self.try_begin() else {
            return;
        };

        let current_page = {
            let mut state = self.state.lock().await;
            state.page_size = page_size;
            state.current_page
        };

        if current_page > 0 {
            self.load_page_inner(current_page).await;
        }
    }

    async fn load_page_inner(&self, page: usize) {
        let (searches, page_size) = {
            let state = self.state.lock().await;
            (state.searches.clone(), state.page_size)
        };

        let start = (page - 1) * page_size;
        let end = page * page_size;

        let mut window: Vec<Lead> = Vec::new();
        let mut failed = 0usize;
        let mut index = 0usize;

        'searches: for search in &searches {
            if window.len() >= page_size {
                break;
            }

            let cached = self.cache.get_or_fetch(&self.client, &search.id).await;
            if cached.fresh_failure {
                failed += 1;
            }

            for lead in cached.leads {
                if index >= start && index < end {
                    window.push(lead);
                    if window.len() == page_size {
                        break 'searches;
                    }
                }
                index += 1;
            }
        }

        let mut state = self.state.lock().await;
        state.current_page = page;
        state.leads = window;
        state.failed_searches = failed;
    }

    /// Returns the fetched search list.
    pub async fn searches(&self) -> Vec<Search> {
        self.state.lock().await.searches.clone()
    }

    /// Looks up a search by display name (case-insensitive).
    ///
    /// On a miss the error carries a did-you-mean suggestion when a fetched
    /// search name is close enough.
    pub async fn search_named(&self, name: &str) -> Result<Search, PagerError> {
        let state = self.state.lock().await;
        let name_lower = name.to_lowercase();

        if let Some(search) = state
            .searches
            .iter()
            .find(|s| s.name.to_lowercase() == name_lower)
        {
            return Ok(search.clone());
        }

        let suggestion = find_similar_name(name, state.searches.iter().map(|s| s.name.as_str()));
        Err(PagerError::SearchNotFound {
            name: name.to_string(),
            suggestion,
        })
    }

    /// Returns the current observable state.
    pub async fn snapshot(&self) -> PagerSnapshot {
        let state = self.state.lock().await;
        let total_pages = if state.total_leads == 0 {
            0
        } else {
            (state.total_leads as usize).div_ceil(state.page_size)
        };

        PagerSnapshot {
            leads: state.leads.clone(),
            loading: self.in_flight.load(Ordering::Acquire),
            error: state.error.clone(),
            current_page: state.current_page,
            total_pages,
            page_size: state.page_size,
            total_leads: state.total_leads,
            failed_searches: state.failed_searches,
        }
    }
}
