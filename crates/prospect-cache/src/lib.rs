//! Client-side core for prospect browsing.
//!
//! Two independent read paths feed the UI:
//!
//! - [`filter`] — pure filtering over an in-memory company record set: facet
//!   vocabularies, numeric bounds and a [`filter::CompanyMatcher`] applying a
//!   user-edited [`filter::FilterState`].
//! - [`pager`] — a [`pager::LeadPager`] serving flat pages over all saved
//!   searches' leads, fetched lazily per search and cached for the session.
//!
//! The two units share no state.

pub mod filter;
pub mod pager;

pub use filter::{Company, CompanyMatcher, FilterState};
pub use pager::{LeadPager, PagerError, PagerSnapshot, DEFAULT_PAGE_SIZE};
