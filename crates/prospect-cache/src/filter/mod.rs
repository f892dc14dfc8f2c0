//! Client-side company filtering.
//!
//! This module provides the pure filtering core: facet vocabularies and
//! numeric bounds derived from a record set ([`facets`]), the user-edited
//! criteria ([`FilterState`]) and the matcher applying them
//! ([`CompanyMatcher`]).
//!
//! All of it is synchronous and side-effect free. Missing data never fails a
//! record: an absent numeric field skips that range check, and empty facet
//! selections are inactive. The one exception is the legal-form facet, where
//! a record without a legal form is excluded once the selection is non-empty.
//!
//! # Example
//!
//! ```
//! use prospect_cache_rs::filter::{facets, Company, CompanyMatcher, FilterState};
//!
//! let companies: Vec<Company> = vec![];
//!
//! // Derive slider bounds and picker vocabularies from the record set
//! let (min_emp, max_emp) = facets::employee_bounds(&companies);
//! let activities = facets::unique_activities(&companies);
//!
//! // Apply the default (all-inactive) state: everything passes
//! let state = FilterState::default();
//! let matcher = CompanyMatcher::new(&state, 2026);
//! let results = matcher.filter_companies(&companies);
//! # let _ = (min_emp, max_emp, activities, results);
//! ```

mod company;
pub mod facets;
mod matcher;
mod state;

pub use company::Company;
pub use matcher::CompanyMatcher;
pub use state::{
    FilterState, DEFAULT_AGE_RANGE, DEFAULT_EMPLOYEE_RANGE, DEFAULT_RATING_RANGE,
    DEFAULT_REVENUE_RANGE,
};
