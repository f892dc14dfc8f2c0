//! Filter evaluation against company records.

use chrono::Datelike;

use super::company::Company;
use super::state::FilterState;

/// Evaluates a [`FilterState`] against company records.
///
/// The matcher borrows the state and the reference year for age computation,
/// then tests records against the AND of all active predicates.
///
/// # Example
///
/// ```
/// use prospect_cache_rs::filter::{Company, CompanyMatcher, FilterState};
///
/// let companies = vec![Company {
///     id: "c-1".to_string(),
///     name: "Acme Conseil".to_string(),
///     activity: "Conseil en informatique".to_string(),
///     description: String::new(),
///     city: "Paris".to_string(),
///     employee_count: Some(12),
///     revenue: None,
///     founded_year: Some(2015),
///     rating: None,
///     legal_form: Some("SARL".to_string()),
/// }];
///
/// let mut state = FilterState::default();
/// state.search_term = "conseil".to_string();
///
/// let matcher = CompanyMatcher::new(&state, 2026);
/// let results = matcher.filter_companies(&companies);
/// assert_eq!(results.len(), 1);
/// ```
#[derive(Debug)]
pub struct CompanyMatcher<'a> {
    state: &'a FilterState,
    current_year: i32,
}

impl<'a> CompanyMatcher<'a> {
    /// Creates a new matcher.
    ///
    /// # Arguments
    ///
    /// * `state` - The filter criteria to apply
    /// * `current_year` - Reference year for company-age computation
    pub fn new(state: &'a FilterState, current_year: i32) -> Self {
        Self {
            state,
            current_year,
        }
    }

    /// Creates a matcher using the current wall-clock year.
    pub fn for_current_year(state: &'a FilterState) -> Self {
        Self::new(state, chrono::Local::now().year())
    }

    /// Returns true if the company passes every active predicate.
    pub fn matches(&self, company: &Company) -> bool {
        self.matches_search_term(company)
            && self.matches_activities(company)
            && self.matches_employee_range(company)
            && self.matches_revenue_range(company)
            && self.matches_age_range(company)
            && self.matches_rating_range(company)
            && self.matches_cities(company)
            && self.matches_legal_forms(company)
    }

    /// Filters a slice of companies, returning matches in original order.
    pub fn filter_companies<'b>(&self, companies: &'b [Company]) -> Vec<&'b Company> {
        companies.iter().filter(|c| self.matches(c)).collect()
    }

    /// Case-insensitive substring match over name, activity, description
    /// and city. Inactive when the term is empty.
    fn matches_search_term(&self, company: &Company) -> bool {
        if self.state.search_term.is_empty() {
            return true;
        }
        let term = self.state.search_term.to_lowercase();
        company.name.to_lowercase().contains(&term)
            || company.activity.to_lowercase().contains(&term)
            || company.description.to_lowercase().contains(&term)
            || company.city.to_lowercase().contains(&term)
    }

    /// A record passes if ANY selected activity is a substring of its
    /// activity label. Substring, not equality: selecting "Conseil" keeps
    /// "Conseil en informatique" as well.
    fn matches_activities(&self, company: &Company) -> bool {
        if self.state.activities.is_empty() {
            return true;
        }
        self.state
            .activities
            .iter()
            .any(|activity| company.activity.contains(activity.as_str()))
    }

    fn matches_employee_range(&self, company: &Company) -> bool {
        match company.employee_count {
            None => true,
            Some(count) => {
                let (lo, hi) = self.state.employee_range;
                count >= lo && count <= hi
            }
        }
    }

    fn matches_revenue_range(&self, company: &Company) -> bool {
        match company.revenue {
            None => true,
            Some(revenue) => {
                let (lo, hi) = self.state.revenue_range;
                revenue >= lo && revenue <= hi
            }
        }
    }

    fn matches_age_range(&self, company: &Company) -> bool {
        match company.age(self.current_year) {
            None => true,
            Some(age) => {
                let (lo, hi) = self.state.age_range;
                age >= lo && age <= hi
            }
        }
    }

    fn matches_rating_range(&self, company: &Company) -> bool {
        match company.rating {
            None => true,
            Some(rating) => {
                let (lo, hi) = self.state.rating_range;
                rating >= lo && rating <= hi
            }
        }
    }

    /// Exact city membership. Inactive when no city is selected.
    fn matches_cities(&self, company: &Company) -> bool {
        if self.state.cities.is_empty() {
            return true;
        }
        self.state.cities.iter().any(|city| *city == company.city)
    }

    /// Exact legal-form membership. Inactive when no form is selected; a
    /// record without a legal form fails once the selection is non-empty.
    fn matches_legal_forms(&self, company: &Company) -> bool {
        if self.state.legal_forms.is_empty() {
            return true;
        }
        match &company.legal_form {
            Some(form) => self.state.legal_forms.iter().any(|f| f == form),
            None => false,
        }
    }
}
