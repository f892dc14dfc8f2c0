//! Facet vocabularies and numeric bounds derived from a record set.
//!
//! These feed the filter UI: facet lists populate the activity/city/legal-form
//! pickers, bounds initialize the range sliders. All functions are pure and
//! total — an empty record set yields empty vocabularies and the documented
//! default ranges, never a panic.

use chrono::{Datelike, Local};

use super::company::Company;
use super::state::{DEFAULT_AGE_RANGE, DEFAULT_EMPLOYEE_RANGE, DEFAULT_REVENUE_RANGE};

/// Collects every activity value once, lexicographically sorted.
///
/// Deduplication is by exact string equality; no case normalization.
pub fn unique_activities(companies: &[Company]) -> Vec<String> {
    let mut values: Vec<String> = companies.iter().map(|c| c.activity.clone()).collect();
    values.sort();
    values.dedup();
    values
}

/// Collects every city value once, lexicographically sorted.
pub fn unique_cities(companies: &[Company]) -> Vec<String> {
    let mut values: Vec<String> = companies.iter().map(|c| c.city.clone()).collect();
    values.sort();
    values.dedup();
    values
}

/// Collects every legal form once, lexicographically sorted.
///
/// Records with an absent or empty legal form are skipped.
pub fn unique_legal_forms(companies: &[Company]) -> Vec<String> {
    let mut values: Vec<String> = companies
        .iter()
        .filter_map(|c| c.legal_form.as_deref())
        .filter(|form| !form.is_empty())
        .map(str::to_string)
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Min and max employee count over records that define the field.
///
/// Falls back to the default range when no record defines it.
pub fn employee_bounds(companies: &[Company]) -> (u32, u32) {
    bounds_over(
        companies.iter().filter_map(|c| c.employee_count),
        DEFAULT_EMPLOYEE_RANGE,
    )
}

/// Min and max revenue over records that define the field.
///
/// Falls back to the default range when no record defines it.
pub fn revenue_bounds(companies: &[Company]) -> (u64, u64) {
    bounds_over(
        companies.iter().filter_map(|c| c.revenue),
        DEFAULT_REVENUE_RANGE,
    )
}

/// Min and max company age relative to `current_year`, over records with a
/// known founding year.
///
/// The reference year is a parameter so callers (and tests) control the
/// wall-clock dependency. Falls back to the default range when no record
/// defines a founding year.
pub fn age_bounds(companies: &[Company], current_year: i32) -> (i32, i32) {
    bounds_over(
        companies.iter().filter_map(|c| c.age(current_year)),
        DEFAULT_AGE_RANGE,
    )
}

/// [`age_bounds`] relative to the current wall-clock year.
pub fn age_bounds_now(companies: &[Company]) -> (i32, i32) {
    age_bounds(companies, Local::now().year())
}

fn bounds_over<T: Copy + PartialOrd>(mut values: impl Iterator<Item = T>, default: (T, T)) -> (T, T) {
    let Some(first) = values.next() else {
        return default;
    };
    values.fold((first, first), |(lo, hi), value| {
        (
            if value < lo { value } else { lo },
            if value > hi { value } else { hi },
        )
    })
}
