//! The company record filtered on the client side.

use serde::{Deserialize, Serialize};

/// A business record ("entreprise").
///
/// Record sets come either from a bundled mock dataset or from a wholesale
/// remote fetch; they are immutable for the duration of a session. Every
/// numeric field is optional: absence means the data point is unknown, and
/// range filters skip unknown values rather than treating them as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique record identifier.
    pub id: String,

    /// Company name.
    pub name: String,

    /// Free-text activity/industry label, e.g. "Conseil en informatique".
    #[serde(default)]
    pub activity: String,

    /// Free-text description.
    #[serde(default)]
    pub description: String,

    /// Free-text city label.
    #[serde(default)]
    pub city: String,

    /// Number of employees, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<u32>,

    /// Annual revenue in euros, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<u64>,

    /// Founding year, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,

    /// Rating on a five-star scale, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,

    /// Legal form label, e.g. "SARL" or "SAS", when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_form: Option<String>,
}

impl Company {
    /// Returns the company's age relative to the given reference year,
    /// or `None` when the founding year is unknown.
    pub fn age(&self, current_year: i32) -> Option<i32> {
        self.founded_year.map(|year| current_year - year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_from_founded_year() {
        let company = Company {
            id: "c-1".to_string(),
            name: "Acme".to_string(),
            activity: String::new(),
            description: String::new(),
            city: String::new(),
            employee_count: None,
            revenue: None,
            founded_year: Some(2000),
            rating: None,
            legal_form: None,
        };
        assert_eq!(company.age(2026), Some(26));
    }

    #[test]
    fn test_age_unknown_when_founded_year_missing() {
        let company = Company {
            id: "c-1".to_string(),
            name: "Acme".to_string(),
            activity: String::new(),
            description: String::new(),
            city: String::new(),
            employee_count: None,
            revenue: None,
            founded_year: None,
            rating: None,
            legal_form: None,
        };
        assert_eq!(company.age(2026), None);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id": "c-1", "name": "Acme"}"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.name, "Acme");
        assert!(company.employee_count.is_none());
        assert!(company.legal_form.is_none());
        assert!(company.city.is_empty());
    }
}
