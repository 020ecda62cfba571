//! Age value object for the pre-questionnaire demographic step.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Subject age in whole years, 10 to 100 inclusive.
///
/// Collected and range-validated by the entry step before the questionnaire
/// begins; the wizard itself only checks that an age is present. Immutable
/// for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(u8);

impl Age {
    /// Minimum accepted age.
    pub const MIN: u8 = 10;
    /// Maximum accepted age.
    pub const MAX: u8 = 100;

    /// Creates an Age, returning an error if outside 10-100.
    pub fn new(years: i32) -> Result<Self, ValidationError> {
        if years < Self::MIN as i32 || years > Self::MAX as i32 {
            return Err(ValidationError::out_of_range(
                "age",
                Self::MIN as i32,
                Self::MAX as i32,
                years,
            ));
        }
        Ok(Self(years as u8))
    }

    /// Returns the age in years.
    pub fn years(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_accepts_bounds_inclusive() {
        assert_eq!(Age::new(10).unwrap().years(), 10);
        assert_eq!(Age::new(100).unwrap().years(), 100);
        assert_eq!(Age::new(23).unwrap().years(), 23);
    }

    #[test]
    fn age_rejects_out_of_range_values() {
        assert!(Age::new(9).is_err());
        assert!(Age::new(101).is_err());
        assert!(Age::new(-1).is_err());
        assert!(Age::new(0).is_err());
    }

    #[test]
    fn age_error_reports_bounds() {
        let err = Age::new(150).unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Field 'age' must be between 10 and 100, got 150"
        );
    }

    #[test]
    fn age_serializes_as_plain_number() {
        let json = serde_json::to_string(&Age::new(42).unwrap()).unwrap();
        assert_eq!(json, "42");
    }
}
