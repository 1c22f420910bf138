//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format used everywhere a birthday crosses the user boundary.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for contact birthdays.
///
/// A birthday is a plain calendar date, parsed from and rendered as
/// `DD.MM.YYYY` (two-digit day, two-digit month, four-digit year).
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let bday = Birthday::new("15.03.1990").unwrap();
/// assert_eq!(bday.to_string(), "15.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must match `DD.MM.YYYY` exactly (10 characters, dots at positions
    ///   2 and 5) — chrono alone would also accept `1.1.2024`
    /// - Must denote a real calendar date (e.g. `31.02.2024` is rejected)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the date is invalid.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !Self::has_expected_shape(&raw) {
            return Err(ValidationError::InvalidDate(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidDate(raw)),
        }
    }

    /// Strict positional check for the `DD.MM.YYYY` shape.
    fn has_expected_shape(raw: &str) -> bool {
        let bytes = raw.as_bytes();
        bytes.len() == 10
            && bytes[2] == b'.'
            && bytes[5] == b'.'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| matches!(i, 2 | 5) || b.is_ascii_digit())
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as the canonical DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let bday = Birthday::new("15.03.1990").unwrap();
        assert_eq!(bday.date(), NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());
    }

    #[test]
    fn test_birthday_round_trips_to_same_string() {
        for raw in ["01.01.2000", "29.02.2024", "31.12.1999", "05.07.1985"] {
            let bday = Birthday::new(raw).unwrap();
            assert_eq!(bday.to_string(), raw);
        }
    }

    #[test]
    fn test_birthday_rejects_bad_shape() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1990-03-15").is_err());
        assert!(Birthday::new("15/03/1990").is_err());
        assert!(Birthday::new("1.1.2024").is_err()); // single-digit day/month
        assert!(Birthday::new("15.03.90").is_err()); // two-digit year
        assert!(Birthday::new("15.03.1990 ").is_err());
        assert!(Birthday::new("aa.bb.cccc").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.02.2024").is_err());
        assert!(Birthday::new("32.01.2024").is_err());
        assert!(Birthday::new("01.13.2024").is_err());
        assert!(Birthday::new("29.02.2023").is_err()); // not a leap year
    }

    #[test]
    fn test_birthday_leap_day() {
        let bday = Birthday::new("29.02.2024").unwrap();
        assert_eq!(bday.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_birthday_serialization() {
        let bday = Birthday::new("15.03.1990").unwrap();
        let json = serde_json::to_string(&bday).unwrap();
        assert_eq!(json, "\"15.03.1990\"");
    }

    #[test]
    fn test_birthday_deserialization() {
        let bday: Birthday = serde_json::from_str("\"15.03.1990\"").unwrap();
        assert_eq!(bday.to_string(), "15.03.1990");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"2024-01-01\"");
        assert!(result.is_err());
    }
}
