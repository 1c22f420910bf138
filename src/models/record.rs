//! Contact record model: one contact's name, phones, and birthdays.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the book.
///
/// Owns an insertion-ordered collection of phone numbers (duplicates
/// allowed) and an insertion-ordered collection of birthdays. A record is
/// owned by exactly one [`ContactStore`](crate::store::ContactStore) entry.
///
/// Phones are addressed by zero-based index. Addressing by index (rather
/// than by value or by re-checking the contact name) makes editing one of
/// several phones unambiguous.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// The unique name identifying this contact.
    name: ContactName,

    /// Phone numbers, in the order they were added.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Birthdays, in the order they were added.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    birthdays: Vec<Birthday>,
}

impl ContactRecord {
    /// Create a new record with no phones and no birthdays.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthdays: Vec::new(),
        }
    }

    /// Get the contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Validate a raw phone string and append it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the string is not
    /// exactly 10 digits.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Validate a raw `DD.MM.YYYY` string and append it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string is not a real
    /// calendar date in that format.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(raw)?;
        self.birthdays.push(birthday);
        Ok(())
    }

    /// All phones, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// All birthdays, in insertion order.
    pub fn birthdays(&self) -> &[Birthday] {
        &self.birthdays
    }

    /// Get a phone by zero-based index.
    pub fn phone_at(&self, index: usize) -> Option<&PhoneNumber> {
        self.phones.get(index)
    }

    /// Get a birthday by zero-based index.
    pub fn birthday_at(&self, index: usize) -> Option<&Birthday> {
        self.birthdays.get(index)
    }

    /// Replace the phone at `index` with a validated new value.
    ///
    /// Returns the previous phone, or `Ok(None)` if the index is out of
    /// range. The new value is validated before anything is touched, so an
    /// invalid replacement leaves the record unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` is not a valid
    /// phone number.
    pub fn edit_phone(
        &mut self,
        index: usize,
        raw: &str,
    ) -> Result<Option<PhoneNumber>, ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        match self.phones.get_mut(index) {
            Some(slot) => Ok(Some(std::mem::replace(slot, phone))),
            None => Ok(None),
        }
    }

    /// Remove and return the phone at `index`, if it exists.
    pub fn remove_phone(&mut self, index: usize) -> Option<PhoneNumber> {
        if index < self.phones.len() {
            Some(self.phones.remove(index))
        } else {
            None
        }
    }
}

// Display renders the listing line used by the `all` command.
impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthdays = self
            .birthdays
            .iter()
            .map(Birthday::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(
            f,
            "Contact name: {}, phones: {}, b-day: {}.",
            self.name, phones, birthdays
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ContactRecord {
        ContactRecord::new(ContactName::new(name).unwrap())
    }

    #[test]
    fn test_record_new() {
        let rec = record("John");
        assert_eq!(rec.name().as_str(), "John");
        assert!(rec.phones().is_empty());
        assert!(rec.birthdays().is_empty());
    }

    #[test]
    fn test_add_phone_appends_in_order() {
        let mut rec = record("John");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("0987654321").unwrap();
        assert_eq!(rec.phones().len(), 2);
        assert_eq!(rec.phone_at(0).unwrap().as_str(), "1234567890");
        assert_eq!(rec.phone_at(1).unwrap().as_str(), "0987654321");
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut rec = record("John");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("1234567890").unwrap();
        assert_eq!(rec.phones().len(), 2);
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut rec = record("John");
        assert!(rec.add_phone("12345").is_err());
        assert!(rec.phones().is_empty());
    }

    #[test]
    fn test_add_birthday() {
        let mut rec = record("John");
        rec.add_birthday("15.03.1990").unwrap();
        assert_eq!(rec.birthday_at(0).unwrap().to_string(), "15.03.1990");
        assert!(rec.add_birthday("31.02.2024").is_err());
        assert_eq!(rec.birthdays().len(), 1);
    }

    #[test]
    fn test_edit_phone_by_index() {
        let mut rec = record("John");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("0987654321").unwrap();

        let old = rec.edit_phone(1, "1112223333").unwrap();
        assert_eq!(old.unwrap().as_str(), "0987654321");
        assert_eq!(rec.phone_at(1).unwrap().as_str(), "1112223333");
        // the other phone is untouched
        assert_eq!(rec.phone_at(0).unwrap().as_str(), "1234567890");
    }

    #[test]
    fn test_edit_phone_out_of_range() {
        let mut rec = record("John");
        rec.add_phone("1234567890").unwrap();
        assert!(rec.edit_phone(5, "1112223333").unwrap().is_none());
    }

    #[test]
    fn test_edit_phone_invalid_value_keeps_old() {
        let mut rec = record("John");
        rec.add_phone("1234567890").unwrap();
        assert!(rec.edit_phone(0, "bad").is_err());
        assert_eq!(rec.phone_at(0).unwrap().as_str(), "1234567890");
    }

    #[test]
    fn test_remove_phone_by_index() {
        let mut rec = record("John");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("0987654321").unwrap();

        let removed = rec.remove_phone(0).unwrap();
        assert_eq!(removed.as_str(), "1234567890");
        assert_eq!(rec.phones().len(), 1);
        assert_eq!(rec.phone_at(0).unwrap().as_str(), "0987654321");
        assert!(rec.remove_phone(7).is_none());
    }

    #[test]
    fn test_display_format() {
        let mut rec = record("John");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("0987654321").unwrap();
        rec.add_birthday("15.03.1990").unwrap();

        assert_eq!(
            rec.to_string(),
            "Contact name: John, phones: 1234567890; 0987654321, b-day: 15.03.1990."
        );
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut rec = record("John");
        rec.add_phone("1234567890").unwrap();
        rec.add_birthday("15.03.1990").unwrap();

        let json = serde_json::to_string(&rec).unwrap();
        let back: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }
}
