//! Field-level validation shared by the admin forms.
//!
//! A validation failure is a value, not an error: every rule either passes
//! or contributes a message to a [`FieldErrors`] map keyed by field name.
//! The checks are plain character predicates so they behave identically on
//! native targets (tests) and wasm.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping field name -> human-readable message.
///
/// Absence of a key means the field is valid. The backend rejects invalid
/// submissions with a payload of the same shape, which is why this
/// deserializes transparently from a JSON object of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn set(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Overlay another error map; existing entries for the same fields are
    /// replaced.
    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One or more ASCII letters, nothing else.
pub fn is_letters(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

/// One or more ASCII digits, nothing else.
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Exactly `len` ASCII digits.
pub fn is_digits_exact(value: &str, len: usize) -> bool {
    is_digits(value) && value.chars().count() == len
}

/// Between `min` and `max` ASCII digits (inclusive).
pub fn is_digits_range(value: &str, min: usize, max: usize) -> bool {
    let count = value.chars().count();
    is_digits(value) && count >= min && count <= max
}

/// National identity card number: 12 digits, or 9 digits followed by the
/// letter `V`.
pub fn is_valid_nic(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    match chars.len() {
        12 => chars.iter().all(|c| c.is_ascii_digit()),
        10 => chars[..9].iter().all(|c| c.is_ascii_digit()) && chars[9] == 'V',
        _ => false,
    }
}

/// Price text: digits, optionally one decimal point followed by one or two
/// fraction digits.
pub fn is_valid_price(value: &str) -> bool {
    match value.split_once('.') {
        None => is_digits(value),
        Some((whole, fraction)) => {
            is_digits(whole)
                && (1..=2).contains(&fraction.chars().count())
                && fraction.chars().all(|c| c.is_ascii_digit())
        }
    }
}

/// Keystroke filter: accept a candidate input value only while it is still a
/// letters-only prefix (empty included). Rejected keystrokes are dropped by
/// the form layer, leaving the previous value in place.
pub fn accepts_letters(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphabetic())
}

/// Keystroke filter: digits only, at most `max` of them.
pub fn accepts_digits(value: &str, max: usize) -> bool {
    value.chars().count() <= max && value.chars().all(|c| c.is_ascii_digit())
}

/// Keystroke filter for NIC input: up to 12 digits, or up to 9 digits with
/// an optional trailing `V`.
pub fn accepts_nic(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    let digits = chars.iter().take_while(|c| c.is_ascii_digit()).count();
    match chars.len() - digits {
        0 => digits <= 12,
        1 => chars[digits] == 'V' && digits <= 9,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_is_valid_iff_ten_digits() {
        assert!(is_digits_exact("1234567890", 10));
        assert!(!is_digits_exact("12345", 10));
        assert!(!is_digits_exact("12345a7890", 10));
        assert!(!is_digits_exact("12345678901", 10));
        assert!(!is_digits_exact("", 10));
    }

    #[test]
    fn test_nic() {
        assert!(is_valid_nic("200012345678"));
        assert!(is_valid_nic("123456789V"));
        assert!(!is_valid_nic("12345678V"));
        assert!(!is_valid_nic("1234567890V"));
        assert!(!is_valid_nic("123456789v"));
        assert!(!is_valid_nic("20001234567"));
        assert!(!is_valid_nic(""));
    }

    #[test]
    fn test_price_format() {
        assert!(is_valid_price("12"));
        assert!(is_valid_price("12.3"));
        assert!(is_valid_price("12.34"));
        assert!(!is_valid_price("12.345"));
        assert!(!is_valid_price(".34"));
        assert!(!is_valid_price("12."));
        assert!(!is_valid_price("1.2.3"));
        assert!(!is_valid_price("-5"));
        assert!(!is_valid_price(""));
    }

    #[test]
    fn test_letters() {
        assert!(is_letters("Nimal"));
        assert!(!is_letters("Nimal7"));
        assert!(!is_letters("Nimal Perera"));
        assert!(!is_letters(""));
    }

    #[test]
    fn test_keystroke_filters() {
        assert!(accepts_letters(""));
        assert!(accepts_letters("Nim"));
        assert!(!accepts_letters("Nim "));
        assert!(accepts_digits("077", 10));
        assert!(!accepts_digits("07712345678", 10));
        assert!(!accepts_digits("077a", 10));
        assert!(accepts_nic(""));
        assert!(accepts_nic("123456789"));
        assert!(accepts_nic("123456789V"));
        assert!(accepts_nic("V"));
        assert!(accepts_nic("200012345678"));
        assert!(!accepts_nic("2000123456789"));
        assert!(!accepts_nic("1234567890V"));
        assert!(!accepts_nic("12V3"));
    }

    #[test]
    fn test_field_errors_merge_replaces_existing() {
        let mut errors = FieldErrors::new();
        errors.set("contact", "Contact must be exactly 10 digits.");
        let mut incoming = FieldErrors::new();
        incoming.set("contact", "Contact already in use.");
        incoming.set("nic", "NIC already registered.");
        errors.merge(incoming);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("contact"), Some("Contact already in use."));
    }

    #[test]
    fn test_field_errors_deserialize_from_backend_payload() {
        let payload = r#"{"description":"Task description is required"}"#;
        let errors: FieldErrors = serde_json::from_str(payload).unwrap();
        assert_eq!(errors.get("description"), Some("Task description is required"));
    }
}
