//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Letters and spaces
static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());

// Letters, digits and spaces
static ALNUM_SPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9 ]+$").unwrap());

// ASCII digits only; `\d` would accept any Unicode digit
static POSTCODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8,10}$").unwrap());

/// Returns true if the string has only ASCII letters and spaces.
pub fn is_alpha(value: &str) -> bool {
    ALPHA_REGEX.is_match(value)
}

/// Returns true if the string has only ASCII letters, digits and spaces.
pub fn is_alnum_space(value: &str) -> bool {
    ALNUM_SPACE_REGEX.is_match(value)
}

pub fn is_postcode(value: &str) -> bool {
    POSTCODE_REGEX.is_match(value)
}

pub fn is_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Length in characters, not bytes
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validates that a string holds between `min` and `max` characters, inclusive
pub fn validate_length(s: &str, min: usize, max: usize) -> Result<(), String> {
    let len = char_len(s);
    if len >= min && len <= max {
        Ok(())
    } else {
        Err(format!("Must be {} to {} characters", min, max))
    }
}

/// Validates that a string holds strictly more than `min` characters
pub fn validate_longer_than(s: &str, min: usize) -> Result<(), String> {
    if char_len(s) > min {
        Ok(())
    } else {
        Err(format!("Must be longer than {} characters", min))
    }
}

/// Required check: fails with `"{label} is required"` on an empty value
pub fn require(value: &str, label: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validators() {
        assert!(validate_length("hello", 3, 10).is_ok());
        assert!(validate_length("abc", 3, 10).is_ok());
        assert!(validate_length("abcdefghij", 3, 10).is_ok());
        assert!(validate_length("hi", 3, 10).is_err());
        assert!(validate_length("verylongstring", 3, 10).is_err());

        assert_eq!(
            validate_length("ab", 6, 20).unwrap_err(),
            "Must be 6 to 20 characters"
        );
    }

    #[test]
    fn test_length_counts_chars() {
        // 3 chars, 6 bytes
        assert_eq!(char_len("éés"), 3);
        assert!(validate_length("ééé", 3, 3).is_ok());
    }

    #[test]
    fn test_longer_than() {
        assert!(validate_longer_than("12345678901", 10).is_ok());
        assert_eq!(
            validate_longer_than("1234567890", 10).unwrap_err(),
            "Must be longer than 10 characters"
        );
    }

    #[test]
    fn test_charsets() {
        assert!(is_alpha("Jane Doe"));
        assert!(!is_alpha("Jane2"));
        assert!(!is_alpha(""));
        assert!(!is_alpha("Zoë"));

        assert!(is_alnum_space("12 Main St"));
        assert!(!is_alnum_space("12 Main St."));
        assert!(!is_alnum_space(""));
    }

    #[test]
    fn test_digit_patterns() {
        assert!(is_postcode("1234"));
        assert!(!is_postcode("123"));
        assert!(!is_postcode("12a4"));
        assert!(!is_postcode("12345"));
        assert!(!is_postcode(""));
        // Arabic-Indic digits are not accepted
        assert!(!is_postcode("١٢٣٤"));

        assert!(is_phone("12345678"));
        assert!(is_phone("1234567890"));
        assert!(!is_phone("1234567"));
        assert!(!is_phone("12345678901"));
    }

    #[test]
    fn test_require() {
        assert!(require("x", "Address").is_ok());
        assert_eq!(require("", "Address").unwrap_err(), "Address is required");
    }
}
