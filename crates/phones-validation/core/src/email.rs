//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld, no whitespace and no second '@' in any segment
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validates basic email shape
///
/// Deliberately loose: one non-whitespace segment, a literal `@`, then a
/// non-whitespace segment containing a `.`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates a trimmed email value, required first
pub fn validate_email(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Email is required".to_string());
    }
    if !is_valid_email(value) {
        return Err("Enter a valid email".to_string());
    }
    Ok(())
}
