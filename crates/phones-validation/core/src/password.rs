//! Password validation functions
//!
//! Both checks run on the raw value. Leading and trailing spaces count.

use crate::string::validate_length;

pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 12;

/// Validates password presence and length (8 to 12 characters)
///
/// Length counts Unicode scalar values. A browser's `value.length` counts
/// UTF-16 code units instead, so four emoji are 4 here but 8 in JavaScript.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    validate_length(password, PASSWORD_MIN, PASSWORD_MAX)
}

/// Validates that the confirmation is present and identical to `password`
pub fn validate_confirm_password(confirm: &str, password: &str) -> Result<(), String> {
    if confirm.is_empty() {
        return Err("Confirm your password".to_string());
    }
    if confirm != password {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}
