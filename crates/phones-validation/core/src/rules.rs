//! Field rule table
//!
//! Every form field maps to exactly one `FieldRule`. A rule runs its checks in
//! order and stops at the first failure, so a field reports at most one message.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::email::validate_email;
use crate::form::FormSource;
use crate::password::{validate_confirm_password, validate_password};
use crate::string::{
    is_alnum_space, is_alpha, is_phone, is_postcode, require, validate_length,
    validate_longer_than,
};

/// Default bounds for a general name field
pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 50;

/// Rule descriptor for a single field
///
/// Deserializes from a tagged object, e.g.
/// `{"kind": "generalName", "label": "First name", "min": 3, "max": 20}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldRule {
    /// Required, 6 to 20 chars, letters digits and spaces
    Username,
    /// Required, `min` to `max` chars, letters and spaces
    GeneralName {
        label: Cow<'static, str>,
        #[serde(default = "default_name_min")]
        min: usize,
        #[serde(default = "default_name_max")]
        max: usize,
    },
    Email,
    /// Required, 8 to 12 chars, untrimmed
    Password,
    /// Must equal the raw value of the field `against`
    ConfirmPassword { against: Cow<'static, str> },
    /// Required, 3 to 50 chars, letters digits and spaces
    AddressLike { label: Cow<'static, str> },
    /// Exactly 4 digits, checked in one test
    Postcode,
    /// 8 to 10 digits, checked in one test
    Phone,
    /// Required, 6 to 20 chars, letters and spaces
    ContactName,
    /// More than 10 chars after trimming
    ContactMessage,
    /// A select or radio group that must carry a value
    Selection { message: Cow<'static, str> },
}

fn default_name_min() -> usize {
    NAME_MIN
}

fn default_name_max() -> usize {
    NAME_MAX
}

impl FieldRule {
    /// General name rule with the default 3 to 50 bounds
    pub fn general_name(label: &'static str) -> Self {
        FieldRule::GeneralName {
            label: Cow::Borrowed(label),
            min: NAME_MIN,
            max: NAME_MAX,
        }
    }

    /// Runs the rule against a raw field value
    ///
    /// `source` is only consulted by rules that reference another field.
    pub fn check<S>(&self, raw: &str, source: &S) -> Result<(), String>
    where
        S: FormSource + ?Sized,
    {
        let trimmed = raw.trim();

        match self {
            FieldRule::Username => {
                require(trimmed, "Username")?;
                validate_length(trimmed, 6, 20)?;
                charset(is_alnum_space(trimmed), "Letters and numbers only")
            }
            FieldRule::GeneralName { label, min, max } => {
                require(trimmed, label)?;
                validate_length(trimmed, *min, *max)?;
                charset(is_alpha(trimmed), "Letters and spaces only")
            }
            FieldRule::Email => validate_email(trimmed),
            FieldRule::Password => validate_password(raw),
            FieldRule::ConfirmPassword { against } => {
                let base = source.value(against).unwrap_or_default();
                validate_confirm_password(raw, &base)
            }
            FieldRule::AddressLike { label } => {
                require(trimmed, label)?;
                validate_length(trimmed, 3, 50)?;
                charset(is_alnum_space(trimmed), "Letters, numbers and spaces only")
            }
            FieldRule::Postcode => charset(is_postcode(trimmed), "Must be exactly 4 digits"),
            FieldRule::Phone => charset(is_phone(trimmed), "Must be 8 to 10 digits"),
            FieldRule::ContactName => {
                require(trimmed, "Name")?;
                validate_length(trimmed, 6, 20)?;
                charset(is_alpha(trimmed), "Letters and spaces only")
            }
            FieldRule::ContactMessage => validate_longer_than(trimmed, 10),
            FieldRule::Selection { message } => {
                if raw.is_empty() {
                    Err(message.to_string())
                } else {
                    Ok(())
                }
            }
        }
    }
}

fn charset(ok: bool, message: &str) -> Result<(), String> {
    if ok {
        Ok(())
    } else {
        Err(message.to_string())
    }
}
