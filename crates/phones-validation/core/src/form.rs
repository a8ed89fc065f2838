//! Form orchestration
//!
//! A form is an ordered table of `(field id, FieldRule)`. Validation always
//! evaluates every field, then the result is written back through an
//! `ErrorSink` so that stale messages never survive a run.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::rules::FieldRule;

/// Read access to the current field values of a form
pub trait FormSource {
    /// Current raw value of the field, or `None` if the form has no such field
    fn value(&self, field_id: &str) -> Option<String>;
}

impl FormSource for HashMap<String, String> {
    fn value(&self, field_id: &str) -> Option<String> {
        self.get(field_id).cloned()
    }
}

impl FormSource for BTreeMap<String, String> {
    fn value(&self, field_id: &str) -> Option<String> {
        self.get(field_id).cloned()
    }
}

/// Somewhere to show a field's message
///
/// An empty message clears the display.
pub trait ErrorSink {
    fn set_error(&mut self, field_id: &str, message: &str);
}

impl ErrorSink for HashMap<String, String> {
    fn set_error(&mut self, field_id: &str, message: &str) {
        self.insert(field_id.to_string(), message.to_string());
    }
}

/// Outcome for one field
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldResult {
    pub field: String,
    pub passed: bool,
    /// Empty when passing
    pub message: String,
}

impl FieldResult {
    fn from_check(field: &str, outcome: Result<(), String>) -> Self {
        match outcome {
            Ok(()) => Self {
                field: field.to_string(),
                passed: true,
                message: String::new(),
            },
            Err(message) => Self {
                field: field.to_string(),
                passed: false,
                message,
            },
        }
    }
}

/// Outcome for a whole form
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FormResult {
    pub form: String,
    pub fields: Vec<FieldResult>,
    passed: bool,
}

impl FormResult {
    pub fn new(form: impl Into<String>, fields: Vec<FieldResult>) -> Self {
        let passed = fields.iter().all(|f| f.passed);
        Self {
            form: form.into(),
            fields,
            passed,
        }
    }

    /// True only if every field passed
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Message for a field, if the form has it
    pub fn message(&self, field_id: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.field == field_id)
            .map(|f| f.message.as_str())
    }

    /// Fields that failed, in form order
    pub fn failures(&self) -> impl Iterator<Item = &FieldResult> {
        self.fields.iter().filter(|f| !f.passed)
    }

    /// Writes every field's message, passing fields included
    pub fn display<E: ErrorSink + ?Sized>(&self, sink: &mut E) {
        for field in &self.fields {
            sink.set_error(&field.field, &field.message);
        }
    }
}

/// Static description of a form
#[derive(Debug)]
pub struct FormSpec {
    pub id: &'static str,
    pub fields: &'static [(&'static str, FieldRule)],
}

impl FormSpec {
    pub fn field_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(id, _)| *id)
    }

    pub fn rule(&self, field_id: &str) -> Option<&FieldRule> {
        self.fields
            .iter()
            .find(|(id, _)| *id == field_id)
            .map(|(_, rule)| rule)
    }
}

pub const REGISTER_PASSWORD_FIELD: &str = "reg-password";

pub static REGISTER_FORM: FormSpec = FormSpec {
    id: "register-form",
    fields: &[
        (
            "reg-name",
            FieldRule::GeneralName {
                label: Cow::Borrowed("Name"),
                min: 3,
                max: 50,
            },
        ),
        ("reg-username", FieldRule::Username),
        ("reg-email", FieldRule::Email),
        (REGISTER_PASSWORD_FIELD, FieldRule::Password),
        (
            "reg-confirm",
            FieldRule::ConfirmPassword {
                against: Cow::Borrowed(REGISTER_PASSWORD_FIELD),
            },
        ),
        (
            "reg-firstname",
            FieldRule::GeneralName {
                label: Cow::Borrowed("First name"),
                min: 3,
                max: 20,
            },
        ),
        (
            "reg-surname",
            FieldRule::GeneralName {
                label: Cow::Borrowed("Surname"),
                min: 3,
                max: 20,
            },
        ),
        (
            "reg-address",
            FieldRule::AddressLike {
                label: Cow::Borrowed("Address"),
            },
        ),
        (
            "reg-suburb",
            FieldRule::AddressLike {
                label: Cow::Borrowed("Suburb"),
            },
        ),
        ("reg-postcode", FieldRule::Postcode),
        ("reg-phone", FieldRule::Phone),
        (
            "reg-gender",
            FieldRule::Selection {
                message: Cow::Borrowed("Select a gender"),
            },
        ),
        (
            "reg-state",
            FieldRule::Selection {
                message: Cow::Borrowed("Select a state"),
            },
        ),
    ],
};

pub static CONTACT_FORM: FormSpec = FormSpec {
    id: "contact-form",
    fields: &[
        ("con-name", FieldRule::ContactName),
        ("con-email", FieldRule::Email),
        ("con-phone", FieldRule::Phone),
        ("con-message", FieldRule::ContactMessage),
    ],
};

/// Validates one value against one rule
pub fn validate_field<S>(field_id: &str, rule: &FieldRule, raw: &str, source: &S) -> FieldResult
where
    S: FormSource + ?Sized,
{
    FieldResult::from_check(field_id, rule.check(raw, source))
}

/// Validates every field of `spec`; absent fields read as empty
pub fn validate_form<S>(spec: &FormSpec, source: &S) -> FormResult
where
    S: FormSource + ?Sized,
{
    let fields = spec
        .fields
        .iter()
        .map(|(id, rule)| {
            let raw = source.value(id).unwrap_or_default();
            validate_field(id, rule, &raw, source)
        })
        .collect();

    let result = FormResult::new(spec.id, fields);
    debug!(
        form = spec.id,
        passed = result.passed(),
        failures = result.failures().count(),
        "form validated"
    );
    result
}

/// Validates, displays every field's message and returns the result
pub fn run_form<S, E>(spec: &FormSpec, source: &S, sink: &mut E) -> FormResult
where
    S: FormSource + ?Sized,
    E: ErrorSink + ?Sized,
{
    let result = validate_form(spec, source);
    result.display(sink);
    result
}

pub fn validate_register_form<S: FormSource + ?Sized>(source: &S) -> FormResult {
    validate_form(&REGISTER_FORM, source)
}

pub fn validate_contact_form<S: FormSource + ?Sized>(source: &S) -> FormResult {
    validate_form(&CONTACT_FORM, source)
}
