// Register and contact form behaviour, end to end through the rule table.

use std::collections::HashMap;

use phones_validation_core::{
    run_form, validate_contact_form, validate_register_form, ErrorSink, FieldRule, FormSource,
    CONTACT_FORM, REGISTER_FORM,
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// Records every write, in order
#[derive(Default)]
struct RecordingSink {
    writes: Vec<(String, String)>,
}

impl RecordingSink {
    fn last(&self, field_id: &str) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|(id, _)| id == field_id)
            .map(|(_, msg)| msg.as_str())
    }
}

impl ErrorSink for RecordingSink {
    fn set_error(&mut self, field_id: &str, message: &str) {
        self.writes.push((field_id.to_string(), message.to_string()));
    }
}

fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[fixture]
fn valid_register() -> HashMap<String, String> {
    form(&[
        ("reg-name", "Jane Citizen"),
        ("reg-username", "jane2024"),
        ("reg-email", "jane@example.com"),
        ("reg-password", "Abcdef12"),
        ("reg-confirm", "Abcdef12"),
        ("reg-firstname", "Jane"),
        ("reg-surname", "Citizen"),
        ("reg-address", "12 High Street"),
        ("reg-suburb", "Hawthorn"),
        ("reg-postcode", "3122"),
        ("reg-phone", "0412345678"),
        ("reg-gender", "female"),
        ("reg-state", "VIC"),
    ])
}

#[fixture]
fn valid_contact() -> HashMap<String, String> {
    form(&[
        ("con-name", "Alexander"),
        ("con-email", "a@b.com"),
        ("con-phone", "12345678"),
        ("con-message", "hello there"),
    ])
}

#[rstest]
fn register_all_valid_passes(valid_register: HashMap<String, String>) {
    let mut sink = RecordingSink::default();
    let result = run_form(&REGISTER_FORM, &valid_register, &mut sink);

    assert!(result.passed());
    assert_eq!(sink.writes.len(), 13);
    assert!(sink.writes.iter().all(|(_, msg)| msg.is_empty()));
}

#[rstest]
fn register_short_username_only_flags_username(mut valid_register: HashMap<String, String>) {
    valid_register.insert("reg-username".into(), "ab".into());
    let mut sink = RecordingSink::default();
    let result = run_form(&REGISTER_FORM, &valid_register, &mut sink);

    assert!(!result.passed());
    let failures: Vec<_> = result
        .failures()
        .map(|f| (f.field.as_str(), f.message.as_str()))
        .collect();
    assert_eq!(failures, vec![("reg-username", "Must be 6 to 20 characters")]);
    assert_eq!(sink.last("reg-username"), Some("Must be 6 to 20 characters"));
    assert_eq!(sink.last("reg-email"), Some(""));
}

#[rstest]
#[case("reg-gender", "Select a gender")]
#[case("reg-state", "Select a state")]
fn register_requires_selections(
    mut valid_register: HashMap<String, String>,
    #[case] field: &str,
    #[case] message: &str,
) {
    valid_register.insert(field.into(), String::new());
    let result = validate_register_form(&valid_register);

    assert!(!result.passed());
    assert_eq!(result.message(field), Some(message));
    assert_eq!(result.failures().count(), 1);
}

#[rstest]
fn register_missing_selection_field_fails(mut valid_register: HashMap<String, String>) {
    valid_register.remove("reg-state");
    let result = validate_register_form(&valid_register);
    assert_eq!(result.message("reg-state"), Some("Select a state"));
}

#[rstest]
fn register_evaluates_every_field(valid_register: HashMap<String, String>) {
    let mut broken = valid_register;
    for value in broken.values_mut() {
        value.clear();
    }
    let result = validate_register_form(&broken);

    assert_eq!(result.fields.len(), 13);
    assert_eq!(result.failures().count(), 13);
    assert_eq!(result.message("reg-name"), Some("Name is required"));
    assert_eq!(result.message("reg-firstname"), Some("First name is required"));
    assert_eq!(result.message("reg-surname"), Some("Surname is required"));
    assert_eq!(result.message("reg-address"), Some("Address is required"));
    assert_eq!(result.message("reg-suburb"), Some("Suburb is required"));
    assert_eq!(result.message("reg-password"), Some("Password is required"));
    assert_eq!(result.message("reg-confirm"), Some("Confirm your password"));
    assert_eq!(result.message("reg-postcode"), Some("Must be exactly 4 digits"));
    assert_eq!(result.message("reg-phone"), Some("Must be 8 to 10 digits"));
}

#[rstest]
#[case("Abcdef12", true)]
#[case("Abcdef13", false)]
fn register_confirm_password(
    mut valid_register: HashMap<String, String>,
    #[case] confirm: &str,
    #[case] passes: bool,
) {
    valid_register.insert("reg-confirm".into(), confirm.into());
    let result = validate_register_form(&valid_register);

    assert_eq!(result.passed(), passes);
    let expected = if passes { "" } else { "Passwords do not match" };
    assert_eq!(result.message("reg-confirm"), Some(expected));
}

#[rstest]
#[case("1234", true)]
#[case("123", false)]
#[case("12a4", false)]
#[case("12345", false)]
fn postcode(#[case] value: &str, #[case] passes: bool) {
    let source: HashMap<String, String> = HashMap::new();
    assert_eq!(FieldRule::Postcode.check(value, &source).is_ok(), passes);
}

#[rstest]
#[case("12345678", true)]
#[case("1234567", false)]
#[case("12345678901", false)]
fn phone(#[case] value: &str, #[case] passes: bool) {
    let source: HashMap<String, String> = HashMap::new();
    assert_eq!(FieldRule::Phone.check(value, &source).is_ok(), passes);
}

#[rstest]
#[case("1234567890", false)]
#[case("12345678901", true)]
fn contact_message_must_exceed_ten(
    mut valid_contact: HashMap<String, String>,
    #[case] message: &str,
    #[case] passes: bool,
) {
    valid_contact.insert("con-message".into(), message.into());
    let result = validate_contact_form(&valid_contact);

    assert_eq!(result.passed(), passes);
    if !passes {
        assert_eq!(
            result.message("con-message"),
            Some("Must be longer than 10 characters")
        );
    }
}

#[rstest]
fn contact_short_name_fails(mut valid_contact: HashMap<String, String>) {
    valid_contact.insert("con-name".into(), "Al".into());
    let mut sink = RecordingSink::default();
    let result = run_form(&CONTACT_FORM, &valid_contact, &mut sink);

    assert!(!result.passed());
    assert_eq!(sink.last("con-name"), Some("Must be 6 to 20 characters"));
    assert_eq!(sink.last("con-email"), Some(""));
    assert_eq!(sink.last("con-phone"), Some(""));
    assert_eq!(sink.last("con-message"), Some(""));
}

#[rstest]
#[case(FieldRule::Username, "abcde", "abcdef", "abcdefghijklmnopqrstu")]
#[case(FieldRule::ContactName, "Alexa", "Alexis", "Alexandra Maximiliana")]
#[case(FieldRule::general_name("Name"), "Al", "Ali", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")]
#[case(FieldRule::AddressLike { label: "Address".into() }, "ab", "abc", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")]
fn length_bounds(
    #[case] rule: FieldRule,
    #[case] short: &str,
    #[case] ok: &str,
    #[case] long: &str,
) {
    let source: HashMap<String, String> = HashMap::new();
    let short_err = rule.check(short, &source).unwrap_err();
    let long_err = rule.check(long, &source).unwrap_err();

    assert!(short_err.starts_with("Must be"));
    assert_eq!(short_err, long_err);
    assert!(rule.check(ok, &source).is_ok());
}

#[rstest]
#[case(FieldRule::Username, "abcdef!", "Letters and numbers only")]
#[case(FieldRule::ContactName, "Alexis 2", "Letters and spaces only")]
#[case(FieldRule::general_name("Name"), "J@ne", "Letters and spaces only")]
#[case(FieldRule::AddressLike { label: "Suburb".into() }, "St. Kilda", "Letters, numbers and spaces only")]
fn charset_violations(#[case] rule: FieldRule, #[case] value: &str, #[case] message: &str) {
    let source: HashMap<String, String> = HashMap::new();
    assert_eq!(rule.check(value, &source).unwrap_err(), message);
}

#[rstest]
fn validation_is_idempotent(mut valid_register: HashMap<String, String>) {
    valid_register.insert("reg-email".into(), "not-an-email".into());
    let first = validate_register_form(&valid_register);
    let second = validate_register_form(&valid_register);
    assert_eq!(first, second);
}

struct Lookup<'a>(&'a [(&'a str, &'a str)]);

impl FormSource for Lookup<'_> {
    fn value(&self, field_id: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, _)| *k == field_id)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn custom_source_is_accepted() {
    let source = Lookup(&[
        ("con-name", "Alexander"),
        ("con-email", "a@b.com"),
        ("con-phone", "1234567890"),
        ("con-message", "a message long enough"),
    ]);
    assert!(validate_contact_form(&source).passed());
}
