//! 4Phones Validation WASM
//!
//! WebAssembly bindings for the 4Phones pages: hover effects, the footer year,
//! and client-side validation of the register and contact forms.
//!
//! The host page calls `setup()` once after loading the module:
//!
//! ```javascript
//! import init, { setup } from './phones_validation_wasm.js';
//! await init();
//! setup();
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use phones_validation_core as validation;
use phones_validation_core::{FieldRule, SiteConfig};
use wasm_bindgen::prelude::*;

mod dom;
mod effects;
mod forms;
mod log;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// One-time page setup with the default configuration
#[wasm_bindgen]
pub fn setup() -> Result<(), JsValue> {
    setup_with(SiteConfig::default())
}

/// One-time page setup with overrides
///
/// # Example (JavaScript)
/// ```javascript
/// setupWithConfig({
///     hover: { background: '#222222' },
///     forms: { errorSuffix: '-error' }
/// });
/// ```
#[wasm_bindgen(js_name = setupWithConfig)]
pub fn setup_with_config(config: JsValue) -> Result<(), JsValue> {
    setup_with(parse_config(config)?)
}

fn parse_config(config: JsValue) -> Result<SiteConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(SiteConfig::default());
    }
    let config: SiteConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
    Ok(config)
}

fn setup_with(config: SiteConfig) -> Result<(), JsValue> {
    let document = dom::document()?;
    effects::attach_hover_effects(&document, &config.hover)?;
    effects::set_footer_year(&document, &config.footer);
    forms::bind_on_ready(&document, Rc::new(config))
}

/// Attach hover effects to `.menu-link`, `button` and `.btn` elements
///
/// Returns the number of elements wired.
#[wasm_bindgen(js_name = attachHoverEffects)]
pub fn attach_hover_effects_js() -> Result<u32, JsValue> {
    let document = dom::document()?;
    effects::attach_hover_effects(&document, &SiteConfig::default().hover)
}

/// Put the current year into `#year`; false if the page has no such element
#[wasm_bindgen(js_name = setFooterYear)]
pub fn set_footer_year_js() -> Result<bool, JsValue> {
    let document = dom::document()?;
    Ok(effects::set_footer_year(&document, &SiteConfig::default().footer))
}

fn parse_values(values: JsValue) -> Result<HashMap<String, String>, JsValue> {
    serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))
}

/// Validate register form values without touching the DOM
///
/// # Arguments
/// * `values` - object of field id to string value, e.g. `{"reg-username": "jane2024"}`
///
/// # Returns
/// `{ form, fields: [{ field, passed, message }], passed }`
#[wasm_bindgen(js_name = validateRegisterForm)]
pub fn validate_register_form_js(values: JsValue) -> Result<JsValue, JsValue> {
    let values = parse_values(values)?;
    let result = validation::validate_register_form(&values);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Validate contact form values without touching the DOM
#[wasm_bindgen(js_name = validateContactForm)]
pub fn validate_contact_form_js(values: JsValue) -> Result<JsValue, JsValue> {
    let values = parse_values(values)?;
    let result = validation::validate_contact_form(&values);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Validate a single field value
///
/// # Arguments
/// * `field_id` - Id reported back in the result
/// * `value` - The raw value to validate
/// * `rule` - Tagged rule object
/// * `confirm_against` - Value of the referenced password field, for `confirmPassword`
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateField('reg-firstname', 'Al', {
///     kind: 'generalName', label: 'First name', min: 3, max: 20
/// });
/// // { field: 'reg-firstname', passed: false, message: 'Must be 3 to 20 characters' }
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field_js(
    field_id: &str,
    value: &str,
    rule: JsValue,
    confirm_against: Option<String>,
) -> Result<JsValue, JsValue> {
    let rule: FieldRule = serde_wasm_bindgen::from_value(rule)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse rule: {}", e)))?;

    let mut source = HashMap::new();
    if let (FieldRule::ConfirmPassword { against }, Some(password)) = (&rule, confirm_against) {
        source.insert(against.to_string(), password);
    }

    let result = validation::validate_field(field_id, &rule, value, &source);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}
