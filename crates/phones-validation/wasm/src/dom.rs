//! web-sys implementations of the core traits

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, HtmlFormElement};

use phones_validation_core::{ErrorSink, FormSource, StyleTarget};

use crate::log;

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available"))
}

/// Reads `form[field_id].value`
///
/// Named lookup on the form resolves inputs, selects, textareas and radio
/// groups alike; a radio group yields the checked option's value.
pub struct FormElementSource {
    form: HtmlFormElement,
}

impl FormElementSource {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }
}

impl FormSource for FormElementSource {
    fn value(&self, field_id: &str) -> Option<String> {
        let control = Reflect::get(self.form.as_ref(), &JsValue::from_str(field_id)).ok()?;
        if control.is_undefined() || control.is_null() {
            return None;
        }
        Reflect::get(&control, &JsValue::from_str("value"))
            .ok()?
            .as_string()
    }
}

/// Writes messages into `#{field_id}{suffix}` elements, skipping missing ones
pub struct DocumentErrorSink<'a> {
    document: &'a Document,
    suffix: &'a str,
}

impl<'a> DocumentErrorSink<'a> {
    pub fn new(document: &'a Document, suffix: &'a str) -> Self {
        Self { document, suffix }
    }
}

impl ErrorSink for DocumentErrorSink<'_> {
    fn set_error(&mut self, field_id: &str, message: &str) {
        let id = format!("{}{}", field_id, self.suffix);
        if let Some(element) = self.document.get_element_by_id(&id) {
            element.set_text_content(Some(message));
        }
    }
}

/// Inline style of an element
pub struct ElementStyle<'a>(pub &'a HtmlElement);

impl StyleTarget for ElementStyle<'_> {
    fn background(&self) -> String {
        self.0
            .style()
            .get_property_value("background-color")
            .unwrap_or_default()
    }

    fn color(&self) -> String {
        self.0.style().get_property_value("color").unwrap_or_default()
    }

    // An empty value removes the inline property
    fn set_background(&mut self, value: &str) {
        set_inline(self.0, "background-color", value);
    }

    fn set_color(&mut self, value: &str) {
        set_inline(self.0, "color", value);
    }
}

fn set_inline(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn_value(&format!("Failed to set {} to '{}':", property, value), &err);
    }
}
