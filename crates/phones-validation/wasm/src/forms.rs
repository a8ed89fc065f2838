//! Submit gating for the register and contact forms

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement};

use phones_validation_core::{run_form, FormSpec, SiteConfig, CONTACT_FORM, REGISTER_FORM};

use crate::dom::{DocumentErrorSink, FormElementSource};
use crate::log;

/// Binds the forms once the document is parsed
///
/// If parsing already finished, binds immediately instead of waiting for an
/// event that will never fire.
pub fn bind_on_ready(document: &Document, config: Rc<SiteConfig>) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        return bind_forms(document, &config);
    }

    let doc = document.clone();
    let on_ready: Closure<dyn FnMut(Event)> = Closure::once(move |_: Event| {
        if let Err(err) = bind_forms(&doc, &config) {
            log::warn_value("Failed to bind forms:", &err);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

fn bind_forms(document: &Document, config: &Rc<SiteConfig>) -> Result<(), JsValue> {
    bind_form(document, &config.forms.register_form_id, &REGISTER_FORM, Rc::clone(config))?;
    bind_form(document, &config.forms.contact_form_id, &CONTACT_FORM, Rc::clone(config))?;
    Ok(())
}

/// Attaches the submit handler for `spec` to the form with id `form_id`
///
/// Returns false when the page has no such form.
fn bind_form(
    document: &Document,
    form_id: &str,
    spec: &'static FormSpec,
    config: Rc<SiteConfig>,
) -> Result<bool, JsValue> {
    let Some(element) = document.get_element_by_id(form_id) else {
        log::debug(&format!("No #{} on this page", form_id));
        return Ok(false);
    };
    let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
        log::warn(&format!("#{} is not a form, submit validation not bound", form_id));
        return Ok(false);
    };

    let doc = document.clone();
    let source = FormElementSource::new(form.clone());
    let form_label = form_id.to_string();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let mut sink = DocumentErrorSink::new(&doc, &config.forms.error_suffix);
        let result = run_form(spec, &source, &mut sink);
        if !result.passed() {
            log::debug(&format!(
                "#{}: {} invalid field(s), submission cancelled",
                form_label,
                result.failures().count()
            ));
            event.prevent_default();
        }
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    log::debug(&format!("Submit validation bound to #{}", form_id));
    Ok(true)
}
