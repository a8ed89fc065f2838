//! Hover effects and footer year, bound to the live document

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement};

use phones_validation_core::{current_year_text, FooterConfig, HoverConfig, HoverEffect};

use crate::dom::ElementStyle;
use crate::log;

/// Attaches a hover handler pair to every element matching the configured selectors
///
/// The selectors are queried as one group, so an element matching several of
/// them still gets a single pair. Returns the number of elements wired.
pub fn attach_hover_effects(document: &Document, config: &HoverConfig) -> Result<u32, JsValue> {
    if config.selectors.is_empty() {
        return Ok(0);
    }

    let nodes = document.query_selector_all(&config.selectors.join(", "))?;
    let mut attached = 0;

    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        attach_one(element, HoverEffect::new(config.palette()))?;
        attached += 1;
    }

    log::debug(&format!("Hover effects attached to {} elements", attached));
    Ok(attached)
}

fn attach_one(element: HtmlElement, effect: HoverEffect) -> Result<(), JsValue> {
    let state = Rc::new(RefCell::new(effect));

    let on_enter = {
        let state = Rc::clone(&state);
        let element = element.clone();
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            state.borrow_mut().enter(&mut ElementStyle(&element));
        })
    };

    let on_leave = {
        let element = element.clone();
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            state.borrow_mut().leave(&mut ElementStyle(&element));
        })
    };

    element.add_event_listener_with_callback("mouseover", on_enter.as_ref().unchecked_ref())?;
    element.add_event_listener_with_callback("mouseout", on_leave.as_ref().unchecked_ref())?;

    // Handlers live as long as the page
    on_enter.forget();
    on_leave.forget();
    Ok(())
}

/// Writes the current year into the footer element, if the page has one
pub fn set_footer_year(document: &Document, config: &FooterConfig) -> bool {
    match document.get_element_by_id(&config.year_element_id) {
        Some(element) => {
            element.set_text_content(Some(&current_year_text()));
            true
        }
        None => {
            log::debug(&format!("No #{} element for the footer year", config.year_element_id));
            false
        }
    }
}
