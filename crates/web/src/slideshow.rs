//! Arrow-key navigation between the sections of a presentation page.

use geotext_core::slides::CURRENT_CLASS;
use geotext_core::{NavKey, SlideDeck};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, NodeList};

use crate::dom::{document, on_event};

/// Sections exported as slides.
pub const DEFAULT_SLIDE_SELECTOR: &str = ".outline-2";

/// Mark the first slide current and listen for left/right arrow keys.
///
/// Returns the number of slides found.
#[wasm_bindgen(js_name = mountSlideshow)]
pub fn mount_slideshow(selector: Option<String>) -> Result<usize, JsValue> {
    let document = document()?;
    let selector = selector.as_deref().unwrap_or(DEFAULT_SLIDE_SELECTOR);
    let slides = elements(&document.query_selector_all(selector)?);

    let mut deck = SlideDeck::new(slides.len());
    if let Some(first) = deck.current().and_then(|i| slides.get(i)) {
        first.class_list().add_1(CURRENT_CLASS)?;
    }
    let count = deck.len();

    on_event(&document, "keydown", move |event| {
        let Some(key) = event
            .dyn_ref::<KeyboardEvent>()
            .and_then(|k| NavKey::from_key_code(k.key_code()))
        else {
            return;
        };

        if let Some(transition) = deck.navigate(key) {
            toggle_current(&slides[transition.from]);
            toggle_current(&slides[transition.to]);
        }
        event.prevent_default();
    })?;

    log::debug!("Slideshow mounted with {} slides", count);
    Ok(count)
}

fn elements(nodes: &NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn toggle_current(slide: &Element) {
    if let Err(e) = slide.class_list().toggle(CURRENT_CLASS) {
        log::warn!("Could not toggle slide marker: {:?}", e);
    }
}
