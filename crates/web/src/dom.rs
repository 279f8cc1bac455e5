//! DOM implementations of the controller's field, banner and clipboard
//! traits, plus small lookup and event helpers.

use geotext_core::{Clipboard, Error, ErrorBanner, TextField};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlDocument, HtmlInputElement, HtmlTextAreaElement,
    Window,
};

/// Class toggled on the error banner to hide it.
pub const HIDDEN_CLASS: &str = "hidden";

/// Keeps the copy textarea out of view while it is attached.
const OFFSCREEN_STYLE: &str = "position: fixed; top: 0; left: -9999px; opacity: 0;";

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))
}

/// Look up a required element by id.
pub fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))
}

/// Attach a listener for the lifetime of the page.
pub fn on_event(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// A page element holding text: form controls expose `value`, anything
/// else its text content.
#[derive(Debug, Clone)]
pub enum DomField {
    TextArea(HtmlTextAreaElement),
    Input(HtmlInputElement),
    Text(Element),
}

impl DomField {
    pub fn new(element: Element) -> Self {
        match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(textarea) => Self::TextArea(textarea),
            Err(element) => match element.dyn_into::<HtmlInputElement>() {
                Ok(input) => Self::Input(input),
                Err(element) => Self::Text(element),
            },
        }
    }
}

impl TextField for DomField {
    fn value(&self) -> String {
        match self {
            Self::TextArea(textarea) => textarea.value(),
            Self::Input(input) => input.value(),
            Self::Text(element) => element.text_content().unwrap_or_default(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::TextArea(textarea) => textarea.set_value(value),
            Self::Input(input) => input.set_value(value),
            Self::Text(element) => element.set_text_content(Some(value)),
        }
    }
}

/// Error banner shown by removing the `hidden` class.
#[derive(Debug, Clone)]
pub struct DomBanner {
    element: Element,
}

impl DomBanner {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ErrorBanner for DomBanner {
    fn show(&self, message: &str) {
        self.element.set_text_content(Some(message));
        if let Err(e) = self.element.class_list().remove_1(HIDDEN_CLASS) {
            log::warn!("Could not show error banner: {:?}", e);
        }
    }

    fn hide(&self) {
        self.element.set_text_content(None);
        if let Err(e) = self.element.class_list().add_1(HIDDEN_CLASS) {
            log::warn!("Could not hide error banner: {:?}", e);
        }
    }
}

/// Copies through a transient off-screen textarea and `execCommand("copy")`.
#[derive(Debug, Clone)]
pub struct DomClipboard {
    document: Document,
}

impl DomClipboard {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn copy_via_textarea(&self, text: &str) -> Result<bool, JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("No document body"))?;

        let textarea: HtmlTextAreaElement = self.document.create_element("textarea")?.dyn_into()?;
        textarea.set_attribute("style", OFFSCREEN_STYLE)?;
        textarea.set_attribute("readonly", "")?;
        textarea.set_value(text);
        body.append_child(&textarea)?;
        textarea.select();

        let copied = match self.document.dyn_ref::<HtmlDocument>() {
            Some(html) => html.exec_command("copy"),
            None => Err(JsValue::from_str("Document does not support execCommand")),
        };

        textarea.remove();
        copied
    }
}

impl Clipboard for DomClipboard {
    fn copy_text(&self, text: &str) -> geotext_core::Result<()> {
        match self.copy_via_textarea(text) {
            Ok(true) => Ok(()),
            Ok(false) => Err(Error::Clipboard("copy command was refused".to_string())),
            Err(e) => Err(Error::Clipboard(format!("{:?}", e))),
        }
    }
}
