//! Mounting the GeoJSON/WKT converter form.

use std::cell::Cell;
use std::rc::Rc;

use geotext_core::{ConversionController, Converter, ConverterFields, ConverterOptions, CopyTarget};
use js_sys::Function;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, InputEvent, Window};

use crate::dom::{document, element_by_id, on_event, window, DomBanner, DomClipboard, DomField};

/// `inputType` of the input event a paste itself produces.
const PASTE_INPUT_TYPE: &str = "insertFromPaste";

type DomController = ConversionController<DomField, DomBanner, DomClipboard>;

/// Ids of the converter's page elements.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementIds {
    pub geojson_form: String,
    pub geojson_input: String,
    pub wkt_output: String,
    pub wkt_form: String,
    pub wkt_input: String,
    pub geojson_output: String,
    pub error_banner: String,
    pub copy_wkt: String,
    pub copy_geojson: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            geojson_form: "geojson-form".to_string(),
            geojson_input: "geojson-input".to_string(),
            wkt_output: "wkt-output".to_string(),
            wkt_form: "wkt-form".to_string(),
            wkt_input: "wkt-input".to_string(),
            geojson_output: "geojson-output".to_string(),
            error_banner: "error-banner".to_string(),
            copy_wkt: "copy-wkt".to_string(),
            copy_geojson: "copy-geojson".to_string(),
        }
    }
}

/// Options accepted by `mountConverter`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MountOptions {
    pub converter: ConverterOptions,
    pub ids: ElementIds,
}

/// Wire the converter form on the current page.
///
/// `options` may be `undefined` or an object like
/// `{ converter: { jsonStyle: "compact", pasteDelayMs: 50 }, ids: { wktInput: "..." } }`.
#[wasm_bindgen(js_name = mountConverter)]
pub fn mount_converter(options: JsValue) -> Result<(), JsValue> {
    let options: MountOptions = if options.is_undefined() || options.is_null() {
        MountOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid converter options: {}", e)))?
    };

    let window = window()?;
    let document = document()?;
    let ids = &options.ids;
    let delay_ms = options.converter.paste_delay_ms;

    let geojson_input = element_by_id(&document, &ids.geojson_input)?;
    let wkt_input = element_by_id(&document, &ids.wkt_input)?;

    let fields = ConverterFields {
        geojson_input: DomField::new(geojson_input.clone()),
        wkt_output: DomField::new(element_by_id(&document, &ids.wkt_output)?),
        wkt_input: DomField::new(wkt_input.clone()),
        geojson_output: DomField::new(element_by_id(&document, &ids.geojson_output)?),
    };
    let banner = DomBanner::new(element_by_id(&document, &ids.error_banner)?);
    let controller: Rc<DomController> = Rc::new(ConversionController::new(
        Converter::new().with_options(options.converter.clone()),
        fields,
        banner,
        DomClipboard::new(document.clone()),
    ));

    bind_submit(&document, &ids.geojson_form, &controller, |c| {
        let _ = c.submit_forward();
    })?;
    bind_submit(&document, &ids.wkt_form, &controller, |c| {
        let _ = c.submit_backward();
    })?;

    bind_paste(&window, &geojson_input, delay_ms, {
        let controller = controller.clone();
        move || {
            let _ = controller.submit_forward();
        }
    })?;
    bind_paste(&window, &wkt_input, delay_ms, {
        let controller = controller.clone();
        move || {
            let _ = controller.submit_backward();
        }
    })?;

    bind_copy(&document, &ids.copy_wkt, &controller, CopyTarget::WktOutput)?;
    bind_copy(&document, &ids.copy_geojson, &controller, CopyTarget::GeoJsonOutput)?;

    log::info!("Converter mounted");
    Ok(())
}

fn bind_submit(
    document: &Document,
    form_id: &str,
    controller: &Rc<DomController>,
    submit: fn(&DomController),
) -> Result<(), JsValue> {
    let form = element_by_id(document, form_id)?;
    let controller = controller.clone();
    on_event(&form, "submit", move |event| {
        event.prevent_default();
        submit(&controller);
    })
}

fn bind_copy(
    document: &Document,
    control_id: &str,
    controller: &Rc<DomController>,
    target: CopyTarget,
) -> Result<(), JsValue> {
    let control = element_by_id(document, control_id)?;
    let controller = controller.clone();
    on_event(&control, "click", move |_| {
        // Failures are already logged by the controller.
        let _ = controller.copy_to_clipboard(target);
    })
}

/// Run `convert` once a paste into `field` has settled.
///
/// A newer paste replaces the pending conversion; typing into the field
/// cancels it.
fn bind_paste(
    window: &Window,
    field: &Element,
    delay_ms: u32,
    convert: impl Fn() + 'static,
) -> Result<(), JsValue> {
    let pending: Rc<Cell<Option<i32>>> = Rc::default();

    let task = {
        let pending = pending.clone();
        Closure::<dyn FnMut()>::new(move || {
            pending.set(None);
            convert();
        })
    };

    {
        let window = window.clone();
        let pending = pending.clone();
        on_event(field, "paste", move |_| {
            cancel_pending(&window, &pending);
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                task.as_ref().unchecked_ref::<Function>(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            ) {
                Ok(handle) => pending.set(Some(handle)),
                Err(e) => log::warn!("Could not schedule paste conversion: {:?}", e),
            }
        })?;
    }

    let window = window.clone();
    on_event(field, "input", move |event| {
        let from_paste = event
            .dyn_ref::<InputEvent>()
            .map(|input| input.input_type() == PASTE_INPUT_TYPE)
            .unwrap_or(false);
        if !from_paste {
            cancel_pending(&window, &pending);
        }
    })
}

fn cancel_pending(window: &Window, pending: &Cell<Option<i32>>) {
    if let Some(handle) = pending.take() {
        window.clear_timeout_with_handle(handle);
    }
}
