//! Browser bindings for the GeoJSON/WKT converter.
//!
//! Exposes the converter form controller, arrow-key slide navigation and
//! the presentation theme to JavaScript.

use std::str::FromStr;

use geotext_core::{Converter, ConverterOptions, JsonStyle, Theme};
use log::LevelFilter;
use wasm_bindgen::prelude::*;

mod console;
pub mod converter;
pub mod dom;
pub mod slideshow;

pub use converter::{mount_converter, ElementIds, MountOptions};
pub use slideshow::mount_slideshow;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    console::init(LevelFilter::Info);
}

/// Change the console log level ("error", "warn", "info", "debug", "trace", "off").
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = LevelFilter::from_str(level)
        .map_err(|_| JsValue::from_str(&format!("Unknown log level: {}", level)))?;
    console::init(filter);
    Ok(())
}

/// Convert GeoJSON text to WKT.
///
/// Throws the same message the converter form would show.
#[wasm_bindgen(js_name = geojsonToWkt)]
pub fn geojson_to_wkt(text: &str) -> Result<String, JsValue> {
    Converter::new()
        .geojson_to_wkt(text)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert WKT text to GeoJSON, pretty-printed unless `compact` is set.
#[wasm_bindgen(js_name = wktToGeojson)]
pub fn wkt_to_geojson(text: &str, compact: Option<bool>) -> Result<String, JsValue> {
    let style = if compact.unwrap_or(false) {
        JsonStyle::Compact
    } else {
        JsonStyle::Pretty
    };

    Converter::new()
        .with_options(ConverterOptions::new().with_json_style(style))
        .wkt_to_geojson(text)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The presentation theme as a plain JavaScript object.
#[wasm_bindgen(js_name = presentationTheme)]
pub fn presentation_theme() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&Theme::default())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
