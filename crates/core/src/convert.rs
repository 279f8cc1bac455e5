//! Stateless GeoJSON ⇄ WKT conversion.
//!
//! [`Converter`] is the pure half of the form controller: it never touches
//! a field. The CLI uses it directly; the controller layers the field
//! updates and the error banner on top.

use geojson::GeoJson;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{GeometryCodec, WellKnown};
use crate::error::{Error, Result};
use crate::json::{encode_json, geometry_to_json, integralize, parse_json};
use crate::types::{Format, JsonStyle, StructuredDocument};

/// Tag wrapped around the converted items of a feature collection.
pub const COLLECTION_WRAPPER: &str = "GEOMETRYCOLLECTION";

/// Default wait between a paste event and the conversion it triggers.
pub const DEFAULT_PASTE_DELAY_MS: u32 = 50;

/// Converter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConverterOptions {
    /// Layout of GeoJSON produced from WKT.
    pub json_style: JsonStyle,
    /// Milliseconds to let a paste settle before converting.
    pub paste_delay_ms: u32,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            json_style: JsonStyle::Pretty,
            paste_delay_ms: DEFAULT_PASTE_DELAY_MS,
        }
    }
}

impl ConverterOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the GeoJSON output layout.
    pub fn with_json_style(mut self, style: JsonStyle) -> Self {
        self.json_style = style;
        self
    }

    /// Set the paste settle delay.
    pub fn with_paste_delay_ms(mut self, delay_ms: u32) -> Self {
        self.paste_delay_ms = delay_ms;
        self
    }
}

/// Converts text between GeoJSON and WKT through a [`GeometryCodec`].
#[derive(Debug, Clone, Default)]
pub struct Converter<C = WellKnown> {
    codec: C,
    options: ConverterOptions,
}

impl Converter<WellKnown> {
    /// Create a converter using the default codec.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: GeometryCodec> Converter<C> {
    /// Create a converter around a specific codec.
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            options: ConverterOptions::default(),
        }
    }

    /// Replace the converter options.
    pub fn with_options(mut self, options: ConverterOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Parse raw GeoJSON input as JSON. Only syntax is checked here.
    pub fn parse_geojson(&self, raw: &str) -> Result<Value> {
        parse_json(raw)
    }

    /// Two-space indented rendering of parsed input, for echoing back to
    /// the user. Integral numbers are written without a fraction.
    pub fn pretty_geojson(&self, value: &Value) -> Result<String> {
        let mut canonical = value.clone();
        integralize(&mut canonical);
        encode_json(&canonical, JsonStyle::Pretty)
    }

    /// Convert a parsed GeoJSON value to WKT.
    ///
    /// Feature collections are converted feature by feature and wrapped as
    /// `GEOMETRYCOLLECTION (a,b,...)`. Any shape the codec rejects yields
    /// [`Error::InvalidDocument`]; the underlying cause is only logged.
    pub fn document_to_wkt(&self, value: Value) -> Result<String> {
        let invalid = |cause: &dyn std::fmt::Display| {
            log::debug!("GeoJSON rejected: {}", cause);
            Error::InvalidDocument {
                format: Format::GeoJson,
            }
        };

        let document = GeoJson::from_json_value(value).map_err(|e| invalid(&e))?;

        match StructuredDocument::from(document) {
            StructuredDocument::Collection(items) => {
                let parts = items
                    .iter()
                    .map(|item| self.codec.stringify(item))
                    .collect::<Result<Vec<_>>>()
                    .map_err(|e| invalid(&e))?;
                Ok(format!("{} ({})", COLLECTION_WRAPPER, parts.join(",")))
            }
            StructuredDocument::Single(document) => {
                self.codec.stringify(&document).map_err(|e| invalid(&e))
            }
        }
    }

    /// Convert raw GeoJSON text to WKT.
    pub fn geojson_to_wkt(&self, raw: &str) -> Result<String> {
        let value = self.parse_geojson(raw)?;
        self.document_to_wkt(value)
    }

    /// Convert raw WKT text to GeoJSON in the configured layout.
    ///
    /// Surrounding whitespace is ignored.
    pub fn wkt_to_geojson(&self, raw: &str) -> Result<String> {
        let geometry = self.codec.parse(raw.trim())?;
        let value = geometry_to_json(&geometry)?;
        encode_json(&value, self.options.json_style)
    }

    /// Convert raw text from `from` into the other format.
    pub fn convert(&self, from: Format, raw: &str) -> Result<String> {
        match from {
            Format::GeoJson => self.geojson_to_wkt(raw),
            Format::Wkt => self.wkt_to_geojson(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> Converter {
        Converter::new().with_options(ConverterOptions::new().with_json_style(JsonStyle::Compact))
    }

    #[test]
    fn test_point_to_wkt() {
        let converter = Converter::new();
        assert_eq!(
            converter
                .geojson_to_wkt(r#"{"type":"Point","coordinates":[1,2]}"#)
                .unwrap(),
            "POINT (1 2)"
        );
    }

    #[test]
    fn test_wkt_to_point() {
        let text = compact().wkt_to_geojson("POINT (1 2)").unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "Point", "coordinates": [1, 2]})
        );
        assert!(!text.contains('\n'));
        assert!(!text.contains("1.0"));
    }

    #[test]
    fn test_wkt_to_geojson_pretty_by_default() {
        let text = Converter::new().wkt_to_geojson("POINT (1 2)").unwrap();
        assert!(text.contains("\n  \""));
    }

    #[test]
    fn test_feature_collection_wraps_items_without_spaces() {
        let converter = Converter::new();
        let wkt = converter
            .geojson_to_wkt(
                r#"{"type":"FeatureCollection","features":[
                    {"type":"Feature","properties":{},
                     "geometry":{"type":"Point","coordinates":[1,2]}},
                    {"type":"Feature","properties":{},
                     "geometry":{"type":"LineString","coordinates":[[1,2],[3,4]]}}
                ]}"#,
            )
            .unwrap();
        assert_eq!(wkt, "GEOMETRYCOLLECTION (POINT (1 2),LINESTRING (1 2, 3 4))");
    }

    #[test]
    fn test_empty_feature_collection() {
        let wkt = Converter::new()
            .geojson_to_wkt(r#"{"type":"FeatureCollection","features":[]}"#)
            .unwrap();
        assert_eq!(wkt, "GEOMETRYCOLLECTION ()");
    }

    #[test]
    fn test_collection_with_bad_feature_is_invalid_document() {
        let err = Converter::new()
            .geojson_to_wkt(
                r#"{"type":"FeatureCollection","features":[
                    {"type":"Feature","properties":{},"geometry":null}
                ]}"#,
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid GeoJSON: Requires a valid input object.");
    }

    #[test]
    fn test_syntax_error_keeps_parser_message() {
        let err = Converter::new().geojson_to_wkt("{not json").unwrap_err();
        assert!(matches!(err, Error::InvalidSyntax { format: Format::GeoJson, .. }));
        assert!(err.to_string().starts_with("Invalid GeoJSON: "));
        assert_ne!(err.to_string(), "Invalid GeoJSON: Requires a valid input object.");
    }

    #[test]
    fn test_valid_json_but_not_geojson() {
        let err = Converter::new()
            .geojson_to_wkt(r#"{"hello":"world"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid GeoJSON: Requires a valid input object.");
    }

    #[test]
    fn test_invalid_wkt() {
        let err = Converter::new().wkt_to_geojson("POINTY (1 2)").unwrap_err();
        assert!(err.to_string().starts_with("Invalid WKT: "));
    }

    #[test]
    fn test_round_trip_is_structurally_stable() {
        let converter = compact();
        let wkt = "POLYGON ((30 10, 40 40, 20 40, 10 20, 30 10))";
        let geojson = converter.wkt_to_geojson(wkt).unwrap();
        let back = converter.geojson_to_wkt(&geojson).unwrap();
        let again = converter.wkt_to_geojson(&back).unwrap();

        let first: Value = serde_json::from_str(&geojson).unwrap();
        let second: Value = serde_json::from_str(&again).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_wkt_round_trips_through_geojson() {
        let converter = compact();
        for wkt in ["LINESTRING EMPTY", "POLYGON EMPTY", "GEOMETRYCOLLECTION EMPTY"] {
            let geojson = converter.wkt_to_geojson(wkt).unwrap();
            assert_eq!(converter.geojson_to_wkt(&geojson).unwrap(), wkt);
        }
    }

    #[test]
    fn test_three_dimensional_point_round_trips() {
        let converter = compact();
        let wkt = converter
            .geojson_to_wkt(r#"{"type":"Point","coordinates":[1,2,3]}"#)
            .unwrap();
        assert_eq!(wkt, "POINT Z (1 2 3)");

        let geojson = converter.wkt_to_geojson(&wkt).unwrap();
        let value: Value = serde_json::from_str(&geojson).unwrap();
        assert_eq!(value["coordinates"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_convert_dispatches_on_format() {
        let converter = compact();
        assert_eq!(
            converter
                .convert(Format::GeoJson, r#"{"type":"Point","coordinates":[5,6]}"#)
                .unwrap(),
            "POINT (5 6)"
        );
        assert!(converter.convert(Format::Wkt, "POINT (5 6)").is_ok());
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: ConverterOptions = serde_json::from_str(r#"{"jsonStyle":"compact"}"#).unwrap();
        assert_eq!(options.json_style, JsonStyle::Compact);
        assert_eq!(options.paste_delay_ms, DEFAULT_PASTE_DELAY_MS);
    }
}
