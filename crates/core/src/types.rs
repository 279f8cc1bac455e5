//! Domain types shared by the converter, the controller and the bindings.

use std::fmt;

use geojson::GeoJson;
use serde::{Deserialize, Serialize};

/// One of the two text encodings the converter moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    /// GeoJSON, the nested-object source format.
    #[serde(rename = "geojson")]
    GeoJson,
    /// Well-known text, the flat geometry-literal target format.
    #[serde(rename = "wkt")]
    Wkt,
}

impl Format {
    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::GeoJson => "GeoJSON",
            Self::Wkt => "WKT",
        }
    }

    /// The format a document of this format converts into.
    pub fn other(self) -> Self {
        match self {
            Self::GeoJson => Self::Wkt,
            Self::Wkt => Self::GeoJson,
        }
    }

    /// File extension used when writing this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::GeoJson => "geojson",
            Self::Wkt => "wkt",
        }
    }

    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "geojson" | "json" => Some(Self::GeoJson),
            "wkt" => Some(Self::Wkt),
            _ => None,
        }
    }

    /// Detect format from the text itself.
    ///
    /// GeoJSON documents are JSON objects, so the first non-blank character
    /// is `{`. Anything else non-empty is assumed to be WKT.
    pub fn from_content(text: &str) -> Option<Self> {
        match text.trim_start().chars().next() {
            Some('{') => Some(Self::GeoJson),
            Some(c) if c.is_ascii_alphabetic() => Some(Self::Wkt),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How GeoJSON text is laid out when the converter writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonStyle {
    /// Two-space indented.
    #[default]
    Pretty,
    /// Single line, no whitespace.
    Compact,
}

/// A parsed GeoJSON document, split by whether it needs element-wise
/// conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredDocument {
    /// A feature collection; each feature is converted on its own.
    Collection(Vec<GeoJson>),
    /// Any other GeoJSON object, converted as a whole.
    Single(GeoJson),
}

impl StructuredDocument {
    /// Whether this document is a collection.
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }
}

impl From<GeoJson> for StructuredDocument {
    fn from(doc: GeoJson) -> Self {
        match doc {
            GeoJson::FeatureCollection(collection) => Self::Collection(
                collection
                    .features
                    .into_iter()
                    .map(GeoJson::Feature)
                    .collect(),
            ),
            other => Self::Single(other),
        }
    }
}

/// Which output area a copy control reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// The WKT produced from GeoJSON input.
    WktOutput,
    /// The GeoJSON produced from WKT input.
    GeoJsonOutput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_extension("GeoJSON"), Some(Format::GeoJson));
        assert_eq!(Format::from_extension("json"), Some(Format::GeoJson));
        assert_eq!(Format::from_extension("wkt"), Some(Format::Wkt));
        assert_eq!(Format::from_extension("shp"), None);
    }

    #[test]
    fn test_format_from_content() {
        assert_eq!(
            Format::from_content("  \n{\"type\":\"Point\"}"),
            Some(Format::GeoJson)
        );
        assert_eq!(Format::from_content("POINT (1 2)"), Some(Format::Wkt));
        assert_eq!(Format::from_content("   "), None);
        assert_eq!(Format::from_content("[1, 2]"), None);
    }

    #[test]
    fn test_feature_collection_is_collection() {
        let doc = GeoJson::from_str(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[1,2]}},
                {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[3,4]}}
            ]}"#,
        )
        .unwrap();

        match StructuredDocument::from(doc) {
            StructuredDocument::Collection(items) => {
                assert_eq!(items.len(), 2);
                assert!(items.iter().all(|i| matches!(i, GeoJson::Feature(_))));
            }
            StructuredDocument::Single(_) => panic!("expected a collection"),
        }
    }

    #[test]
    fn test_geometry_is_single() {
        let doc = GeoJson::from_str(r#"{"type":"Point","coordinates":[1,2]}"#).unwrap();
        let structured = StructuredDocument::from(doc);
        assert!(!structured.is_collection());
    }
}
