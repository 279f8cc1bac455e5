//! The geometry-level conversion capability.
//!
//! [`GeometryCodec`] is the seam between the converter and whatever library
//! actually understands WKT. [`WellKnown`] is the default implementation:
//! parsing goes through the `wkt` crate, and writing renders GeoJSON
//! geometries in the `POINT (1 2)` style. Empty geometries are written as
//! `<TAG> EMPTY`, and 3D/4D positions get a `Z`/`ZM` tag.

use std::str::FromStr;

use geojson::{GeoJson, Geometry, Value};
use wkt::types::{Coord, LineString, Polygon};
use wkt::Wkt;

use crate::error::{Error, Result};
use crate::types::Format;

const EMPTY: &str = "EMPTY";

/// Bidirectional geometry conversion between WKT text and GeoJSON objects.
pub trait GeometryCodec {
    /// Parse WKT text into a GeoJSON geometry.
    fn parse(&self, text: &str) -> Result<Geometry>;

    /// Render a GeoJSON geometry, or a feature carrying one, as WKT.
    fn stringify(&self, document: &GeoJson) -> Result<String>;
}

/// Default codec backed by the `wkt` and `geojson` crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct WellKnown;

impl WellKnown {
    /// Create a new codec.
    pub fn new() -> Self {
        Self
    }
}

impl GeometryCodec for WellKnown {
    fn parse(&self, text: &str) -> Result<Geometry> {
        let parsed = Wkt::<f64>::from_str(text)
            .map_err(|e| Error::syntax(Format::Wkt, e.to_string()))?;

        Ok(Geometry::new(wkt_to_value(parsed)?))
    }

    fn stringify(&self, document: &GeoJson) -> Result<String> {
        match document {
            GeoJson::Geometry(geometry) => write_geometry(geometry),
            GeoJson::Feature(feature) => match &feature.geometry {
                Some(geometry) => write_geometry(geometry),
                None => Err(Error::Unsupported("feature has no geometry".to_string())),
            },
            GeoJson::FeatureCollection(_) => Err(Error::Unsupported(
                "feature collections are not geometries".to_string(),
            )),
        }
    }
}

fn write_geometry(geometry: &Geometry) -> Result<String> {
    let (tag, dimension, body) = match &geometry.value {
        Value::Point(position) if position.is_empty() => ("POINT", "", EMPTY.to_string()),
        Value::Point(position) => (
            "POINT",
            dimension_tag([position])?,
            format!("({})", write_position(position)),
        ),
        Value::LineString(positions) => (
            "LINESTRING",
            dimension_tag(positions)?,
            write_positions(positions),
        ),
        Value::MultiPoint(positions) => (
            "MULTIPOINT",
            dimension_tag(positions)?,
            write_positions(positions),
        ),
        Value::Polygon(rings) => (
            "POLYGON",
            dimension_tag(rings.iter().flatten())?,
            write_rings(rings),
        ),
        Value::MultiLineString(lines) => (
            "MULTILINESTRING",
            dimension_tag(lines.iter().flatten())?,
            write_rings(lines),
        ),
        Value::MultiPolygon(polygons) => (
            "MULTIPOLYGON",
            dimension_tag(polygons.iter().flatten().flatten())?,
            wrap(polygons.iter().map(|rings| write_rings(rings)).collect()),
        ),
        Value::GeometryCollection(geometries) => {
            let parts = geometries
                .iter()
                .map(write_geometry)
                .collect::<Result<Vec<_>>>()?;
            ("GEOMETRYCOLLECTION", "", wrap(parts))
        }
    };

    Ok(format!("{}{} {}", tag, dimension, body))
}

/// ` Z` or ` ZM` when the positions carry elevation (and measure).
///
/// All positions of one geometry must have the same number of ordinates.
fn dimension_tag<'a>(positions: impl IntoIterator<Item = &'a Vec<f64>>) -> Result<&'static str> {
    let mut ordinates = None;
    for position in positions {
        match ordinates {
            None => ordinates = Some(position.len()),
            Some(n) if n != position.len() => {
                return Err(Error::Unsupported(
                    "positions mix coordinate dimensions".to_string(),
                ))
            }
            Some(_) => {}
        }
    }

    match ordinates {
        None | Some(2) => Ok(""),
        Some(3) => Ok(" Z"),
        Some(4) => Ok(" ZM"),
        Some(n) => Err(Error::Unsupported(format!(
            "positions need two to four ordinates, got {}",
            n
        ))),
    }
}

/// `(a, b, c)`, or `EMPTY` when there are no parts.
fn wrap(parts: Vec<String>) -> String {
    if parts.is_empty() {
        EMPTY.to_string()
    } else {
        format!("({})", parts.join(", "))
    }
}

fn write_position(position: &[f64]) -> String {
    position
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_positions(positions: &[Vec<f64>]) -> String {
    wrap(positions.iter().map(|p| write_position(p)).collect())
}

fn write_rings(rings: &[Vec<Vec<f64>>]) -> String {
    wrap(rings.iter().map(|ring| write_positions(ring)).collect())
}

fn wkt_to_value(parsed: Wkt<f64>) -> Result<Value> {
    let value = match parsed {
        Wkt::Point(point) => Value::Point(match point.0 {
            Some(coord) => position(coord)?,
            None => Vec::new(),
        }),
        Wkt::LineString(line) => Value::LineString(positions(line)?),
        Wkt::Polygon(polygon) => Value::Polygon(rings(polygon)?),
        Wkt::MultiPoint(points) => Value::MultiPoint(
            points
                .0
                .into_iter()
                .filter_map(|point| point.0)
                .map(position)
                .collect::<Result<_>>()?,
        ),
        Wkt::MultiLineString(lines) => {
            Value::MultiLineString(lines.0.into_iter().map(positions).collect::<Result<_>>()?)
        }
        Wkt::MultiPolygon(polygons) => {
            Value::MultiPolygon(polygons.0.into_iter().map(rings).collect::<Result<_>>()?)
        }
        Wkt::GeometryCollection(collection) => Value::GeometryCollection(
            collection
                .0
                .into_iter()
                .map(|item| wkt_to_value(item).map(Geometry::new))
                .collect::<Result<_>>()?,
        ),
    };

    Ok(value)
}

/// `[x, y]`, `[x, y, z]` or `[x, y, z, m]`.
fn position(coord: Coord<f64>) -> Result<Vec<f64>> {
    match (coord.z, coord.m) {
        (None, None) => Ok(vec![coord.x, coord.y]),
        (Some(z), None) => Ok(vec![coord.x, coord.y, z]),
        (Some(z), Some(m)) => Ok(vec![coord.x, coord.y, z, m]),
        (None, Some(_)) => Err(Error::syntax(
            Format::Wkt,
            "measured coordinates without elevation have no GeoJSON form",
        )),
    }
}

fn positions(line: LineString<f64>) -> Result<Vec<Vec<f64>>> {
    line.0.into_iter().map(position).collect()
}

fn rings(polygon: Polygon<f64>) -> Result<Vec<Vec<Vec<f64>>>> {
    polygon.0.into_iter().map(positions).collect()
}
