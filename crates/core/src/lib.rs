//! GeoJSON/WKT conversion, the converter form controller, keyboard slide
//! navigation and the presentation theme.

pub mod codec;
pub mod controller;
pub mod convert;
pub mod error;
pub mod json;
pub mod slides;
pub mod theme;
pub mod types;

pub use codec::{GeometryCodec, WellKnown};
pub use controller::{Clipboard, ConversionController, ConverterFields, ErrorBanner, TextField};
pub use convert::{Converter, ConverterOptions};
pub use error::{Error, Result};
pub use slides::{NavKey, SlideDeck, Transition};
pub use theme::Theme;
pub use types::{CopyTarget, Format, JsonStyle, StructuredDocument};
