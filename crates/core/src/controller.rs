//! Form controller for the two-way GeoJSON/WKT converter.
//!
//! The controller owns nothing from the page directly. Fields, the error
//! banner and the clipboard are injected through small traits, so the same
//! logic runs against DOM elements in the browser and against in-memory
//! fakes in tests.

use crate::codec::{GeometryCodec, WellKnown};
use crate::convert::Converter;
use crate::error::Result;
use crate::types::CopyTarget;

/// A text area or input whose value can be read and replaced.
pub trait TextField {
    /// Current text.
    fn value(&self) -> String;

    /// Replace the text.
    fn set_value(&self, value: &str);
}

/// The banner that reports conversion failures.
pub trait ErrorBanner {
    /// Show the banner with a message.
    fn show(&self, message: &str);

    /// Hide the banner and clear its message.
    fn hide(&self);
}

/// System clipboard access.
pub trait Clipboard {
    /// Put text on the clipboard.
    fn copy_text(&self, text: &str) -> Result<()>;
}

/// The four text fields of the converter form.
#[derive(Debug, Clone)]
pub struct ConverterFields<F> {
    /// GeoJSON typed or pasted by the user.
    pub geojson_input: F,
    /// WKT produced from `geojson_input`.
    pub wkt_output: F,
    /// WKT typed or pasted by the user.
    pub wkt_input: F,
    /// GeoJSON produced from `wkt_input`.
    pub geojson_output: F,
}

/// Drives conversions triggered from the form and shows their outcome.
pub struct ConversionController<F, B, K, C = WellKnown> {
    converter: Converter<C>,
    fields: ConverterFields<F>,
    banner: B,
    clipboard: K,
}

impl<F, B, K, C> ConversionController<F, B, K, C>
where
    F: TextField,
    B: ErrorBanner,
    K: Clipboard,
    C: GeometryCodec,
{
    /// Create a controller from its collaborators.
    pub fn new(
        converter: Converter<C>,
        fields: ConverterFields<F>,
        banner: B,
        clipboard: K,
    ) -> Self {
        Self {
            converter,
            fields,
            banner,
            clipboard,
        }
    }

    /// The converter in use.
    pub fn converter(&self) -> &Converter<C> {
        &self.converter
    }

    /// The form fields.
    pub fn fields(&self) -> &ConverterFields<F> {
        &self.fields
    }

    /// The error banner.
    pub fn banner(&self) -> &B {
        &self.banner
    }

    /// Convert GeoJSON to WKT and show the outcome.
    ///
    /// Once the input parses as JSON it is written back into the GeoJSON
    /// input, pretty-printed, whether or not the WKT conversion succeeds.
    pub fn convert_forward(&self, raw: &str) -> Result<String> {
        let result = self.forward(raw);
        self.display(result, &self.fields.wkt_output)
    }

    /// Convert WKT to GeoJSON and show the outcome.
    ///
    /// The trimmed input is written back into the WKT input first.
    pub fn convert_backward(&self, raw: &str) -> Result<String> {
        let trimmed = raw.trim();
        self.fields.wkt_input.set_value(trimmed);
        let result = self.converter.wkt_to_geojson(trimmed);
        self.display(result, &self.fields.geojson_output)
    }

    /// Convert whatever the GeoJSON input currently holds.
    pub fn submit_forward(&self) -> Result<String> {
        let raw = self.fields.geojson_input.value();
        self.convert_forward(&raw)
    }

    /// Convert whatever the WKT input currently holds.
    pub fn submit_backward(&self) -> Result<String> {
        let raw = self.fields.wkt_input.value();
        self.convert_backward(&raw)
    }

    /// Copy an output area to the clipboard.
    ///
    /// Callers may ignore the result; a refusal is logged either way.
    pub fn copy_to_clipboard(&self, target: CopyTarget) -> Result<()> {
        let text = match target {
            CopyTarget::WktOutput => self.fields.wkt_output.value(),
            CopyTarget::GeoJsonOutput => self.fields.geojson_output.value(),
        };

        self.clipboard.copy_text(&text).map_err(|e| {
            log::warn!("Copy to clipboard failed: {}", e);
            e
        })
    }

    fn forward(&self, raw: &str) -> Result<String> {
        let value = self.converter.parse_geojson(raw)?;
        let pretty = self.converter.pretty_geojson(&value)?;
        self.fields.geojson_input.set_value(&pretty);
        self.converter.document_to_wkt(value)
    }

    fn display(&self, result: Result<String>, output: &F) -> Result<String> {
        match &result {
            Ok(text) => {
                output.set_value(text);
                self.banner.hide();
            }
            Err(e) => {
                log::debug!("Conversion failed: {}", e);
                self.banner.show(&e.to_string());
            }
        }
        result
    }
}
