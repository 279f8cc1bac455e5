//! Static theme for the presentation framework.
//!
//! Serializes to the camelCase object shape the renderer expects, e.g.
//! `{"fonts":{"body":...},"googleFont":...,"colors":{...},"styles":{...}}`.

use serde::Serialize;

const TEXT: &str = "#073642";
const BACKGROUND: &str = "#fdf6e3";
const LINK: &str = "#268bd2";

/// Presentation theme tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub fonts: Fonts,
    pub google_font: String,
    pub colors: Colors,
    pub styles: Styles,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fonts {
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Colors {
    pub text: String,
    pub background: String,
    pub link: String,
}

/// Style rules keyed by the element they apply to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Styles {
    pub root: StyleRule,
    pub pre: StyleRule,
    pub code: StyleRule,
    #[serde(rename = "Slide")]
    pub slide: StyleRule,
}

/// A single style rule. Unset properties are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    /// Responsive sizes, smallest breakpoint first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub font_size: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Rule for nested `code` elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Box<StyleRule>>,
}

impl StyleRule {
    fn background(color: &str) -> Self {
        Self {
            background: Some(color.to_string()),
            ..Default::default()
        }
    }

    fn with_code_background(mut self, color: &str) -> Self {
        self.code = Some(Box::new(Self::background(color)));
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fonts: Fonts {
                body: "\"Open Sans\", sans-serif".to_string(),
            },
            google_font: "https://fonts.googleapis.com/css?family=Open+Sans".to_string(),
            colors: Colors {
                text: TEXT.to_string(),
                background: BACKGROUND.to_string(),
                link: LINK.to_string(),
            },
            styles: Styles {
                root: StyleRule {
                    text_align: Some("left".to_string()),
                    font_size: vec!["1.5em".to_string(), "3em".to_string()],
                    ..Default::default()
                }
                .with_code_background(BACKGROUND),
                pre: StyleRule::background(BACKGROUND).with_code_background(BACKGROUND),
                code: StyleRule::background(BACKGROUND),
                slide: StyleRule {
                    display: Some("block".to_string()),
                    padding: Some("2em".to_string()),
                    text_align: Some("left".to_string()),
                    ..Default::default()
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_theme_shape() {
        let value = serde_json::to_value(Theme::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "fonts": { "body": "\"Open Sans\", sans-serif" },
                "googleFont": "https://fonts.googleapis.com/css?family=Open+Sans",
                "colors": {
                    "text": "#073642",
                    "background": "#fdf6e3",
                    "link": "#268bd2"
                },
                "styles": {
                    "root": {
                        "textAlign": "left",
                        "fontSize": ["1.5em", "3em"],
                        "code": { "background": "#fdf6e3" }
                    },
                    "pre": {
                        "background": "#fdf6e3",
                        "code": { "background": "#fdf6e3" }
                    },
                    "code": { "background": "#fdf6e3" },
                    "Slide": {
                        "display": "block",
                        "padding": "2em",
                        "textAlign": "left"
                    }
                }
            })
        );
    }
}
