//! Text-layer document consumed by the PDF SDK
//!
//! The JSON shape is fixed by the SDK: a `Page` array of pages, each holding
//! `Para` > `Line` > `Word`, with geometry in document space and a top-left
//! origin.

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

/// Largest integer an IEEE double holds exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Complete text layer for a document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextLayerDocument {
    #[serde(rename = "Page")]
    pub pages: Vec<Page>,
}

/// Text layer for one page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    #[serde(rename = "Para")]
    pub paragraphs: Vec<Paragraph>,
    #[serde(serialize_with = "as_js_number")]
    pub dpi: f64,
    /// 1-based page number
    pub num: u32,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    #[serde(rename = "Line")]
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    #[serde(rename = "Word")]
    pub words: Vec<Word>,
    #[serde(rename = "box")]
    pub bounds: LineBox,
}

/// Line box, serialized as `[x, y, width, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineBox {
    pub x: f64,
    pub y: f64,
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word {
    #[serde(rename = "font-size", serialize_with = "as_js_number")]
    pub font_size: f64,
    pub length: i64,
    pub text: String,
    pub orientation: Orientation,
    pub x: i64,
    pub y: i64,
}

/// Word orientation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// Unknown, assumed upright
    #[serde(rename = "U")]
    Upright,
}

/// Coordinate origin of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Origin {
    TopLeft,
}

impl TextLayerDocument {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Compact JSON payload for the SDK
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented JSON, for inspection
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Total number of words across all pages
    pub fn word_count(&self) -> usize {
        self.pages.iter().map(Page::word_count).sum()
    }
}

impl Page {
    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .flat_map(|p| &p.lines)
            .map(|l| l.words.len())
            .sum()
    }
}

impl Serialize for LineBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&JsNumber(self.x))?;
        tuple.serialize_element(&JsNumber(self.y))?;
        tuple.serialize_element(&self.width)?;
        tuple.serialize_element(&self.height)?;
        tuple.end()
    }
}

/// A float written the way a JavaScript engine prints it: integral values
/// without a fractional part.
struct JsNumber(f64);

impl Serialize for JsNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

fn as_js_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    JsNumber(*value).serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page() -> Page {
        Page {
            paragraphs: vec![Paragraph {
                lines: vec![Line {
                    words: vec![Word {
                        font_size: 12.0,
                        length: 25,
                        text: "Hello".to_string(),
                        orientation: Orientation::Upright,
                        x: 5,
                        y: 11,
                    }],
                    bounds: LineBox {
                        x: 5.0,
                        y: 10.5,
                        width: 50,
                        height: 10,
                    },
                }],
            }],
            dpi: 192.0,
            num: 3,
            origin: Origin::TopLeft,
        }
    }

    #[test]
    fn test_document_json_shape() {
        let doc = TextLayerDocument::new(vec![page()]);
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(
            value,
            json!({
                "Page": [{
                    "Para": [{
                        "Line": [{
                            "Word": [{
                                "font-size": 12,
                                "length": 25,
                                "text": "Hello",
                                "orientation": "U",
                                "x": 5,
                                "y": 11
                            }],
                            "box": [5, 10.5, 50, 10]
                        }]
                    }],
                    "dpi": 192,
                    "num": 3,
                    "origin": "TopLeft"
                }]
            })
        );
    }

    #[test]
    fn test_integral_floats_print_without_fraction() {
        let json = TextLayerDocument::new(vec![page()]).to_json().unwrap();
        assert!(json.contains(r#""dpi":192,"#));
        assert!(json.contains(r#""box":[5,10.5,50,10]"#));
        assert!(json.contains(r#""font-size":12,"#));
    }

    #[test]
    fn test_fractional_values_keep_precision() {
        let mut p = page();
        p.dpi = 134.4;
        p.paragraphs[0].lines[0].words[0].font_size = 12.75;
        let json = TextLayerDocument::new(vec![p]).to_json().unwrap();
        assert!(json.contains(r#""dpi":134.4"#));
        assert!(json.contains(r#""font-size":12.75"#));
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let doc = TextLayerDocument::new(vec![page(), page()]);
        let pretty = doc.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(value["Page"].as_array().unwrap().len(), 2);
        assert_eq!(doc.word_count(), 2);
    }

    #[test]
    fn test_empty_document() {
        let doc = TextLayerDocument::default();
        assert_eq!(doc.to_json().unwrap(), r#"{"Page":[]}"#);
    }
}
