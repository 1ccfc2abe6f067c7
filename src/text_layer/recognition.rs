//! OCR engine output model
//!
//! Mirrors the hierarchical result a Tesseract-style engine reports for one
//! rendered page: paragraphs, lines and words, all measured in pixels of the
//! rendered image. Fields the mapper does not use (confidence, symbols,
//! choices, ...) are ignored during deserialization.

use serde::Deserialize;
use serde_json::Value;

use super::error::TextLayerError;

/// Recognized content of a single rendered page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecognitionResult {
    pub paragraphs: Vec<Paragraph>,
}

/// A block of lines
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paragraph {
    pub lines: Vec<Line>,
}

/// A recognized text line
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Line {
    /// Line bounds in rendered-image pixels
    pub bbox: BoundingBox,
    pub words: Vec<Word>,
}

/// A recognized word
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Word {
    pub text: String,
    /// Baseline endpoints in rendered-image pixels
    pub baseline: Baseline,
    /// Font size in rendered-image pixels
    pub font_size: f64,
}

/// Axis-aligned box given by its two corners
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Start and end point of a word's baseline
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Baseline {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl RecognitionResult {
    /// Check the geometric preconditions of the mapper.
    ///
    /// Every coordinate and font size must be finite. Line boxes must not be
    /// inverted on either axis and word baselines must run left to right.
    /// Baselines may slope, so their y values are not compared.
    pub fn validate(&self) -> Result<(), TextLayerError> {
        for (p, paragraph) in self.paragraphs.iter().enumerate() {
            for (l, line) in paragraph.lines.iter().enumerate() {
                let b = line.bbox;
                if !all_finite(&[b.x0, b.y0, b.x1, b.y1]) {
                    return Err(TextLayerError::invalid(format!(
                        "paragraph {p}, line {l}: bounding box ({}, {})-({}, {}) is not finite",
                        b.x0, b.y0, b.x1, b.y1
                    )));
                }
                if b.x1 < b.x0 || b.y1 < b.y0 {
                    return Err(TextLayerError::invalid(format!(
                        "paragraph {p}, line {l}: bounding box ({}, {})-({}, {}) is inverted",
                        b.x0, b.y0, b.x1, b.y1
                    )));
                }

                for (w, word) in line.words.iter().enumerate() {
                    let bl = word.baseline;
                    if !all_finite(&[bl.x0, bl.y0, bl.x1, bl.y1, word.font_size]) {
                        return Err(TextLayerError::invalid(format!(
                            "paragraph {p}, line {l}, word {w} ({:?}): baseline or font size is not finite",
                            word.text
                        )));
                    }
                    if bl.x1 < bl.x0 {
                        return Err(TextLayerError::invalid(format!(
                            "paragraph {p}, line {l}, word {w} ({:?}): baseline ends at x={} before it starts at x={}",
                            word.text, word.baseline.x1, word.baseline.x0
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Total number of lines across all paragraphs
    pub fn line_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.lines.len()).sum()
    }

    /// Total number of words across all lines
    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .flat_map(|p| &p.lines)
            .map(|l| l.words.len())
            .sum()
    }
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Parse engine output from a JSON string.
///
/// See [`recognition_from_value`] for the accepted shapes.
pub fn parse_recognition(json: &str) -> Result<RecognitionResult, TextLayerError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| TextLayerError::invalid(format!("malformed recognition JSON: {e}")))?;
    recognition_from_value(value)
}

/// Convert engine output into a [`RecognitionResult`].
///
/// Accepts either the bare result object or the `{ "data": { ... } }`
/// envelope the engine's `recognize` call resolves with. A `null` result, or
/// one missing its `paragraphs`/`lines`/`words` arrays, is invalid input.
pub fn recognition_from_value(value: Value) -> Result<RecognitionResult, TextLayerError> {
    let data = match value {
        Value::Object(mut map) if !map.contains_key("paragraphs") => {
            map.remove("data").unwrap_or(Value::Object(map))
        }
        other => other,
    };

    if data.is_null() {
        return Err(TextLayerError::invalid("recognition result is absent"));
    }

    serde_json::from_value(data).map_err(|e| {
        TextLayerError::invalid(format!("recognition result does not match engine schema: {e}"))
    })
}
