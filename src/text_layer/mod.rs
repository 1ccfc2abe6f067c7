//! Text Layer
//!
//! Converts OCR engine output for a rendered page into the text-layer JSON
//! a PDF SDK merges into the document. Everything here is pure: no I/O and
//! no shared state, so pages can be mapped independently.

pub mod error;
pub mod mapper;
pub mod recognition;
pub mod schema;

pub use error::TextLayerError;
pub use mapper::{map_to_text_layer, MapParams, Platform, BASELINE_DPI};
pub use recognition::{parse_recognition, recognition_from_value, RecognitionResult};
pub use schema::{Page, TextLayerDocument};
