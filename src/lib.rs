//! OCR Text Layer
//!
//! Maps the per-page output of an OCR engine, run over rendered page images,
//! onto the text-layer JSON a PDF SDK merges into the document so scanned
//! pages become searchable and selectable.

pub mod config;
pub mod scan;
pub mod storage;
pub mod text_layer;
