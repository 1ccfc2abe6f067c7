//! Recognition sources
//!
//! The OCR engine itself lives outside this crate. A [`RecognitionSource`]
//! stands in for it: given a page request it hands back that page's
//! recognition result.

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use super::progress::ProgressListener;
use crate::storage;
use crate::text_layer::RecognitionResult;

/// Everything an engine needs to recognize one page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanRequest<'a> {
    /// 1-based page number
    pub page: u32,
    /// Engine language code
    pub language: &'a str,
    /// Zoom at which to rasterize the page
    pub render_zoom: f64,
    /// Resolution to report to the engine
    pub dpi: f64,
}

/// Produces recognition results page by page
pub trait RecognitionSource {
    /// Number of pages in the document
    fn page_count(&self) -> u32;

    /// Recognize one page, reporting engine progress to `progress`
    fn recognize(
        &mut self,
        request: &ScanRequest<'_>,
        progress: &dyn ProgressListener,
    ) -> Result<RecognitionResult>;
}

/// Replays recorded engine output, one JSON file per page
#[derive(Debug, Clone)]
pub struct JsonPageSource {
    pages: Vec<PathBuf>,
}

impl JsonPageSource {
    /// Files in page order: the first file is page 1
    pub fn new(pages: Vec<PathBuf>) -> Self {
        Self { pages }
    }
}

impl RecognitionSource for JsonPageSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn recognize(
        &mut self,
        request: &ScanRequest<'_>,
        _progress: &dyn ProgressListener,
    ) -> Result<RecognitionResult> {
        let path = request
            .page
            .checked_sub(1)
            .and_then(|index| self.pages.get(index as usize))
            .ok_or_else(|| anyhow::anyhow!("No recorded result for page {}", request.page))?;

        debug!(
            "Replaying page {} from {:?} (recorded for language {}, zoom {})",
            request.page, path, request.language, request.render_zoom
        );

        storage::read_recognition(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::progress::LogProgress;
    use tempfile::tempdir;

    fn request(page: u32) -> ScanRequest<'static> {
        ScanRequest {
            page,
            language: "eng",
            render_zoom: 0.5,
            dpi: 96.0,
        }
    }

    #[test]
    fn test_json_source_reads_pages_in_order() {
        let dir = tempdir().unwrap();
        let mut paths = Vec::new();
        for (i, word) in ["first", "second"].iter().enumerate() {
            let path = dir.path().join(format!("page-{}.json", i + 1));
            let json = format!(
                r#"{{ "paragraphs": [{{ "lines": [{{
                    "bbox": {{ "x0": 0, "y0": 0, "x1": 50, "y1": 10 }},
                    "words": [{{ "text": "{word}", "font_size": 10,
                                 "baseline": {{ "x0": 0, "y0": 8, "x1": 40, "y1": 8 }} }}]
                }}] }}] }}"#
            );
            std::fs::write(&path, json).unwrap();
            paths.push(path);
        }

        let mut source = JsonPageSource::new(paths);
        assert_eq!(source.page_count(), 2);

        let second = source.recognize(&request(2), &LogProgress).unwrap();
        assert_eq!(second.paragraphs[0].lines[0].words[0].text, "second");
        let first = source.recognize(&request(1), &LogProgress).unwrap();
        assert_eq!(first.paragraphs[0].lines[0].words[0].text, "first");
    }

    #[test]
    fn test_json_source_out_of_range() {
        let mut source = JsonPageSource::new(vec![PathBuf::from("page-1.json")]);
        assert!(source.recognize(&request(0), &LogProgress).is_err());
        assert!(source.recognize(&request(2), &LogProgress).is_err());
    }
}
