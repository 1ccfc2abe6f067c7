//! Document Scan
//!
//! Drives recognition over every page of a document and assembles the
//! mapped pages, in order, into one text-layer document. The OCR engine is
//! reached through [`RecognitionSource`]; progress goes to a
//! [`ProgressListener`].

pub mod languages;
pub mod progress;
pub mod source;

pub use progress::{ChannelProgress, LogProgress, ProgressListener, ScanProgress};
pub use source::{JsonPageSource, RecognitionSource, ScanRequest};

use anyhow::{Context, Result};
use crossbeam_channel::unbounded;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::text_layer::{
    map_to_text_layer, MapParams, Platform, TextLayerDocument, TextLayerError, BASELINE_DPI,
};

/// Language and quality chosen for a scan
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    language: String,
    quality: f64,
}

impl ScanSettings {
    /// Validate a language code and render quality multiplier
    pub fn new(language: impl Into<String>, quality: f64) -> Result<Self, TextLayerError> {
        let language = language.into();
        if !languages::is_supported(&language) {
            return Err(TextLayerError::InvalidInput(format!(
                "unsupported recognition language {:?}",
                language
            )));
        }
        if !(quality.is_finite() && quality > 0.0) {
            return Err(TextLayerError::InvalidInput(format!(
                "quality must be positive, got {}",
                quality
            )));
        }
        Ok(Self { language, quality })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn quality(&self) -> f64 {
        self.quality
    }

    /// Zoom at which pages are rasterized for recognition
    pub fn render_zoom(&self) -> f64 {
        self.quality / 2.0
    }

    /// Converts rendered pixels back to document units
    pub fn scale_divisor(&self) -> f64 {
        1.0 / self.quality
    }

    pub fn dpi(&self) -> f64 {
        self.quality * BASELINE_DPI
    }

    /// Mapping parameters for one page
    pub fn map_params(&self, page: u32, platform: Platform) -> MapParams {
        MapParams::new(self.scale_divisor(), page, self.quality).with_platform(platform)
    }

    fn request(&self, page: u32) -> ScanRequest<'_> {
        ScanRequest {
            page,
            language: &self.language,
            render_zoom: self.render_zoom(),
            dpi: self.dpi(),
        }
    }
}

/// A configured document scan
#[derive(Debug, Clone)]
pub struct OcrScan {
    settings: ScanSettings,
    platform: Platform,
}

impl OcrScan {
    pub fn new(settings: ScanSettings, platform: Platform) -> Self {
        Self { settings, platform }
    }

    /// Recognize and map every page of `source`.
    ///
    /// Pages are processed one at a time in document order. The first
    /// failure aborts the scan; no partial document is returned.
    pub fn run<S: RecognitionSource + ?Sized>(
        &self,
        source: &mut S,
        listener: &dyn ProgressListener,
    ) -> Result<TextLayerDocument> {
        let start = Instant::now();
        let page_count = source.page_count();

        info!(
            "Scanning {} page(s): language={}, quality={}, platform={:?}",
            page_count,
            self.settings.language(),
            self.settings.quality(),
            self.platform
        );
        listener.on_progress(ScanProgress::Preparing);

        let mut pages = Vec::with_capacity(page_count as usize);
        for page in 1..=page_count {
            listener.on_progress(ScanProgress::PageStarted { page });

            let recognition = source
                .recognize(&self.settings.request(page), listener)
                .with_context(|| format!("Recognition failed on page {}", page))?;

            let mapped = map_to_text_layer(&recognition, &self.settings.map_params(page, self.platform))
                .with_context(|| format!("Failed to map page {}", page))?;

            debug!(
                "Page {}: {} paragraphs, {} words",
                page,
                mapped.paragraphs.len(),
                mapped.word_count()
            );
            pages.push(mapped);

            listener.on_progress(ScanProgress::PageComplete { page });
        }

        listener.on_progress(ScanProgress::Finished { pages: page_count });
        info!("Scan complete in {:?}", start.elapsed());

        Ok(TextLayerDocument::new(pages))
    }

    /// Like [`OcrScan::run`], but hands each progress event to `report` on a
    /// separate reporter thread. Returns once the reporter has drained every
    /// event.
    pub fn run_with_reporter<S, F>(&self, source: &mut S, mut report: F) -> Result<TextLayerDocument>
    where
        S: RecognitionSource + ?Sized,
        F: FnMut(ScanProgress) + Send + 'static,
    {
        let (tx, rx) = unbounded::<ScanProgress>();
        let reporter = std::thread::spawn(move || {
            for event in rx {
                report(event);
            }
        });

        // The listener owns the only sender; dropping it ends the reporter loop
        let result = {
            let listener = ChannelProgress::new(tx);
            self.run(source, &listener)
        };

        if reporter.join().is_err() {
            warn!("Progress reporter thread panicked");
        }
        result
    }
}
