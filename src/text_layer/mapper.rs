//! Coordinate mapping from OCR pixel space to document space

use super::error::TextLayerError;
use super::recognition::{self, RecognitionResult};
use super::schema::{Line, LineBox, Orientation, Origin, Page, Paragraph, Word};

/// Reference resolution the SDK measures document space in
pub const BASELINE_DPI: f64 = 96.0;

/// Host class the page was rendered on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Other,
}

impl Platform {
    /// Platform of the running process
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// Correction factor applied to word geometry and font size
    pub fn word_factor(self) -> f64 {
        match self {
            Platform::Windows => 2.0,
            Platform::Other => 1.0,
        }
    }
}

/// Parameters for mapping one page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapParams {
    /// `1 / zoom` used when the page was rendered for recognition
    pub scale_divisor: f64,
    /// 1-based position of the page in the document
    pub page_number: u32,
    /// Output DPI is this multiple of [`BASELINE_DPI`]
    pub resolution_multiplier: f64,
    pub platform: Platform,
}

impl MapParams {
    /// Parameters for the current host platform
    pub fn new(scale_divisor: f64, page_number: u32, resolution_multiplier: f64) -> Self {
        Self {
            scale_divisor,
            page_number,
            resolution_multiplier,
            platform: Platform::host(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Resolution recorded on the output page
    pub fn dpi(&self) -> f64 {
        self.resolution_multiplier * BASELINE_DPI
    }

    fn validate(&self) -> Result<(), TextLayerError> {
        if !(self.scale_divisor.is_finite() && self.scale_divisor > 0.0) {
            return Err(TextLayerError::invalid(format!(
                "scale divisor must be positive, got {}",
                self.scale_divisor
            )));
        }
        if !(self.resolution_multiplier.is_finite() && self.resolution_multiplier > 0.0) {
            return Err(TextLayerError::invalid(format!(
                "resolution multiplier must be positive, got {}",
                self.resolution_multiplier
            )));
        }
        if self.page_number == 0 {
            return Err(TextLayerError::invalid("page numbers start at 1"));
        }
        Ok(())
    }
}

/// Map one page of recognition output onto the SDK text-layer schema.
///
/// The output mirrors the input hierarchy exactly: every paragraph, line and
/// word is kept in order, including lines without words. All inputs are
/// validated before any output is built.
///
/// Two quirks of the render pipeline are reproduced so the SDK receives the
/// geometry it always has:
/// - the platform factor scales word geometry and font size, never line boxes;
/// - line box position keeps its fraction while its size is floored.
///
/// Both look like defects rather than compensations.
pub fn map_to_text_layer(
    recognition: &RecognitionResult,
    params: &MapParams,
) -> Result<Page, TextLayerError> {
    params.validate()?;
    recognition.validate()?;

    let divisor = params.scale_divisor;
    let factor = params.platform.word_factor();

    let paragraphs = recognition
        .paragraphs
        .iter()
        .map(|paragraph| Paragraph {
            lines: paragraph
                .lines
                .iter()
                .map(|line| map_line(line, divisor, factor))
                .collect(),
        })
        .collect();

    Ok(Page {
        paragraphs,
        dpi: params.dpi(),
        num: params.page_number,
        origin: Origin::TopLeft,
    })
}

fn map_line(line: &recognition::Line, divisor: f64, factor: f64) -> Line {
    let bbox = line.bbox;
    Line {
        words: line
            .words
            .iter()
            .map(|word| map_word(word, divisor, factor))
            .collect(),
        bounds: LineBox {
            x: bbox.x0 * divisor,
            y: bbox.y0 * divisor,
            width: floor((bbox.x1 - bbox.x0) * divisor),
            height: floor((bbox.y1 - bbox.y0) * divisor),
        },
    }
}

fn map_word(word: &recognition::Word, divisor: f64, factor: f64) -> Word {
    let scale = divisor * factor;
    let x = floor(word.baseline.x0 * scale);
    let y = floor(word.baseline.y0 * scale);
    Word {
        font_size: word.font_size * factor,
        length: floor(word.baseline.x1 * scale) - x,
        text: word.text.clone(),
        orientation: Orientation::Upright,
        x,
        y,
    }
}

fn floor(value: f64) -> i64 {
    value.floor() as i64
}
