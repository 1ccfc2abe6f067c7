//! Storage Layer
//!
//! Locates the configuration directory and moves recognition results and
//! text-layer documents between the filesystem and memory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::text_layer::{parse_recognition, RecognitionResult, TextLayerDocument};

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "ocrtextlayer", "OcrTextLayer")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

/// Load one page of recorded OCR engine output
pub fn read_recognition(path: &Path) -> Result<RecognitionResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read recognition result {:?}", path))?;
    let result = parse_recognition(&content)
        .with_context(|| format!("Failed to parse recognition result {:?}", path))?;

    debug!(
        "Loaded {:?}: {} paragraphs, {} lines, {} words",
        path,
        result.paragraphs.len(),
        result.line_count(),
        result.word_count()
    );

    Ok(result)
}

/// Write a text-layer document as JSON
pub fn write_document(document: &TextLayerDocument, path: &Path, pretty: bool) -> Result<()> {
    let content = if pretty {
        document.to_json_pretty()?
    } else {
        document.to_json()?
    };
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write text layer to {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_layer::{map_to_text_layer, MapParams, Platform, TextLayerError};
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    const PAGE_JSON: &str = r#"{
        "data": {
            "paragraphs": [{
                "lines": [{
                    "bbox": { "x0": 10, "y0": 20, "x1": 110, "y1": 40 },
                    "words": [{
                        "text": "Hello",
                        "font_size": 12,
                        "baseline": { "x0": 10, "y0": 22, "x1": 60, "y1": 22 }
                    }]
                }]
            }]
        }
    }"#;

    #[test]
    fn test_read_recognition() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", PAGE_JSON).unwrap();

        let result = read_recognition(file.path()).unwrap();
        assert_eq!(result.word_count(), 1);
    }

    #[test]
    fn test_read_recognition_file_not_found() {
        let result = read_recognition(Path::new("/nonexistent/page-1.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_recognition_invalid_keeps_kind() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "null").unwrap();

        let err = read_recognition(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TextLayerError>(),
            Some(TextLayerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_write_document() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", PAGE_JSON).unwrap();
        let recognition = read_recognition(file.path()).unwrap();

        let params = MapParams::new(0.5, 1, 2.0).with_platform(Platform::Other);
        let page = map_to_text_layer(&recognition, &params).unwrap();
        let document = TextLayerDocument::new(vec![page]);

        let dir = tempdir().unwrap();
        let out = dir.path().join("ocr.json");
        write_document(&document, &out, false).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, document.to_json().unwrap());
        assert!(written.starts_with(r#"{"Page":[{"Para":"#));

        write_document(&document, &out, true).unwrap();
        let pretty = std::fs::read_to_string(&out).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_write_document_missing_dir() {
        let result = write_document(
            &TextLayerDocument::default(),
            Path::new("/nonexistent/dir/ocr.json"),
            false,
        );
        assert!(result.is_err());
    }
}
