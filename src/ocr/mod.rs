pub mod engine;
pub mod extract;
pub mod preprocess;
pub mod setup;

pub use preprocess::prepare_for_ocr;
pub use setup::{locate_tesseract, TesseractPaths};

use anyhow::Result;

use crate::capture::Frame;
use crate::log::Logger;
use engine::recognize_text;
use extract::{normalize_text, parse_value};

/// Extracts the number shown in a frame.
pub trait Recognizer {
    /// Returns `Ok(None)` when the text could not be read as an integer.
    ///
    /// `Err` is reserved for engine failures, which are fatal.
    fn recognize(&mut self, frame: &Frame) -> Result<Option<u32>>;
}

/// Tesseract-backed recognizer tuned for the game's stat font.
pub struct TesseractRecognizer {
    paths: TesseractPaths,
    logger: Logger,
}

impl TesseractRecognizer {
    pub fn new(paths: TesseractPaths, logger: Logger) -> Self {
        Self { paths, logger }
    }

    /// Locates Tesseract and builds a recognizer around it.
    pub fn locate(logger: Logger) -> Result<Self> {
        Ok(Self::new(locate_tesseract(&logger)?, logger))
    }
}

impl Recognizer for TesseractRecognizer {
    fn recognize(&mut self, frame: &Frame) -> Result<Option<u32>> {
        let prepared = prepare_for_ocr(frame);
        let raw = recognize_text(&self.paths, &prepared)?;
        Ok(interpret_text(&raw, &self.logger))
    }
}

/// High-level function: raw OCR text → value.
///
/// Unreadable text is logged and yields `None`.
pub fn interpret_text(raw: &str, logger: &Logger) -> Option<u32> {
    let text = normalize_text(raw);
    let value = parse_value(&text);
    if value.is_none() {
        logger.log(&format!("OCR failed to convert text to integer: {}", text));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_text() {
        let logger = Logger::default();
        assert_eq!(interpret_text(")45\n", &logger), Some(945));
        assert_eq!(interpret_text("30", &logger), Some(30));
        assert_eq!(interpret_text("", &logger), None);
        assert_eq!(interpret_text("abc", &logger), None);
    }
}
