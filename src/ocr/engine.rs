use anyhow::{anyhow, Context, Result};
use image::GrayImage;
use std::process::Command;
use tempfile::NamedTempFile;

use super::extract::CHAR_WHITELIST;
use super::setup::TesseractPaths;

/// Page segmentation mode 6: assume a single uniform block of text.
const PAGE_SEG_MODE: &str = "6";

/// Runs Tesseract on a preprocessed grayscale image and returns its raw text.
///
/// Output is restricted to `CHAR_WHITELIST`.
pub fn recognize_text(paths: &TesseractPaths, img: &GrayImage) -> Result<String> {
    // Save image to temporary file
    let temp_input = NamedTempFile::with_suffix(".png")?;
    img.save(temp_input.path())
        .context("Failed to write OCR input image")?;

    let mut command = Command::new(&paths.executable);
    command.arg(temp_input.path()).arg("stdout");
    if let Some(tessdata) = &paths.tessdata {
        command.arg("--tessdata-dir").arg(tessdata);
    }
    command.args(tesseract_args());

    let output = command
        .output()
        .with_context(|| format!("Failed to run {}", paths.executable.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("Tesseract failed: {}", stderr.trim()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Language, segmentation mode and whitelist arguments.
fn tesseract_args() -> Vec<String> {
    vec![
        "-l".to_string(),
        "eng".to_string(),
        "--psm".to_string(),
        PAGE_SEG_MODE.to_string(),
        "-c".to_string(),
        format!("tessedit_char_whitelist={}", CHAR_WHITELIST),
    ]
}
