use anyhow::{anyhow, Result};
use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::log::Logger;
use crate::paths::{get_bundled_tesseract_dir, get_user_tesseract_dir};

/// Standard install locations of the UB-Mannheim Windows builds.
const SYSTEM_INSTALL_DIRS: [&str; 2] = [
    r"C:\Program Files\Tesseract-OCR",
    r"C:\Program Files (x86)\Tesseract-OCR",
];

const ENG_TRAINEDDATA: &str = "eng.traineddata";

pub struct TesseractPaths {
    pub executable: PathBuf,
    /// `None` lets Tesseract fall back to its compiled-in default.
    pub tessdata: Option<PathBuf>,
}

/// Locates the Tesseract executable and, if available, a tessdata directory.
pub fn locate_tesseract(logger: &Logger) -> Result<TesseractPaths> {
    let executable = find_tesseract_executable()?;
    logger.verbose(&format!("Tesseract found at: {}", executable.display()));

    let tessdata = find_tessdata_dir();
    match &tessdata {
        Some(dir) => logger.verbose(&format!("Using tessdata: {}", dir.display())),
        None => logger.verbose("No tessdata directory found, using Tesseract's default"),
    }

    Ok(TesseractPaths {
        executable,
        tessdata,
    })
}

fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![get_bundled_tesseract_dir(), get_user_tesseract_dir()];
    dirs.extend(SYSTEM_INSTALL_DIRS.iter().map(PathBuf::from));
    dirs
}

fn executable_name() -> String {
    format!("tesseract{}", EXE_SUFFIX)
}

/// Finds the Tesseract executable, checking our local dirs first, then PATH,
/// then the standard install locations.
pub fn find_tesseract_executable() -> Result<PathBuf> {
    let name = executable_name();

    for dir in [get_bundled_tesseract_dir(), get_user_tesseract_dir()] {
        let exe = dir.join(&name);
        if exe.exists() {
            return Ok(exe);
        }
    }

    // Check PATH
    if let Ok(output) = Command::new("tesseract").arg("--version").output() {
        if output.status.success() {
            return Ok(PathBuf::from("tesseract"));
        }
    }

    for dir in SYSTEM_INSTALL_DIRS {
        let exe = Path::new(dir).join(&name);
        if exe.exists() {
            return Ok(exe);
        }
    }

    Err(anyhow!(
        "Tesseract not found. Install Tesseract-OCR, add it to PATH, or place it in {}",
        get_bundled_tesseract_dir().display()
    ))
}

/// Finds a tessdata directory containing English trained data.
pub fn find_tessdata_dir() -> Option<PathBuf> {
    let local = candidate_dirs()
        .into_iter()
        .map(|dir| dir.join("tessdata"))
        .find(|dir| has_eng_traineddata(dir));
    if local.is_some() {
        return local;
    }

    // Check TESSDATA_PREFIX environment variable
    let prefix = PathBuf::from(std::env::var_os("TESSDATA_PREFIX")?);
    [prefix.clone(), prefix.join("tessdata")]
        .into_iter()
        .find(|dir| has_eng_traineddata(dir))
}

fn has_eng_traineddata(dir: &Path) -> bool {
    dir.join(ENG_TRAINEDDATA).exists()
}
