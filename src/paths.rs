use std::env::consts::EXE_SUFFIX;
use std::path::PathBuf;
use std::sync::OnceLock;

static EXE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// File stem of the interactive region selection helper.
const SELECTION_HELPER_NAME: &str = "screen_selection";

/// Returns the directory containing the executable.
pub fn get_exe_dir() -> &'static PathBuf {
    EXE_DIR.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    })
}

/// Returns the selection helper path: `<exe_dir>/screen_selection[.exe]`
pub fn get_selection_helper_path() -> PathBuf {
    get_exe_dir().join(format!("{}{}", SELECTION_HELPER_NAME, EXE_SUFFIX))
}

/// Returns the bundled tesseract directory: `<exe_dir>/tesseract/`
pub fn get_bundled_tesseract_dir() -> PathBuf {
    get_exe_dir().join("tesseract")
}

/// Returns the per-user tesseract directory: `<local data>/keep-rolling/tesseract/`
pub fn get_user_tesseract_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("keep-rolling")
        .join("tesseract")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_helper_next_to_exe() {
        let path = get_selection_helper_path();
        assert_eq!(path.parent(), Some(get_exe_dir().as_path()));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("screen_selection"));
    }

    #[test]
    fn test_tesseract_dirs() {
        assert!(get_bundled_tesseract_dir().ends_with("tesseract"));
        assert!(get_user_tesseract_dir().ends_with("keep-rolling/tesseract"));
    }
}
