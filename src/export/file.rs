//! File saving for finished drawings.

use super::types::ExportError;
use chrono::Local;
use std::fs;
use std::path::PathBuf;

/// Drawings are always written as PNG.
const EXTENSION: &str = "png";

/// Where and under which name drawings are saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSaveConfig {
    /// Target directory, created on first save
    pub save_directory: PathBuf,
    /// File stem; chrono format specifiers are expanded at save time
    pub filename_template: String,
}

impl FileSaveConfig {
    /// File name for a drawing written now, e.g. `drawing.png`.
    pub fn file_name(&self) -> String {
        let stem = Local::now().format(&self.filename_template);
        format!("{stem}.{EXTENSION}")
    }
}

/// Writes PNG bytes into the configured directory and returns the file path.
///
/// The directory is created when missing and an existing file with the same
/// name is overwritten. On unix the file is readable by its owner only.
pub fn save_drawing(png: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(&config.save_directory)?;
    let file_path = config.save_directory.join(config.file_name());

    fs::write(&file_path, png)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o600))?;
    }

    log::info!("Drawing saved: {} ({} bytes)", file_path.display(), png.len());
    Ok(file_path)
}

/// Expands a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: PathBuf, template: &str) -> FileSaveConfig {
        FileSaveConfig {
            save_directory: dir,
            filename_template: template.to_string(),
        }
    }

    #[test]
    fn file_name_expands_template() {
        let temp = TempDir::new().unwrap();
        assert_eq!(config_in(temp.path().into(), "drawing").file_name(), "drawing.png");

        let dated = config_in(temp.path().into(), "sketch_%Y").file_name();
        assert!(dated.starts_with("sketch_20"), "{dated}");
        assert!(dated.ends_with(".png"));
    }

    #[test]
    fn tilde_expands_to_home() {
        assert!(!expand_tilde("~/Pictures").to_string_lossy().starts_with('~'));
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
    }

    #[test]
    fn save_creates_directory_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let config = config_in(temp.path().join("nested").join("out"), "drawing");

        let first = save_drawing(b"first", &config).unwrap();
        let second = save_drawing(b"second", &config).unwrap();
        assert_eq!(first, second);
        assert!(second.ends_with("drawing.png"));
        assert_eq!(fs::read(&second).unwrap(), b"second");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&second).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn save_into_a_file_path_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("taken");
        fs::write(&blocker, b"").unwrap();
        let config = config_in(blocker, "drawing");
        assert!(matches!(
            save_drawing(b"png", &config),
            Err(ExportError::SaveError(_))
        ));
    }
}
