//! Persisting rendered images.

use std::path::{Path, PathBuf};

use crate::{EngineError, ImageFormat, Result};

/// Stores encoded image bytes somewhere outside the editor.
pub trait ImageSaver {
    /// Save `bytes` under `name`; returns where the image ended up.
    fn save(&self, name: &str, format: ImageFormat, bytes: &[u8]) -> Result<PathBuf>;
}

/// Saves images as files into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    directory: PathBuf,
}

impl DirectorySaver {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into() }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path for an image named `name`.
    pub fn target_path(&self, name: &str, format: ImageFormat) -> PathBuf {
        self.directory.join(format!("{}.{}", sanitize_file_name(name), format.extension()))
    }
}

impl ImageSaver for DirectorySaver {
    fn save(&self, name: &str, format: ImageFormat, bytes: &[u8]) -> Result<PathBuf> {
        if !self.directory.exists() {
            std::fs::create_dir_all(&self.directory).map_err(|e| EngineError::image_save_failed(&self.directory, e))?;
        }
        let path = self.target_path(name, format);
        std::fs::write(&path, bytes).map_err(|e| EngineError::image_save_failed(&path, e))?;
        log::info!("Saved {} ({} bytes) to {}", format.name(), bytes.len(), path.display());
        Ok(path)
    }
}

/// Turn a grid name into a portable file name.
pub fn sanitize_file_name(name: &str) -> String {
    let result: String = name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if result.is_empty() {
        "untitled".to_string()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("My Pixel Art"), "My_Pixel_Art");
        assert_eq!(sanitize_file_name("../etc/passwd"), "___etc_passwd");
        assert_eq!(sanitize_file_name("   "), "untitled");
        assert_eq!(sanitize_file_name("smiley-01"), "smiley-01");
    }
}
