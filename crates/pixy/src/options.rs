use pixy_engine_edit::{EditorSettings, ImageFormat};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

const OPTIONS_FILE: &str = "options.toml";

/// Persistent options of the command line tool
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Where exported images go; the working directory if unset
    pub export_directory: Option<PathBuf>,

    /// `png` or `jpeg`
    pub export_format: Option<String>,

    /// Target width in pixels of exported images
    pub export_width: Option<u32>,

    /// Starting point for every new grid
    pub editor: EditorSettings,
}

impl Options {
    /// Path of `options.toml` in the per-user configuration directory
    pub fn options_file() -> Option<PathBuf> {
        Self::get_config_dir().map(|dir| dir.join(OPTIONS_FILE))
    }

    /// Read options from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).with_context(|| format!("Can't read options file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Invalid options file {}", path.display()))
    }

    /// Write options to `path`, creating its directory if needed.
    pub fn store_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.exists()) {
            fs::create_dir_all(dir).with_context(|| format!("Can't create configuration directory {}", dir.display()))?;
        }
        let text = toml::to_string(self).context("Can't serialize options")?;
        fs::write(path, text).with_context(|| format!("Can't write options file {}", path.display()))
    }

    /// Load the stored options. Unreadable options are logged and replaced by defaults.
    pub fn load_options() -> Self {
        let Some(path) = Self::options_file() else {
            return Self::default();
        };
        Self::load_from(&path).unwrap_or_else(|err| {
            log::error!("{err:#}");
            Self::default()
        })
    }

    pub fn store_options(&self) -> anyhow::Result<()> {
        let path = Self::options_file().context("No configuration directory available")?;
        self.store_to(&path)?;
        log::info!("Stored options in {}", path.display());
        Ok(())
    }

    /// Returns the configuration directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "pixy").map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }

    /// Stored export format, PNG if unset or unknown
    pub fn export_format(&self) -> ImageFormat {
        match self.export_format.as_deref() {
            Some(name) => ImageFormat::from_extension(name).unwrap_or_else(|| {
                log::warn!("Unknown export format '{name}' in options, using PNG");
                ImageFormat::Png
            }),
            None => ImageFormat::Png,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixy_engine_edit::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_options_round_trip() {
        let mut options = Options {
            export_directory: Some(PathBuf::from("/tmp/art")),
            export_format: Some("jpeg".to_string()),
            ..Default::default()
        };
        options.editor.background_color = Color::WHITE;

        let text = toml::to_string(&options).unwrap();
        let loaded: Options = toml::from_str(&text).unwrap();
        assert_eq!(loaded, options);
        assert_eq!(loaded.export_format(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_store_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join(OPTIONS_FILE);
        assert_eq!(Options::load_from(&path).unwrap(), Options::default());

        let mut options = Options {
            export_width: Some(450),
            ..Default::default()
        };
        options.editor.grid_spacing = 4;
        options.store_to(&path).unwrap();
        assert_eq!(Options::load_from(&path).unwrap(), options);
    }

    #[test]
    fn test_broken_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OPTIONS_FILE);
        fs::write(&path, "export_width = \"wide\"").unwrap();
        assert!(Options::load_from(&path).is_err());
    }

    #[test]
    fn test_empty_options_file() {
        let loaded: Options = toml::from_str("").unwrap();
        assert_eq!(loaded, Options::default());
        assert_eq!(loaded.export_format(), ImageFormat::Png);
    }
}
