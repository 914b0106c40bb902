//! Launch settings, read from an optional yaml file.
//!
//! ```yaml
//! width: 1280
//! height: 800
//! fps: 60
//! fullscreen: false
//! trail: 0.2
//! pattern: box
//! ```

use directories_next::BaseDirs;
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::logging::{debug, info};
use crate::render::DEFAULT_VEIL;

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_FPS: f32 = 60.0;

const MIN_DIMENSION: u32 = 200;
const MAX_FPS: f32 = 240.0;
const MIN_TRAIL: f32 = 0.01;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub fps: f32,
    pub fullscreen: bool,
    /// Opacity of the veil laid over previous frames. Lower values leave
    /// longer trails.
    pub trail: f32,
    /// Pattern id to open directly instead of the dashboard
    pub pattern: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            fullscreen: false,
            trail: DEFAULT_VEIL,
            pattern: None,
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|base| base.config_dir().join("BreathLab"))
}

pub fn default_settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.yaml"))
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> Result<Self, Box<dyn Error>> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings = serde_yml::from_str::<Settings>(yaml)?;
        Ok(settings)
    }

    pub fn from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let yaml = fs::read_to_string(path)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        Self::from_yaml(&yaml)
            .map_err(|e| format!("{}: {}", path.display(), e).into())
    }

    /// An explicit `path` must exist. Without one, the default settings file
    /// is used when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        if let Some(path) = path {
            info!("Loading settings from {}", path.display());
            return Self::from_path(path);
        }

        match default_settings_path() {
            Some(path) if path.exists() => {
                info!("Loading settings from {}", path.display());
                Self::from_path(&path)
            }
            _ => {
                debug!("No settings file; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Pulls out-of-range values back into a usable range
    pub fn validated(mut self) -> Self {
        self.width = self.width.max(MIN_DIMENSION);
        self.height = self.height.max(MIN_DIMENSION);
        self.fps = if self.fps.is_finite() {
            self.fps.clamp(1.0, MAX_FPS)
        } else {
            DEFAULT_FPS
        };
        self.trail = if self.trail.is_finite() {
            self.trail.clamp(MIN_TRAIL, 1.0)
        } else {
            DEFAULT_VEIL
        };
        self.pattern = self.pattern.filter(|id| !id.trim().is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml("fps: 30\npattern: fire\n").unwrap();
        assert_approx_eq!(settings.fps, 30.0);
        assert_eq!(settings.pattern.as_deref(), Some("fire"));
        assert_eq!(settings.width, DEFAULT_WIDTH);
        assert_approx_eq!(settings.trail, DEFAULT_VEIL);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Settings::from_yaml("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::from_yaml("fps: 30\ncolour: red\n").is_err());
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(Settings::from_yaml("width: wide\n").is_err());
    }

    #[test]
    fn validated_clamps() {
        let settings = Settings {
            width: 10,
            height: 5000,
            fps: 0.0,
            trail: 4.0,
            pattern: Some(" ".to_string()),
            ..Settings::default()
        }
        .validated();
        assert_eq!(settings.width, MIN_DIMENSION);
        assert_eq!(settings.height, 5000);
        assert_approx_eq!(settings.fps, 1.0);
        assert_approx_eq!(settings.trail, 1.0);
        assert_eq!(settings.pattern, None);
    }

    #[test]
    fn from_path_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "breath-settings-{}.yaml",
            std::process::id()
        ));
        fs::write(&path, "width: 640\nheight: 480\nfullscreen: true\n")
            .unwrap();
        let settings = Settings::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!((settings.width, settings.height), (640, 480));
        assert!(settings.fullscreen);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let path = Path::new("/definitely/not/here/settings.yaml");
        let err = Settings::load(Some(path)).unwrap_err();
        assert!(err.to_string().contains("settings.yaml"));
    }
}
