use pixel_reduce::{ConversionMode, ReductionParameters};
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Side length of new grids
    pub grid_size: usize,

    /// Pixels per cell for PNG export
    pub export_scale: u32,

    /// Optional cap on the number of undo entries (unbounded when absent)
    pub history_depth: Option<usize>,

    /// Default photo conversion settings
    pub reduction: ReductionConfig,

    /// Re-compress exported PNGs with oxipng
    pub optimize_png: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_size: 32,
            export_scale: 20,
            history_depth: None,
            reduction: ReductionConfig::default(),
            optimize_png: false,
        }
    }
}

/// Serde-facing mirror of [`ReductionParameters`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReductionConfig {
    pub target_size: u32,
    pub palette_size: u32,
    pub contrast: u32,
    pub dither_strength: u32,
    #[serde(deserialize_with = "deserialize_mode")]
    pub mode: ConversionMode,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        let params = ReductionParameters::default();
        Self {
            target_size: params.target_size,
            palette_size: params.palette_size,
            contrast: params.contrast_percent,
            dither_strength: params.dither_strength,
            mode: params.mode,
        }
    }
}

impl ReductionConfig {
    pub fn to_parameters(&self) -> ReductionParameters {
        ReductionParameters::new()
            .target_size(self.target_size)
            .palette_size(self.palette_size)
            .contrast(self.contrast)
            .dither_strength(self.dither_strength)
            .mode(self.mode)
    }
}

fn deserialize_mode<'de, D>(deserializer: D) -> Result<ConversionMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from `path`, falling back to defaults when no
    /// path is given or the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        grid_size = config.grid_size,
                        export_scale = config.export_scale,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.grid_size, 32);
        assert_eq!(config.export_scale, 20);
        assert_eq!(config.history_depth, None);
        assert!(!config.optimize_png);
        assert_eq!(config.reduction.to_parameters(), ReductionParameters::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
grid_size: 48
reduction:
  palette_size: 8
  mode: dithered
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.grid_size, 48);
        assert_eq!(config.export_scale, 20);
        assert_eq!(config.reduction.palette_size, 8);
        assert_eq!(config.reduction.target_size, 32);
        assert_eq!(config.reduction.mode, ConversionMode::Dithered);
    }

    #[test]
    fn test_unknown_mode_is_error() {
        let yaml = "reduction:\n  mode: watercolor\n";
        assert!(AppConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/pixcel.yaml")));
        assert_eq!(config, AppConfig::default());
        assert_eq!(AppConfig::load(None), AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "history_depth: 50\noptimize_png: true").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.history_depth, Some(50));
        assert!(config.optimize_png);
    }

    #[test]
    fn test_load_invalid_yaml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "grid_size: [not a number").unwrap();

        assert_eq!(AppConfig::load(Some(file.path())), AppConfig::default());
    }
}
