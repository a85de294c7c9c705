use crate::app::error::Result;
use crate::tools::color_picker::AfterSelect;
use crate::tools::sampler::{SampleConfig, SampleSize, SampleSource};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Persisted color picker options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub sample_size: SampleSize,
    pub sample_source: SampleSource,
    pub after_select: AfterSelect,
}

impl PickerSettings {
    pub fn sample_config(&self) -> SampleConfig {
        SampleConfig::new(self.sample_size, self.sample_source)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&text)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded picker settings");
        Ok(settings)
    }

    /// Like [`PickerSettings::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no picker settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::error::AppError;

    #[test]
    fn test_settings_json_shape() {
        let s = PickerSettings {
            sample_size: SampleSize::Region5,
            sample_source: SampleSource::Image,
            after_select: AfterSelect::SwitchToDefault,
        };
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["sample_size"], 5);
        assert_eq!(json["sample_source"], "image");
        assert_eq!(json["after_select"], "switch_to_default");
    }

    #[test]
    fn test_settings_partial_json_uses_defaults() {
        let s: PickerSettings = serde_json::from_str(r#"{ "sample_size": 9 }"#).unwrap();
        assert_eq!(s.sample_size, SampleSize::Region9);
        assert_eq!(s.sample_source, SampleSource::Layer);
        assert_eq!(s.after_select, AfterSelect::None);
    }

    #[test]
    fn test_settings_reject_even_size() {
        let r: std::result::Result<PickerSettings, _> = serde_json::from_str(r#"{ "sample_size": 4 }"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_settings_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("picker.json");
        let s = PickerSettings {
            sample_size: SampleSize::Region3,
            sample_source: SampleSource::Image,
            after_select: AfterSelect::Previous,
        };
        s.save(&path).unwrap();
        assert_eq!(PickerSettings::load(&path).unwrap(), s);
    }

    #[test]
    fn test_settings_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert_eq!(PickerSettings::load_or_default(&path).unwrap(), PickerSettings::default());
        assert!(matches!(PickerSettings::load(&path), Err(AppError::Io(_))));
    }

    #[test]
    fn test_settings_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(PickerSettings::load(&path), Err(AppError::Settings(_))));
    }
}
