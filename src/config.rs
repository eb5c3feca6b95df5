use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::info;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "lunaria.toml";

/// Top-level Lunaria configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LunariaConfig {
    /// Calendar anchoring.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Lunar model.
    #[serde(default)]
    pub moon: MoonToml,

    /// Range analysis.
    #[serde(default)]
    pub range: RangeToml,

    /// Template storage.
    #[serde(default)]
    pub io: IoToml,
}

impl LunariaConfig {
    /// Loads configuration from `path`, or from [`DEFAULT_CONFIG_PATH`] if it
    /// exists. Falls back to defaults when no file is found.
    ///
    /// An explicitly given path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_or_default(path, Path::new(DEFAULT_CONFIG_PATH))
    }

    fn load_or_default(path: Option<&Path>, default: &Path) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None if default.exists() => default,
            None => {
                info!(path = %default.display(), "no config file found, using defaults");
                return Ok(Self::default());
            }
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_base_year")]
    pub base_year: i32,
    /// Defaults to January 1 of `base_year`.
    #[serde(default)]
    pub epoch: Option<NaiveDate>,
    #[serde(default = "default_day_count")]
    pub day_count: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            base_year: default_base_year(),
            epoch: None,
            day_count: default_day_count(),
        }
    }
}

fn default_base_year() -> i32 {
    2025
}
fn default_day_count() -> String {
    "ordinal".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoonToml {
    /// Defaults to 2000-01-06T18:14:00 UTC.
    #[serde(default)]
    pub reference_new_moon: Option<NaiveDateTime>,
    #[serde(default = "default_synodic_month")]
    pub synodic_month: f64,
}

impl Default for MoonToml {
    fn default() -> Self {
        Self {
            reference_new_moon: None,
            synodic_month: default_synodic_month(),
        }
    }
}

fn default_synodic_month() -> f64 {
    lunaria_moon::SYNODIC_MONTH
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    #[serde(default = "default_max_days")]
    pub max_days: u32,
}

impl Default for RangeToml {
    fn default() -> Self {
        Self {
            max_days: default_max_days(),
        }
    }
}

fn default_max_days() -> u32 {
    lunaria_range::DEFAULT_MAX_DAYS
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Directory for `template-<year>.json` files; templates are kept in
    /// memory only when unset.
    #[serde(default)]
    pub template_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: LunariaConfig = toml::from_str("").unwrap();
        assert_eq!(config.calendar.base_year, 2025);
        assert_eq!(config.calendar.epoch, None);
        assert_eq!(config.calendar.day_count, "ordinal");
        assert_eq!(config.range.max_days, 30);
        assert!(config.io.template_dir.is_none());
    }

    #[test]
    fn full_file_parses() {
        let config: LunariaConfig = toml::from_str(
            r#"
            [calendar]
            base_year = 2030
            epoch = "2030-03-20"
            day_count = "legacy"

            [moon]
            reference_new_moon = "2000-01-06T18:14:00"
            synodic_month = 29.5

            [range]
            max_days = 90

            [io]
            template_dir = "templates"
            "#,
        )
        .unwrap();
        assert_eq!(config.calendar.base_year, 2030);
        assert_eq!(config.calendar.epoch, NaiveDate::from_ymd_opt(2030, 3, 20));
        assert_eq!(config.calendar.day_count, "legacy");
        assert_eq!(config.moon.synodic_month, 29.5);
        assert!(config.moon.reference_new_moon.is_some());
        assert_eq!(config.range.max_days, 90);
        assert_eq!(config.io.template_dir, Some(PathBuf::from("templates")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = toml::from_str::<LunariaConfig>("[calendar]\nbase_yaer = 2025\n");
        assert!(err.is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(LunariaConfig::load(Some(missing.as_path())).is_err());
    }

    #[test]
    fn missing_default_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("lunaria.toml");
        let config = LunariaConfig::load_or_default(None, &default).unwrap();
        assert_eq!(config.calendar.base_year, 2025);
        assert_eq!(config.range.max_days, 30);
    }

    #[test]
    fn present_default_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("lunaria.toml");
        std::fs::write(&default, "[calendar]\nbase_year = 2040\n").unwrap();
        let config = LunariaConfig::load_or_default(None, &default).unwrap();
        assert_eq!(config.calendar.base_year, 2040);
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lunaria.toml");
        std::fs::write(&path, "[range]\nmax_days = 7\n").unwrap();
        let config = LunariaConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.range.max_days, 7);
    }
}
