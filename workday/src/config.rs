//! Application configuration, read from a TOML file.
//!
//! ```toml
//! region = "NL"
//!
//! [work]
//! weekdays = [1, 2, 3, 4, 5]
//! disabled_holiday_dates = ["2024-05-09"]
//!
//! [[work.custom_holidays]]
//! date = "2024-12-24"
//! name = "Kerstavond"
//! kind = "company"
//!
//! [[work.excluded_ranges]]
//! id = "summer"
//! start = "2024-07-15"
//! end = "2024-08-09"
//! label = "Zomerverlof"
//! kind = "leave"
//! ```
//!
//! Every key is optional. Weekdays are numbered Sunday = 0 … Saturday = 6.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use wd_calc::WorkDayConfig;
use wd_time::Region;

/// Configuration file looked up when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "workday.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Region identifier (`BE-VLG`, `BE-WAL`, `BE-BRU`, `NL`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Working-day settings.
    pub work: WorkDayConfig,
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(s).context("failed to parse TOML config")?;
        config
            .work
            .validate()
            .context("invalid [work] section in config")?;
        Ok(config)
    }

    /// Read the configuration at `path`.
    ///
    /// When `required` is false a missing file yields the defaults; any
    /// other read or parse failure is an error either way.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !required && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&toml_str)
            .with_context(|| format!("in config file: {}", path.display()))?;
        debug!(
            path = %path.display(),
            region = config.region.as_deref().unwrap_or("-"),
            custom_holidays = config.work.custom_holidays.len(),
            excluded_ranges = config.work.excluded_ranges.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Resolve the region: `override_id` first, then the file, then the
    /// default region.
    pub fn region(&self, override_id: Option<&str>) -> Result<Region> {
        match override_id.or(self.region.as_deref()) {
            Some(id) => Region::from_id(id).with_context(|| {
                let known: Vec<String> = Region::ALL.iter().map(|r| r.to_string()).collect();
                format!("known regions: {}", known.join(", "))
            }),
            None => Ok(Region::default()),
        }
    }

    /// Serialise back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialise config")
    }
}
