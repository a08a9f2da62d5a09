//! Configuration management
//!
//! Settings live in an optional `settings.json`:
//! ```json
//! {
//!   "analytics": { "tieBreak": "lower_id" }
//! }
//! ```
//! Sections and keys this crate does not manage are kept when saving.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::TieBreakPolicy;

/// Environment variable overriding the configured tie-break policy
pub const TIE_BREAK_ENV: &str = "ACCOUNT_ANALYTICS_TIE_BREAK";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    analytics: AnalyticsSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyticsSettings {
    #[serde(default, deserialize_with = "lenient_tie_break")]
    tie_break: TieBreakPolicy,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Unknown policies fall back to the default instead of failing the whole
/// file, so the rest of the settings survive a save
fn lenient_tie_break<'de, D>(deserializer: D) -> std::result::Result<TieBreakPolicy, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value.as_str().map(|s| s.parse::<TieBreakPolicy>()) {
        Some(Ok(policy)) => Ok(policy),
        _ => {
            tracing::warn!(%value, "Ignoring unknown tie-break policy in settings");
            Ok(TieBreakPolicy::default())
        }
    }
}

/// Analytics configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub tie_break: TieBreakPolicy,
}

impl Config {
    /// Load config from a settings directory
    ///
    /// A missing or unparseable settings file yields the defaults. The
    /// tie-break policy can be overridden with `ACCOUNT_ANALYTICS_TIE_BREAK`.
    pub fn load(settings_dir: &Path) -> Result<Self> {
        let settings_path = settings_dir.join(SETTINGS_FILE);
        let raw = match Self::read_settings(&settings_path)? {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    path = %settings_path.display(),
                    error = %e,
                    "Unparseable settings file, using defaults"
                );
                SettingsFile::default()
            }
        };

        let tie_break = match std::env::var(TIE_BREAK_ENV).ok() {
            Some(value) => match value.parse::<TieBreakPolicy>() {
                Ok(policy) => policy,
                Err(e) => {
                    tracing::warn!(
                        env = TIE_BREAK_ENV,
                        value = %value,
                        error = %e,
                        "Ignoring invalid tie-break override"
                    );
                    raw.analytics.tie_break
                }
            },
            None => raw.analytics.tie_break,
        };

        tracing::debug!(%tie_break, "Loaded analytics configuration");
        Ok(Self { tie_break })
    }

    /// Save config to a settings directory
    ///
    /// Preserves other settings that this crate doesn't manage. An existing
    /// file that is not valid JSON is left untouched and an error returned.
    pub fn save(&self, settings_dir: &Path) -> Result<()> {
        let settings_path = settings_dir.join(SETTINGS_FILE);

        let mut settings = Self::read_settings(&settings_path)?.with_context(|| {
            format!(
                "refusing to overwrite unparseable settings file {}",
                settings_path.display()
            )
        })?;
        settings.analytics.tie_break = self.tie_break;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Outer error is I/O, inner error is a JSON parse failure
    fn read_settings(
        settings_path: &Path,
    ) -> Result<std::result::Result<SettingsFile, serde_json::Error>> {
        if !settings_path.exists() {
            return Ok(Ok(SettingsFile::default()));
        }

        let content = std::fs::read_to_string(settings_path)?;
        Ok(serde_json::from_str(&content))
    }
}
