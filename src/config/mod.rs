// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[transition]` - Fade duration, timing function and overlap policy
//! - `[demo]` - Cards, initial step and auto-advance of the demo window
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `STEP_FADE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use step_fade::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.transition.duration_ms = Some(600.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::transition::{OverlapPolicy, Step, TimingFunction, TransitionDuration};
use crate::error::Result;
use crate::transition::TransitionProps;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "StepFade";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "STEP_FADE_CONFIG_DIR";

// =============================================================================
// Enums
// =============================================================================

/// Serialized form of [`OverlapPolicy`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapSetting {
    #[default]
    Stack,
    Coalesce,
}

impl From<OverlapSetting> for OverlapPolicy {
    fn from(setting: OverlapSetting) -> Self {
        match setting {
            OverlapSetting::Stack => OverlapPolicy::Stack,
            OverlapSetting::Coalesce => OverlapPolicy::Coalesce,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionConfig {
    /// Full fade-out + fade-in duration in milliseconds.
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<f64>,

    /// Easing curve name (e.g., "ease-in-out", "linear").
    #[serde(
        default = "default_timing_function",
        skip_serializing_if = "Option::is_none"
    )]
    pub timing_function: Option<String>,

    /// Whether new requests stack or coalesce with commits in flight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap_policy: Option<OverlapSetting>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            timing_function: default_timing_function(),
            overlap_policy: Some(OverlapSetting::default()),
        }
    }
}

impl TransitionConfig {
    /// Builds transition props, filling unset values with defaults.
    #[must_use]
    pub fn props(&self) -> TransitionProps {
        TransitionProps {
            duration: self
                .duration_ms
                .map_or_else(TransitionDuration::default, TransitionDuration::new),
            timing_function: self
                .timing_function
                .clone()
                .map_or_else(TimingFunction::default, TimingFunction::new),
            ..TransitionProps::default()
        }
    }

    /// Returns the configured overlap policy.
    #[must_use]
    pub fn policy(&self) -> OverlapPolicy {
        self.overlap_policy.unwrap_or_default().into()
    }
}

/// Demo window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DemoConfig {
    /// Text cards to cycle through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,

    /// Step shown at startup. Fractional values are truncated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_step: Option<f64>,

    /// Advance to the next card every N seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_advance_secs: Option<u64>,
}

impl DemoConfig {
    /// Returns the initial step, defaulting to the first card.
    #[must_use]
    pub fn initial_step(&self) -> Step {
        self.initial_step
            .and_then(Step::truncate)
            .unwrap_or_default()
    }

    /// Returns the auto-advance interval clamped to the supported range.
    #[must_use]
    pub fn auto_advance_secs(&self) -> Option<u64> {
        self.auto_advance_secs
            .map(|secs| secs.clamp(MIN_AUTO_ADVANCE_SECS, MAX_AUTO_ADVANCE_SECS))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Transition settings.
    #[serde(default)]
    pub transition: TransitionConfig,

    /// Demo window settings.
    #[serde(default)]
    pub demo: DemoConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_ms() -> Option<f64> {
    Some(DEFAULT_TRANSITION_DURATION_MS)
}

fn default_timing_function() -> Option<String> {
    Some(DEFAULT_TIMING_FUNCTION.to_string())
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring the explicit override first, then
/// `STEP_FADE_CONFIG_DIR`, then the platform default.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            transition: TransitionConfig {
                duration_ms: Some(600.0),
                timing_function: Some("linear".to_string()),
                overlap_policy: Some(OverlapSetting::Coalesce),
            },
            demo: DemoConfig {
                items: Some(vec!["one".to_string(), "two".to_string()]),
                initial_step: Some(1.0),
                auto_advance_secs: Some(5),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[transition\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_returns_default_when_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(nested_dir.clone()))
            .expect("save should create directories");
        assert!(nested_dir.join(CONFIG_FILE).exists());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = toml::from_str("[demo]\nitems = [\"a\"]\n").expect("valid toml");
        assert_eq!(config.transition.duration_ms, Some(DEFAULT_TRANSITION_DURATION_MS));
        assert_eq!(
            config.transition.timing_function.as_deref(),
            Some(DEFAULT_TIMING_FUNCTION)
        );
        assert_eq!(config.transition.policy(), OverlapPolicy::Stack);
    }

    #[test]
    fn overlap_policy_uses_kebab_case() {
        let config: Config =
            toml::from_str("[transition]\noverlap_policy = \"coalesce\"\n").expect("valid toml");
        assert_eq!(config.transition.policy(), OverlapPolicy::Coalesce);
    }

    #[test]
    fn props_reflect_transition_section() {
        let section = TransitionConfig {
            duration_ms: Some(250.0),
            timing_function: None,
            overlap_policy: None,
        };
        let props = section.props();
        assert_eq!(props.duration, TransitionDuration::new(250.0));
        assert_eq!(props.timing_function, TimingFunction::default());
    }

    #[test]
    fn demo_initial_step_is_truncated() {
        let demo = DemoConfig {
            initial_step: Some(2.8),
            ..DemoConfig::default()
        };
        assert_eq!(demo.initial_step(), Step::new(2));
        assert_eq!(DemoConfig::default().initial_step(), Step::new(0));
    }

    #[test]
    fn demo_auto_advance_is_clamped() {
        let demo = DemoConfig {
            auto_advance_secs: Some(0),
            ..DemoConfig::default()
        };
        assert_eq!(demo.auto_advance_secs(), Some(MIN_AUTO_ADVANCE_SECS));
    }
}
