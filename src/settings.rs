//! User settings model
//!
//! Settings are persisted as a single JSON blob under the `appSettings`
//! storage key, using camelCase field names for compatibility with data
//! written by earlier releases. Every field carries a serde default so a
//! partial persisted blob merges over the built-in defaults instead of
//! replacing them; unknown keys are ignored on load.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-facing settings, one boolean per toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Use the dark theme throughout the app
    pub dark_mode: bool,
    /// Fire a haptic pulse after a successful clear
    pub haptic_feedback: bool,
    /// Automatically clear badges when the app launches
    pub clear_on_launch: bool,
    /// Ask before destructive actions (history reset)
    pub show_confirmation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            haptic_feedback: true,
            clear_on_launch: false,
            show_confirmation: true,
        }
    }
}

impl Settings {
    /// Read the value for a single setting key
    #[must_use]
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::DarkMode => self.dark_mode,
            SettingKey::HapticFeedback => self.haptic_feedback,
            SettingKey::ClearOnLaunch => self.clear_on_launch,
            SettingKey::ShowConfirmation => self.show_confirmation,
        }
    }

    /// Replace the value for a single setting key, leaving the rest untouched
    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::DarkMode => self.dark_mode = value,
            SettingKey::HapticFeedback => self.haptic_feedback = value,
            SettingKey::ClearOnLaunch => self.clear_on_launch = value,
            SettingKey::ShowConfirmation => self.show_confirmation = value,
        }
    }
}

/// The four recognized setting names
///
/// `update_setting` is restricted to this set, so callers cannot invent new
/// keys and the persisted blob stays a closed schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    /// `darkMode`
    DarkMode,
    /// `hapticFeedback`
    HapticFeedback,
    /// `clearOnLaunch`
    ClearOnLaunch,
    /// `showConfirmation`
    ShowConfirmation,
}

impl SettingKey {
    /// The camelCase name used in the persisted JSON blob
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DarkMode => "darkMode",
            Self::HapticFeedback => "hapticFeedback",
            Self::ClearOnLaunch => "clearOnLaunch",
            Self::ShowConfirmation => "showConfirmation",
        }
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SettingKey {
    type Err = UnknownSettingKey;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "darkMode" | "dark-mode" => Ok(Self::DarkMode),
            "hapticFeedback" | "haptic-feedback" => Ok(Self::HapticFeedback),
            "clearOnLaunch" | "clear-on-launch" => Ok(Self::ClearOnLaunch),
            "showConfirmation" | "show-confirmation" => Ok(Self::ShowConfirmation),
            _ => Err(UnknownSettingKey(s.to_string())),
        }
    }
}

/// Error returned when parsing a setting name that is not one of the four
/// recognized keys
#[derive(Debug, Error)]
#[error("unknown setting key: {0}")]
pub struct UnknownSettingKey(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.dark_mode);
        assert!(settings.haptic_feedback);
        assert!(!settings.clear_on_launch);
        assert!(settings.show_confirmation);
    }

    #[test]
    fn test_partial_blob_merges_over_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"darkMode": true}"#).unwrap();
        assert!(settings.dark_mode);
        // The other three keep their defaults
        assert!(settings.haptic_feedback);
        assert!(!settings.clear_on_launch);
        assert!(settings.show_confirmation);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let settings: Settings =
            serde_json::from_str(r#"{"hapticFeedback": false, "futureSetting": 42}"#).unwrap();
        assert!(!settings.haptic_feedback);
        assert!(!settings.dark_mode);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"darkMode\""));
        assert!(json.contains("\"hapticFeedback\""));
        assert!(json.contains("\"clearOnLaunch\""));
        assert!(json.contains("\"showConfirmation\""));
    }

    #[test]
    fn test_get_set_single_key() {
        let mut settings = Settings::default();
        settings.set(SettingKey::ClearOnLaunch, true);
        assert!(settings.get(SettingKey::ClearOnLaunch));
        // Only that key changed
        assert_eq!(
            Settings {
                clear_on_launch: true,
                ..Settings::default()
            },
            settings
        );
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!(
            "darkMode".parse::<SettingKey>().unwrap(),
            SettingKey::DarkMode
        );
        assert_eq!(
            "show-confirmation".parse::<SettingKey>().unwrap(),
            SettingKey::ShowConfirmation
        );
        assert!("badgeColor".parse::<SettingKey>().is_err());
    }
}
