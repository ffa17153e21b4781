//! Launch configuration.
//!
//! Values come from the defaults, then an optional JSON file, then whatever
//! the command line overrides. The result is validated once at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content::{CardContent, DEFAULT_RECIPIENT, DEFAULT_SENDER};
use crate::device::Viewport;
use crate::error::{CardError, CardResult};
use crate::ornament::DEFAULT_SEED;
use crate::revision::Revision;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub revision: Revision,
    pub recipient: String,
    pub sender: String,
    /// Seed for the ornament layout and confetti pieces
    pub ornament_seed: u64,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            revision: Revision::default(),
            recipient: DEFAULT_RECIPIENT.to_string(),
            sender: DEFAULT_SENDER.to_string(),
            ornament_seed: DEFAULT_SEED,
            window_width: 700,
            window_height: 900,
        }
    }
}

impl CardConfig {
    /// `<config_dir>/greetcard/card.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("greetcard").join("card.json"))
    }

    pub fn from_file(path: &Path) -> CardResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: CardConfig = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded card config");
        Ok(config)
    }

    /// Read `explicit` if given (it must exist), otherwise the default path
    /// when present, otherwise the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> CardResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> CardResult<()> {
        if self.recipient.trim().is_empty() {
            return Err(CardError::Config("recipient must not be empty".to_string()));
        }
        if self.sender.trim().is_empty() {
            return Err(CardError::Config("sender must not be empty".to_string()));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(CardError::Config(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    pub fn content(&self) -> CardContent {
        CardContent::new(self.recipient.trim(), self.sender.trim())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = CardConfig::default();
        config.validate().unwrap();
        assert_eq!(config.revision, Revision::Dialog);
        assert_eq!(config.content().salutation(), "Dear Catherine,");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "revision": "classic", "recipient": "Ada" }}"#).unwrap();

        let config = CardConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.revision, Revision::Classic);
        assert_eq!(config.recipient, "Ada");
        assert_eq!(config.sender, DEFAULT_SENDER);
        assert_eq!(config.window_width, 700);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CardConfig::load(Some(&dir.path().join("nope.json")));
        assert!(matches!(result, Err(CardError::Io(_))));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ revision: ").unwrap();
        assert!(matches!(
            CardConfig::load(Some(file.path())),
            Err(CardError::Json(_))
        ));
    }

    #[test]
    fn blank_names_rejected() {
        let config = CardConfig {
            recipient: "  ".to_string(),
            ..CardConfig::default()
        };
        assert!(matches!(config.validate(), Err(CardError::Config(_))));
    }

    #[test]
    fn zero_window_rejected() {
        let config = CardConfig {
            window_height: 0,
            ..CardConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
