use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value {
            "small" => FontSize::Small,
            "large" => FontSize::Large,
            _ => FontSize::Medium,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            FontSize::Small => "text-sm",
            FontSize::Medium => "text-base",
            FontSize::Large => "text-lg",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub font_size: FontSize,
}

/// Key/value preference file, read once at startup and written through on
/// every change. No schema versioning; an unreadable file means defaults.
pub struct PrefStore {
    path: PathBuf,
    pub current: Preferences,
}

impl PrefStore {
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        Self { path, current }
    }

    /// # Errors
    ///
    /// Will return `Err` if the preference file cannot be written
    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<(), AppError> {
        self.current.dark_mode = dark_mode;
        self.persist()
    }

    /// # Errors
    ///
    /// Will return `Err` if the preference file cannot be written
    pub fn set_font_size(&mut self, font_size: FontSize) -> Result<(), AppError> {
        self.current.font_size = font_size;
        self.persist()
    }

    fn persist(&self) -> Result<(), AppError> {
        let contents = serde_json::to_string_pretty(&self.current)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
