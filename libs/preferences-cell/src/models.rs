use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    /// Root element font size in CSS pixels
    pub fn root_px(self) -> u8 {
        match self {
            FontSize::Small => 14,
            FontSize::Medium => 16,
            FontSize::Large => 18,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| PreferenceError::UnknownFontSize(s.to_string()))
    }
}

/// Display preferences. Fields missing from a stored record take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub is_dark_mode: bool,
    pub font_size: FontSize,
    pub high_contrast: bool,
}

impl Preferences {
    /// Classes the presentation layer puts on the document root
    pub fn root_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(2);
        if self.is_dark_mode {
            classes.push("dark");
        }
        if self.high_contrast {
            classes.push("high-contrast");
        }
        classes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceEvent {
    Changed(Preferences),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Unknown font size: {0} (expected small, medium or large)")]
    UnknownFontSize(String),
}
