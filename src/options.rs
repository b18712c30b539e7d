//! Subscription options
//!
//! The page configuration object describing which thing the toggle is for,
//! where to POST, and the initial subscription flags. Loaded as JSON, then
//! overridden field by field from the command line.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SubtoggleError;

/// Icon glyph plus its style class
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Icon {
    #[serde(rename = "char", default)]
    pub glyph: String,
    #[serde(default)]
    pub css: String,
}

/// Validated options, immutable after load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionOptions {
    pub thing: String,
    pub subscribed: bool,
    pub subscribed_to_tool: bool,
    pub url: String,
    pub icon: Icon,
}

/// Options as read from JSON or flags, before required fields are checked
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialOptions {
    #[serde(default)]
    pub thing: Option<String>,
    #[serde(default)]
    pub subscribed: Option<bool>,
    #[serde(default)]
    pub subscribed_to_tool: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<Icon>,
}

impl PartialOptions {
    pub fn parse(json: &str) -> Result<Self, SubtoggleError> {
        serde_json::from_str(json).map_err(|e| SubtoggleError::InvalidOptions(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, SubtoggleError> {
        let contents = fs::read_to_string(path).map_err(|source| SubtoggleError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Fields set in `overrides` win
    pub fn merge(self, overrides: PartialOptions) -> Self {
        Self {
            thing: overrides.thing.or(self.thing),
            subscribed: overrides.subscribed.or(self.subscribed),
            subscribed_to_tool: overrides.subscribed_to_tool.or(self.subscribed_to_tool),
            url: overrides.url.or(self.url),
            icon: overrides.icon.or(self.icon),
        }
    }

    pub fn into_options(self) -> Result<SubscriptionOptions, SubtoggleError> {
        let thing = self
            .thing
            .filter(|t| !t.trim().is_empty())
            .ok_or(SubtoggleError::MissingOption("thing"))?;
        let url = self
            .url
            .filter(|u| !u.trim().is_empty())
            .ok_or(SubtoggleError::MissingOption("url"))?;

        Ok(SubscriptionOptions {
            thing,
            subscribed: self.subscribed.unwrap_or(false),
            subscribed_to_tool: self.subscribed_to_tool.unwrap_or(false),
            url,
            icon: self.icon.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod options_tests;
