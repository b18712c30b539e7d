// Configuration type definitions

use serde::Deserialize;

/// Where the confirmation tooltip sits relative to the link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TooltipPosition {
    #[default]
    Top,
    Bottom,
}

/// Tooltip animation name; carried as an option, terminals only fade by dimming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TooltipAnimation {
    #[default]
    Fade,
    None,
}

/// HTTP configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Base for resolving relative toggle urls such as `/p/proj/tickets/_subscribe`
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Honour HTTP_PROXY / HTTPS_PROXY from the environment
    #[serde(default = "default_system_proxy")]
    pub system_proxy: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            base_url: None,
            timeout_secs: default_timeout_secs(),
            system_proxy: default_system_proxy(),
        }
    }
}

fn default_system_proxy() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

/// Session cookie configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_cookie_name() -> String {
    "_session_id".to_string()
}

/// Tooltip configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct TooltipConfig {
    #[serde(default = "default_hide_after_ms")]
    pub hide_after_ms: u64,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_max_width")]
    pub max_width: u16,
    #[serde(default)]
    pub position: TooltipPosition,
    #[serde(default)]
    pub animation: TooltipAnimation,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            hide_after_ms: default_hide_after_ms(),
            delay_ms: default_delay_ms(),
            max_width: default_max_width(),
            position: TooltipPosition::default(),
            animation: TooltipAnimation::default(),
        }
    }
}

fn default_hide_after_ms() -> u64 {
    4000
}

fn default_delay_ms() -> u64 {
    200
}

fn default_max_width() -> u16 {
    300
}

/// Form behaviour configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FormConfig {
    /// Ignore activations while a toggle request is outstanding
    #[serde(default)]
    pub block_while_pending: bool,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub form: FormConfig,
}
