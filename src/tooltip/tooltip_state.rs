use std::time::{Duration, Instant};

use crate::config::{TooltipAnimation, TooltipConfig, TooltipPosition};

/// What makes the tooltip appear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipTrigger {
    /// Only shown and hidden by the owning component
    Manual,
}

/// Options fixed when the tooltip is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipOptions {
    pub content: String,
    pub animation: TooltipAnimation,
    /// Open delay. A terminal popup has no pending-open state, so the popup
    /// is drawn dimmed for this long after `show` instead
    pub delay: Duration,
    pub trigger: TooltipTrigger,
    pub position: TooltipPosition,
    /// Carried for parity with page-side options; never set for the link
    pub icon_cloning: bool,
    pub max_width: u16,
}

impl TooltipOptions {
    /// Manual-trigger options for the subscription link
    pub fn from_config(config: &TooltipConfig) -> Self {
        Self {
            content: String::new(),
            animation: config.animation,
            delay: Duration::from_millis(config.delay_ms),
            trigger: TooltipTrigger::Manual,
            position: config.position,
            icon_cloning: false,
            max_width: config.max_width,
        }
    }
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self::from_config(&TooltipConfig::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TooltipState {
    /// `None` until attached; a detached tooltip ignores show
    options: Option<TooltipOptions>,
    content: String,
    shown_at: Option<Instant>,
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, options: TooltipOptions) {
        self.content = options.content.clone();
        self.options = Some(options);
    }

    pub fn is_attached(&self) -> bool {
        self.options.is_some()
    }

    pub fn options(&self) -> Option<&TooltipOptions> {
        self.options.as_ref()
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns false when not attached
    pub fn show(&mut self, now: Instant) -> bool {
        if !self.is_attached() {
            return false;
        }
        if self.shown_at.is_none() {
            self.shown_at = Some(now);
        }
        true
    }

    pub fn hide(&mut self) {
        self.shown_at = None;
    }

    pub fn is_visible(&self) -> bool {
        self.shown_at.is_some()
    }

    /// True while the open delay is still running under a fade animation
    pub fn is_fading(&self, now: Instant) -> bool {
        match (&self.options, self.shown_at) {
            (Some(options), Some(shown_at)) => {
                options.animation == TooltipAnimation::Fade
                    && now.saturating_duration_since(shown_at) < options.delay
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "tooltip_state_tests.rs"]
mod tooltip_state_tests;
