use std::time::{Duration, Instant};

use crate::config::TooltipConfig;
use crate::toggle::FormId;
use crate::tooltip::{TooltipOptions, TooltipState};

/// Scheduled tooltip hide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTimer {
    pub id: u64,
    pub deadline: Instant,
}

/// Component-local state of one subscription form
#[derive(Debug)]
pub struct SubscriptionForm {
    id: FormId,
    pub tooltip: TooltipState,
    tooltip_options: TooltipOptions,
    hide_after: Duration,
    /// At most one hide is ever pending
    tooltip_timeout: Option<HideTimer>,
    next_timer_id: u64,
}

impl SubscriptionForm {
    pub fn new(id: FormId, config: &TooltipConfig) -> Self {
        Self {
            id,
            tooltip: TooltipState::new(),
            tooltip_options: TooltipOptions::from_config(config),
            hide_after: Duration::from_millis(config.hide_after_ms),
            tooltip_timeout: None,
            next_timer_id: 0,
        }
    }

    pub fn id(&self) -> FormId {
        self.id
    }

    /// Attach the tooltip to the link
    pub fn mount(&mut self) {
        self.tooltip.attach(self.tooltip_options.clone());
        log::debug!("Mounted subscription form {:?}", self.id);
    }

    pub fn is_mounted(&self) -> bool {
        self.tooltip.is_attached()
    }

    pub fn pending_hide(&self) -> Option<HideTimer> {
        self.tooltip_timeout
    }

    /// Replace any pending hide with a new one `hide_after` from `now`
    pub(super) fn schedule_hide(&mut self, now: Instant) -> HideTimer {
        if let Some(old) = self.tooltip_timeout.take() {
            log::debug!("Cancelled tooltip hide timer {}", old.id);
        }
        self.next_timer_id += 1;
        let timer = HideTimer {
            id: self.next_timer_id,
            deadline: now + self.hide_after,
        };
        self.tooltip_timeout = Some(timer);
        timer
    }

    /// Fire the pending hide if due; returns true if the tooltip was hidden
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.tooltip_timeout {
            Some(timer) if now >= timer.deadline => {
                self.tooltip_timeout = None;
                self.tooltip.hide();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "form_state_tests.rs"]
mod form_state_tests;
