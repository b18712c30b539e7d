use std::time::Instant;

use super::form_state::SubscriptionForm;
use super::form_view::confirmation_message;
use crate::session::CookieSource;
use crate::store::{StatePatch, Store};
use crate::toggle::{ToggleAction, ToggleBody, ToggleOutcome, ToggleRequest};

impl SubscriptionForm {
    /// Handle activation of the link
    ///
    /// Marks the store in progress and returns the request to send. The
    /// session cookie is read fresh on every click.
    pub fn handle_click(
        &self,
        store: &mut Store,
        cookies: &CookieSource,
        cookie_name: &str,
        request_id: u64,
    ) -> ToggleRequest {
        let state = store.state();
        let request = ToggleRequest {
            form_id: self.id(),
            request_id,
            url: state.url.clone(),
            body: ToggleBody {
                session_id: cookies.read(cookie_name),
                action: ToggleAction::for_current(state.subscribed),
            },
        };

        store.set_state(StatePatch::in_progress(true));
        request
    }

    /// Apply a settled request
    ///
    /// Only an `ok` reply changes subscription state and shows the
    /// confirmation; every outcome clears the in-progress flag. Returns true
    /// if the tooltip was shown.
    pub fn handle_settled(
        &mut self,
        store: &mut Store,
        outcome: &ToggleOutcome,
        now: Instant,
    ) -> bool {
        let shown = match outcome {
            Ok(reply) if reply.is_ok() => {
                store.set_state(StatePatch::subscription(
                    reply.subscribed,
                    reply.subscribed_to_tool,
                ));
                let text = confirmation_message(
                    &store.state().thing,
                    reply.subscribed,
                    reply.subscribed_to_tool,
                );
                self.tooltip.set_content(text);
                let shown = self.tooltip.show(now);
                self.schedule_hide(now);
                shown
            }
            Ok(reply) => {
                log::warn!("Toggle rejected with status {:?}", reply.status);
                false
            }
            Err(e) => {
                log::warn!("Toggle failed: {}", e);
                false
            }
        };

        store.set_state(StatePatch::in_progress(false));
        shown
    }
}

#[cfg(test)]
#[path = "form_events_tests.rs"]
mod form_events_tests;
