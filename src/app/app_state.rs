use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::Config;
use crate::form::SubscriptionForm;
use crate::options::SubscriptionOptions;
use crate::session::CookieSource;
use crate::store::Store;
use crate::toggle::{FormId, ToggleError, ToggleResponse, WorkerHandle, spawn_worker};

/// Application state
pub struct App {
    pub store: Store,
    pub form: SubscriptionForm,
    pub cookies: CookieSource,
    pub cookie_name: String,
    pub block_while_pending: bool,
    /// Where the link was last drawn, for mouse hit testing
    pub link_area: Option<Rect>,
    pub should_quit: bool,
    pub(crate) worker: Option<WorkerHandle>,
    pub(crate) response_rx: Option<Receiver<ToggleResponse>>,
    next_request_id: u64,
    dirty: Rc<Cell<bool>>,
    fading: bool,
}

impl App {
    /// Create the app, mount the form and seed the store from `options`
    pub fn new(options: SubscriptionOptions, config: &Config, cookies: CookieSource) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let mut store = Store::new();
        let render_flag = Rc::clone(&dirty);
        store.subscribe(move |_| render_flag.set(true));

        let mut form = SubscriptionForm::new(FormId(1), &config.tooltip);
        form.mount();

        // First render
        store.set_state(options.into());

        Self {
            store,
            form,
            cookies,
            cookie_name: config.session.cookie_name.clone(),
            block_while_pending: config.form.block_while_pending,
            link_area: None,
            should_quit: false,
            worker: None,
            response_rx: None,
            next_request_id: 0,
            dirty,
            fading: false,
        }
    }

    /// Start the background toggle worker
    pub fn start_worker(&mut self, config: &Config) {
        let (response_tx, response_rx) = mpsc::channel();
        self.worker = Some(spawn_worker(config, response_tx));
        self.response_rx = Some(response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Whether a redraw is needed; clears the flag
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Activate the link; returns true if a request was issued
    pub fn toggle(&mut self) -> bool {
        if self.block_while_pending && self.store.state().in_progress {
            log::debug!("Ignoring toggle while a request is outstanding");
            return false;
        }

        self.next_request_id += 1;
        let request = self.form.handle_click(
            &mut self.store,
            &self.cookies,
            &self.cookie_name,
            self.next_request_id,
        );

        let sent = self
            .worker
            .as_ref()
            .is_some_and(|worker| worker.send(request));
        if !sent {
            // Nothing will ever settle this request
            let outcome = Err(ToggleError::NotConfigured(
                "toggle worker is not running".to_string(),
            ));
            self.form
                .handle_settled(&mut self.store, &outcome, Instant::now());
        }
        true
    }

    /// Apply every settled request waiting on the response channel
    pub fn poll_responses(&mut self, now: Instant) {
        let Some(rx) = &self.response_rx else {
            return;
        };

        let mut settled = Vec::new();
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(response) => settled.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
        if disconnected {
            log::debug!("Toggle worker disconnected");
            self.response_rx = None;
        }

        for response in settled {
            if response.form_id != self.form.id() {
                log::warn!(
                    "Dropping response {} for unknown form {:?}",
                    response.request_id,
                    response.form_id
                );
                continue;
            }
            self.form
                .handle_settled(&mut self.store, &response.outcome, now);
            self.mark_dirty();
        }
    }

    /// Advance timers; hides the tooltip when its hide is due
    pub fn tick(&mut self, now: Instant) {
        if self.form.tick(now) {
            self.mark_dirty();
        }

        // Redraw through the fade and once more when it ends
        let fading = self.form.tooltip.is_fading(now);
        if fading || self.fading {
            self.mark_dirty();
        }
        self.fading = fading;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
