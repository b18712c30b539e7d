//! Form state container
//!
//! Holds everything the subscription form renders from. State only changes
//! through [`Store::set_state`], which merges a patch and then hands a fresh
//! props snapshot to every subscribed render callback.

use crate::options::{Icon, SubscriptionOptions};

/// The single view state for the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub thing: String,
    pub subscribed: bool,
    pub subscribed_to_tool: bool,
    pub url: String,
    pub icon: Icon,
    pub in_progress: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            thing: "tool".to_string(),
            subscribed: false,
            subscribed_to_tool: false,
            url: String::new(),
            icon: Icon::default(),
            in_progress: false,
        }
    }
}

/// Immutable snapshot handed to render
pub type FormProps = ViewState;

/// Partial update; `None` fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub thing: Option<String>,
    pub subscribed: Option<bool>,
    pub subscribed_to_tool: Option<bool>,
    pub url: Option<String>,
    pub icon: Option<Icon>,
    pub in_progress: Option<bool>,
}

impl StatePatch {
    pub fn in_progress(in_progress: bool) -> Self {
        Self {
            in_progress: Some(in_progress),
            ..Default::default()
        }
    }

    pub fn subscription(subscribed: bool, subscribed_to_tool: bool) -> Self {
        Self {
            subscribed: Some(subscribed),
            subscribed_to_tool: Some(subscribed_to_tool),
            ..Default::default()
        }
    }
}

impl From<SubscriptionOptions> for StatePatch {
    fn from(options: SubscriptionOptions) -> Self {
        Self {
            thing: Some(options.thing),
            subscribed: Some(options.subscribed),
            subscribed_to_tool: Some(options.subscribed_to_tool),
            url: Some(options.url),
            icon: Some(options.icon),
            in_progress: None,
        }
    }
}

type RenderCallback = Box<dyn FnMut(&FormProps)>;

/// State container with a single update entry point
#[derive(Default)]
pub struct Store {
    state: ViewState,
    subscribers: Vec<RenderCallback>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn props(&self) -> FormProps {
        self.state.clone()
    }

    /// Register a callback invoked after every state change
    pub fn subscribe(&mut self, callback: impl FnMut(&FormProps) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Merge `patch` into the state and re-render
    pub fn set_state(&mut self, patch: StatePatch) {
        let state = &mut self.state;
        if let Some(thing) = patch.thing {
            state.thing = thing;
        }
        if let Some(subscribed) = patch.subscribed {
            state.subscribed = subscribed;
        }
        if let Some(subscribed_to_tool) = patch.subscribed_to_tool {
            state.subscribed_to_tool = subscribed_to_tool;
        }
        if let Some(url) = patch.url {
            state.url = url;
        }
        if let Some(icon) = patch.icon {
            state.icon = icon;
        }
        if let Some(in_progress) = patch.in_progress {
            state.in_progress = in_progress;
        }

        self.render();
    }

    fn render(&mut self) {
        let props = self.props();
        for callback in &mut self.subscribers {
            callback(&props);
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
