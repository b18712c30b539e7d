//! Subscription toggle requests
//!
//! Builds the form POST that flips a subscription, sends it from a background
//! worker thread, and reports every settled request back to the UI thread.

mod client;
mod toggle_types;
mod worker;

pub use client::SubscriptionClient;
pub use toggle_types::{
    FormId, ToggleAction, ToggleBody, ToggleError, ToggleOutcome, ToggleReply, ToggleRequest,
    ToggleResponse, STATUS_OK,
};
pub use worker::{spawn_worker, WorkerHandle};
