//! Subscription form
//!
//! The toggle link for one thing. Rendering is a pure function of the store's
//! props; clicks produce toggle requests; settled responses update the store
//! and drive the confirmation tooltip.

mod form_events;
mod form_render;
mod form_state;
mod form_view;

pub use form_render::LinkWidget;
pub use form_state::{HideTimer, SubscriptionForm};
pub use form_view::{
    ACTIVE_CLASS, Cursor, IconView, LinkView, confirmation_message, link_title, render,
};
