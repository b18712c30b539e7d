//! Tooltip module
//!
//! A transient popup anchored to the subscription link. It is attached once
//! with its options, then shown and hidden programmatically by the owning
//! component.

mod tooltip_render;
mod tooltip_state;

pub use tooltip_render::{render_tooltip, tooltip_area, wrap_text};
pub use tooltip_state::{TooltipOptions, TooltipState, TooltipTrigger};
