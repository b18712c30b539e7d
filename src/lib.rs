//! subtoggle - subscribe to forge tickets, threads and tools from the terminal

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod options;
pub mod session;
pub mod store;
pub mod terminal;
pub mod toggle;
pub mod tooltip;

mod test_utils;

pub use app::App;
pub use error::SubtoggleError;
