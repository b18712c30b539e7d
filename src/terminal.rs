//! Terminal session lifetime

use std::io;

use color_eyre::Result;

/// Runs `body` after `setup` succeeds; `teardown` runs on every path
///
/// Raw mode is already on when this is called, so a failed setup must still
/// hand the terminal back before its error is returned.
pub fn run_session<T>(
    setup: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> Result<T>,
    teardown: impl FnOnce(),
) -> Result<T> {
    let result = match setup() {
        Ok(()) => body(),
        Err(err) => Err(err.into()),
    };
    teardown();
    result
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod terminal_tests;
