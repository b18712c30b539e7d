//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::error::SubtoggleError;
use crate::options::{Icon, PartialOptions, SubscriptionOptions};
use crate::session::CookieSource;

/// Subscribe to or unsubscribe from a forge ticket, thread or tool
#[derive(Debug, Parser)]
#[command(name = "subtoggle", version, about)]
pub struct Args {
    /// JSON file with the page subscription options
    pub options_file: Option<PathBuf>,

    /// What is being subscribed to (ticket, thread, tool, ...)
    #[arg(long)]
    pub thing: Option<String>,

    /// Subscribe endpoint, absolute or relative to --base-url
    #[arg(long)]
    pub url: Option<String>,

    /// Start in the subscribed state
    #[arg(long)]
    pub subscribed: bool,

    /// Start with the whole tool subscribed
    #[arg(long)]
    pub subscribed_to_tool: bool,

    /// Icon glyph drawn before the link
    #[arg(long)]
    pub icon_char: Option<String>,

    /// Icon style class
    #[arg(long, requires = "icon_char")]
    pub icon_css: Option<String>,

    /// Base url for relative endpoints (overrides [http] base_url)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Cookie header value, e.g. "_session_id=abc123"
    #[arg(long, conflicts_with = "cookie_jar")]
    pub cookie: Option<String>,

    /// Netscape cookies.txt file holding the session cookie
    #[arg(long)]
    pub cookie_jar: Option<PathBuf>,

    /// Config file (defaults to ~/.config/subtoggle/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Options from the file, overridden by flags
    pub fn subscription_options(&self) -> Result<SubscriptionOptions, SubtoggleError> {
        let base = match &self.options_file {
            Some(path) => PartialOptions::load(path)?,
            None => PartialOptions::default(),
        };
        base.merge(self.overrides()).into_options()
    }

    fn overrides(&self) -> PartialOptions {
        PartialOptions {
            thing: self.thing.clone(),
            // Flags can only switch these on
            subscribed: self.subscribed.then_some(true),
            subscribed_to_tool: self.subscribed_to_tool.then_some(true),
            url: self.url.clone(),
            icon: self.icon_char.as_ref().map(|glyph| Icon {
                glyph: glyph.clone(),
                css: self.icon_css.clone().unwrap_or_default(),
            }),
        }
    }

    pub fn cookie_source(&self) -> CookieSource {
        match (&self.cookie, &self.cookie_jar) {
            (Some(header), _) => CookieSource::Header(header.clone()),
            (None, Some(path)) => CookieSource::Jar(path.clone()),
            (None, None) => CookieSource::None,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
