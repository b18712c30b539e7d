//! Session cookie lookup
//!
//! The toggle request echoes the session cookie back as `_session_id`.
//! The cookie comes either from a `Cookie` header style string or from a
//! Netscape cookies.txt jar, which is re-read on every toggle so a browser
//! refreshing the jar is picked up.

use std::fs;
use std::path::PathBuf;

/// Where the session cookie is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CookieSource {
    /// `name=value; other=value` as sent in a Cookie header
    Header(String),
    /// Path to a Netscape cookies.txt file
    Jar(PathBuf),
    #[default]
    None,
}

impl CookieSource {
    /// Read the named cookie; an absent cookie yields an empty token
    pub fn read(&self, name: &str) -> String {
        let value = match self {
            CookieSource::Header(header) => cookie_from_header(header, name),
            CookieSource::Jar(path) => match fs::read_to_string(path) {
                Ok(contents) => cookie_from_jar(&contents, name),
                Err(e) => {
                    log::warn!("Failed to read cookie jar {}: {}", path.display(), e);
                    None
                }
            },
            CookieSource::None => None,
        };

        if value.is_none() {
            log::debug!("No {} cookie found, sending empty session id", name);
        }
        value.unwrap_or_default()
    }
}

pub fn cookie_from_header(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}

/// Last matching entry wins, as a browser would overwrite earlier ones
pub fn cookie_from_jar(contents: &str, name: &str) -> Option<String> {
    contents
        .lines()
        .filter_map(|line| {
            let line = line.strip_prefix("#HttpOnly_").unwrap_or(line);
            if line.trim().is_empty() || line.starts_with('#') {
                return None;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 7 || fields[5] != name {
                return None;
            }
            Some(fields[6].trim_end().to_string())
        })
        .last()
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
