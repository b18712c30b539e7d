//! File logging
//!
//! The terminal belongs to the UI, so log output goes to
//! `<cache dir>/subtoggle/subtoggle.log`. Nothing is written unless
//! `RUST_LOG` is set.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

const LOG_DIR: &str = "subtoggle";
const LOG_FILE: &str = "subtoggle.log";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Initialise logging; returns the log file path when logging is active
pub fn init() -> Option<PathBuf> {
    if std::env::var_os("RUST_LOG").is_none() {
        return None;
    }

    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let result = Builder::from_env(Env::default())
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    result.ok().map(|_| path)
}
