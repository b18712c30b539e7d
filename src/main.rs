use std::io::stdout;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use subtoggle::App;
use subtoggle::cli::Args;
use subtoggle::config::load_config;
use subtoggle::terminal::run_session;

/// How long to wait for input before polling responses and timers
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    if let Some(path) = subtoggle::logging::init() {
        log::info!("Logging to {}", path.display());
    }

    // Fail on bad options before touching the terminal
    let options = args.subscription_options()?;

    let mut config_result = load_config(args.config.as_deref());
    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
    }
    if let Some(base_url) = &args.base_url {
        config_result.config.http.base_url = Some(base_url.clone());
    }
    let config = config_result.config;

    let mut app = App::new(options, &config, args.cookie_source());
    app.start_worker(&config);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run_session(
        || execute!(stdout(), EnableMouseCapture),
        || run(terminal, &mut app),
        || {
            let _ = execute!(stdout(), DisableMouseCapture);
            ratatui::restore();
        },
    );

    if let Some(warning) = config_result.warning {
        eprintln!("subtoggle: {}", warning);
    }

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        if app.take_dirty() {
            terminal.draw(|frame| app.render(frame))?;
        }

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        let now = Instant::now();
        app.poll_responses(now);
        app.tick(now);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
