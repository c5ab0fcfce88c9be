use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, process, sync::Arc, time::Duration};

use currency_converter::api::{ExchangeRateClient, RateProvider};
use currency_converter::app::App;
use currency_converter::commands::{self, OneShot};
use currency_converter::config::Config;
use currency_converter::{logging, ui};

/// A terminal-based currency converter
#[derive(Parser, Debug)]
#[command(
    name = "currency-converter",
    author,
    version,
    about,
    long_about = "Converts currencies using real-time exchange rates from ExchangeRate-API.\n\n\
                  Examples:\n  \
                  currency-converter                        # Start interactive TUI\n  \
                  currency-converter -f USD -t EUR -a 100   # Quick conversion"
)]
struct Args {
    /// Source currency code (e.g., USD)
    #[arg(short, long)]
    from: Option<String>,

    /// Target currency code (e.g., EUR)
    #[arg(short, long)]
    to: Option<String>,

    /// Amount to convert
    #[arg(short, long, allow_negative_numbers = true)]
    amount: Option<f64>,

    /// List every currency code the provider supports
    #[arg(short, long)]
    list: bool,

    /// Enable debug logging to <tmp>/currency-converter-debug.log
    #[arg(short, long)]
    debug: bool,
}

/// Frequency of terminal polling between conversion-response checks
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    logging::init(args.debug)?;

    // Configuration errors are fatal before any UI or network activity
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            process::exit(1);
        }
    };

    let provider: Arc<dyn RateProvider> = match ExchangeRateClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            println!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.list {
        let mut stdout = io::stdout();
        if let Err(e) = commands::run_list(provider.as_ref(), &mut stdout).await {
            println!("Error: {}", e);
            process::exit(1);
        }
        return Ok(());
    }

    if let Some(request) = OneShot::from_flags(
        args.from.as_deref(),
        args.to.as_deref(),
        args.amount,
    ) {
        let mut stdout = io::stdout();
        if let Err(e) = commands::run_one_shot(provider.as_ref(), &request, &mut stdout).await {
            println!("Error: {}", e);
            process::exit(1);
        }
        return Ok(());
    }

    if let Err(e) = run_tui(provider).await {
        println!("Error running TUI: {:#}", e);
        process::exit(1);
    }

    Ok(())
}

async fn run_tui(provider: Arc<dyn RateProvider>) -> Result<()> {
    let mut app = App::new(provider);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, &app.model);
        })?;

        if app.should_quit() {
            break;
        }

        // Process conversion responses (non-blocking)
        app.drain_responses();

        // Short poll so responses show up promptly and `q` works mid-request
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
