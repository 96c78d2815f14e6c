use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use color_eyre::Result;
use crossterm::event;
use ratatui::DefaultTerminal;

use newtab::app::{App, MouseCapture};
use newtab::config::{Config, load_config};
use newtab::search::{Engine, SearchMode, search_url};
use newtab::suggest::{FetchGate, HttpTransport, SourceChain, spawn_worker};

/// Upper bound on how long the loop sleeps waiting for input
const IDLE_POLL: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "newtab")]
#[command(version, about = "Terminal new-tab page with search suggestions")]
struct Cli {
    /// Path to the config file (default: ~/.config/newtab/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Never contact suggestion endpoints
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch suggestions once and print one per line
    Suggest {
        /// Text to complete
        query: String,
    },

    /// Print the search URL for a query
    Search {
        /// Text to search for
        query: String,

        /// "search" or "ai"
        #[arg(short, long)]
        mode: Option<String>,

        /// google, duckduckgo, bing or brave
        #[arg(short, long)]
        engine: Option<String>,
    },
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    init_logging();

    let cli = Cli::parse();

    let loaded = load_config(cli.config.as_deref());
    if let Some(warning) = &loaded.warning {
        eprintln!("newtab: {}", warning);
    }
    let config = loaded.config;

    match cli.command {
        Some(Command::Suggest { query }) => run_suggest(&config, cli.offline, &query),
        Some(Command::Search {
            query,
            mode,
            engine,
        }) => {
            let mode = mode.map_or(config.search.mode, |m| SearchMode::from_name(&m));
            let engine = engine.map_or(config.search.engine, |e| Engine::from_name(&e));
            if let Some(url) = search_url(&query, mode, engine) {
                println!("{}", url);
            }
            Ok(())
        }
        None => run_dashboard(&config, cli.offline),
    }
}

/// Log to a file in the temp dir when RUST_LOG is set; the dashboard owns the terminal
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let path = std::env::temp_dir().join("newtab.log");
    let Ok(file) = File::create(&path) else {
        return;
    };

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn build_chain(config: &Config, offline: bool) -> Result<SourceChain> {
    let gate = FetchGate::from_config(config.suggestions.fetch, offline);
    let timeout = Duration::from_millis(config.suggestions.timeout_ms);
    let transport = HttpTransport::new(gate, timeout)?;
    Ok(SourceChain::new(Arc::new(transport)))
}

fn run_suggest(config: &Config, offline: bool, query: &str) -> Result<()> {
    let chain = build_chain(config, offline)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let suggestions = runtime.block_on(chain.fetch(query));

    let mut stdout = io::stdout().lock();
    for suggestion in suggestions {
        writeln!(stdout, "{}", suggestion)?;
    }
    Ok(())
}

fn run_dashboard(config: &Config, offline: bool) -> Result<()> {
    let chain = build_chain(config, offline)?;
    let fetcher = spawn_worker(chain)?;
    let mut app = App::new(config, fetcher);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = match MouseCapture::enable(io::stdout()) {
        Ok(_capture) => run(terminal, &mut app),
        Err(e) => Err(e.into()),
    };
    ratatui::restore();

    result?;

    if let Some(url) = app.output() {
        println!("{}", url);
    }
    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = app
            .suggestions
            .next_deadline(Instant::now())
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));

        if event::poll(timeout)? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
