//! grasya - migration console.
//!
//! Usage:
//!   grasya                      # interactive console
//!   grasya --seed 7             # reproducible simulation
//!   grasya --headless 10        # 10 simulator ticks, log as JSON lines on stdout
//!   grasya --settings job.json  # seed the configuration tab from a file

use std::fs::File;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use grasya::config::{ConsoleConfig, FeedConfig};
use grasya::error::ConsoleError;
use grasya::headless::run_headless;
use grasya::settings::Settings;
use grasya::store::Store;
use grasya::tui::App;

/// Simulated PostgreSQL -> MongoDB -> AWS migration console.
#[derive(Parser)]
#[command(name = "grasya", about = "Database migration console", version)]
struct Args {
    /// Simulator tick period in milliseconds.
    #[arg(long, default_value = "1500")]
    tick_ms: u64,

    /// Telemetry samples kept for the sidebar charts.
    #[arg(long, default_value = "20")]
    history: usize,

    /// Rows generated for each opened table or view.
    #[arg(long, default_value = "1000")]
    feed_rows: usize,

    /// Rows revealed per feed tick.
    #[arg(long, default_value = "5")]
    feed_batch: usize,

    /// Feed tick period in milliseconds.
    #[arg(long, default_value = "50")]
    feed_ms: u64,

    /// Seed for the random generator (reproducible runs).
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with initial configuration tab values.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Run without a terminal UI for the given number of simulator ticks.
    #[arg(long, value_name = "TICKS", num_args = 0..=1, default_missing_value = "10")]
    headless: Option<u64>,

    /// Write diagnostics to this file (TUI mode discards them otherwise).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn console_config(&self) -> ConsoleConfig {
        ConsoleConfig {
            tick_interval: Duration::from_millis(self.tick_ms),
            history_capacity: self.history,
            feed: FeedConfig {
                total_rows: self.feed_rows,
                rows_per_tick: self.feed_batch,
                interval: Duration::from_millis(self.feed_ms),
            },
            seed: self.seed,
            ..ConsoleConfig::default()
        }
    }
}

fn main() {
    let args = Args::parse();
    let headless = args.headless.is_some();

    if let Err(e) = init_logging(args.verbose, args.quiet, args.log_file.as_ref(), headless) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ConsoleError> {
    let config = args.console_config();
    config.validate()?;

    let settings = match &args.settings {
        Some(path) => {
            info!(path = %path.display(), "loading settings");
            Settings::load(path)?
        }
        None => Settings::default(),
    };

    let mut store = Store::new(config, settings)?;

    match args.headless {
        Some(ticks) => {
            let stop = Arc::new(AtomicBool::new(false));
            let s = stop.clone();
            if let Err(e) = ctrlc::set_handler(move || {
                info!("Received shutdown signal");
                s.store(true, Ordering::SeqCst);
            }) {
                warn!("Failed to set Ctrl-C handler: {}", e);
            }

            let mut stdout = std::io::stdout().lock();
            let applied = run_headless(&mut store, ticks, &stop, &mut stdout)?;
            info!(applied, "headless run complete");
            Ok(())
        }
        None => App::new(store).run().map_err(ConsoleError::from),
    }
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is INFO. Use -q for quiet mode (errors only).
///
/// The TUI owns the terminal, so diagnostics go to `log_file` or nowhere;
/// headless mode writes them to stderr, leaving stdout to the event log.
fn init_logging(
    verbose: u8,
    quiet: bool,
    log_file: Option<&PathBuf>,
    headless: bool,
) -> Result<(), ConsoleError> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("grasya={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if headless => builder.with_writer(std::io::stderr).init(),
        None => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}
