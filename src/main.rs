use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use helpdesk::display::DisplayOptions;
use helpdesk::shell::Shell;
use helpdesk::{App, Config, Result};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "HELPDESK_LOG";

#[derive(Parser)]
#[command(name = "helpdesk")]
#[command(about = "Local support ticket intake and listing")]
#[command(version)]
struct Cli {
    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with sample tickets in the list
    #[arg(long)]
    demo: bool,

    /// Disable colored status badges
    #[arg(long)]
    no_color: bool,

    /// Time zone for displayed dates (e.g., Europe/Moscow)
    #[arg(long, value_name = "TZ")]
    timezone: Option<String>,

    /// Log state transitions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.demo {
        config.demo_tickets = true;
    }
    if cli.no_color {
        config.color = false;
    }
    if let Some(tz) = cli.timezone {
        config.timezone = Some(tz);
    }

    let options = DisplayOptions {
        color: config.color,
        time_zone: config.time_zone()?,
    };
    let app = App::from_config(&config)?;

    let stdin = io::stdin();
    let mut shell = Shell::new(app, options, stdin.lock(), io::stdout());
    shell.run()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
