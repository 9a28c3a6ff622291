use anyhow::{Context, Result};
use clap::Parser;
use pocketcalc::config::Config;
use pocketcalc::ui::{self, Session, Theme};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pocketcalc", version, about = "A pocket calculator for the terminal")]
struct Args {
    /// Apply this key sequence, print the final screen and exit
    #[arg(short, long, value_name = "SEQ")]
    keys: Option<String>,

    /// Print a JSON snapshot instead of the screen (with --keys)
    #[arg(long, requires = "keys")]
    json: bool,

    /// Override the configured theme
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Hide the on-screen keypad
    #[arg(long)]
    no_keypad: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match args.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if args.no_color {
        config.color = false;
    }
    if args.no_keypad {
        config.show_keypad = false;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args).context("Failed to load configuration")?;
    debug!(?config, "starting session");
    let mut session = Session::new(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(keys) = &args.keys {
        let commands = ui::parse_line(keys).context("Invalid key sequence")?;
        for command in commands {
            if session.dispatch(command) == ui::Flow::Quit {
                break;
            }
        }

        if args.json {
            serde_json::to_writer_pretty(&mut out, &session.snapshot())
                .context("Failed to write snapshot")?;
            writeln!(out)?;
        } else {
            write!(out, "{}", session.render())?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    session
        .run(stdin.lock(), &mut out)
        .context("Interactive session failed")?;
    Ok(())
}
