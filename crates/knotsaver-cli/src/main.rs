use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use knotsaver_core::{AppConfig, Vec2d};

mod commands;

use commands::parse_point;

#[derive(Parser)]
#[command(name = "knotsaver")]
#[command(author, version, about = "A terminal screensaver of smoothed bouncing knots")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of ~/.config/knotsaver/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the screensaver (default)
    Run {
        /// Samples per curve segment
        #[arg(short = 's', long)]
        steps: Option<usize>,
        /// Start with points moving
        #[arg(long)]
        unpaused: bool,
        /// Place this many random control points at start
        #[arg(short = 'n', long, default_value_t = 0)]
        seed_points: usize,
    },
    /// Print the smoothed closed curve through the given points
    Knot {
        /// Samples per curve segment
        #[arg(short = 's', long, default_value_t = 35)]
        steps: usize,
        /// Print "x y" lines instead of JSON
        #[arg(long)]
        plain: bool,
        /// Control points as X,Y
        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_point)]
        points: Vec<Vec2d>,
    },
    /// Run the animation without a terminal and print the last frame
    Simulate {
        /// Number of frames to run
        #[arg(short = 'f', long, default_value_t = 100)]
        frames: usize,
        /// Samples per curve segment
        #[arg(short = 's', long)]
        steps: Option<usize>,
        /// Print the last frame as JSON
        #[arg(long)]
        json: bool,
        /// Control points as X,Y
        #[arg(allow_hyphen_values = true, value_parser = parse_point)]
        points: Vec<Vec2d>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration if no file exists yet
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);

    // These must work even when the config file is broken
    if let Some(Commands::Config {
        action: action @ (ConfigAction::Path | ConfigAction::Init),
    }) = &cli.command
    {
        init_logging(&AppConfig::default(), false)?;
        return match action {
            ConfigAction::Init => commands::config::init(&config_path),
            _ => commands::config::path(&config_path),
        };
    }

    // Load configuration
    let config = AppConfig::load_from(&config_path)?;

    // The screensaver owns the terminal, so its logs go to a file
    let log_to_file = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, log_to_file)?;

    match cli.command {
        Some(Commands::Run {
            steps,
            unpaused,
            seed_points,
        }) => commands::run::run(
            config,
            commands::run::RunOptions {
                steps,
                unpaused,
                seed_points,
            },
        ),
        None => commands::run::run(config, commands::run::RunOptions::default()),
        Some(Commands::Knot {
            steps,
            plain,
            points,
        }) => commands::knot::run(&points, steps, plain),
        Some(Commands::Simulate {
            frames,
            steps,
            json,
            points,
        }) => commands::simulate::run(&config, &points, frames, steps, json),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init => commands::config::init(&config_path),
        },
    }
}

fn init_logging(config: &AppConfig, log_to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if log_to_file {
        std::fs::create_dir_all(config.data_dir())?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
