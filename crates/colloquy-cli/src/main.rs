//! colloquy CLI: Command-line entry point for the chat view

use clap::{Parser, Subcommand, ValueEnum};
use colloquy_engine::{Config, ConfigError, ThemeName, DEFAULT_CONFIG_PATH};
use colloquy_tui::{GlyphMode, GlyphSet};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Terminal chat view with simulated replies
#[derive(Parser)]
#[command(name = "colloquy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON config file (default: .colloquy/config.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Color theme, overriding the config
    #[arg(long, value_enum, global = true)]
    theme: Option<ThemeArg>,

    /// Use ASCII glyphs instead of Unicode
    #[arg(long)]
    ascii: bool,

    /// Where to write logs (default: <tmp>/colloquy.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the chat view (default when no command specified)
    Chat,

    /// Print the effective configuration as JSON
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Mocha,
    Latte,
    HighContrast,
}

impl From<ThemeArg> for ThemeName {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Mocha => ThemeName::Mocha,
            ThemeArg::Latte => ThemeName::Latte,
            ThemeArg::HighContrast => ThemeName::HighContrast,
        }
    }
}

const LOG_FILE_NAME: &str = "colloquy.log";

fn main() {
    let cli = Cli::parse();

    let config = match effective_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        None | Some(Commands::Chat) => {
            let log_path = cli
                .log_file
                .clone()
                .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME));
            if let Err(e) = init_logging(&log_path) {
                eprintln!("Warning: logging disabled ({}): {e}", log_path.display());
            }
            tracing::info!(
                version = env!("CARGO_PKG_VERSION"),
                config = %config_source(&cli).display(),
                theme = ?config.theme,
                "starting colloquy"
            );

            let glyphs = if cli.ascii {
                GlyphSet::new(GlyphMode::Ascii)
            } else {
                GlyphSet::new(GlyphMode::from_env())
            };

            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("Error: failed to start runtime: {e}");
                    std::process::exit(1);
                }
            };
            if let Err(e) = rt.block_on(colloquy_tui::run_tui(config, glyphs)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => match serde_json::to_string_pretty(&config) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {}", ConfigError::Serialize(e));
                std::process::exit(1);
            }
        },
    }
}

/// Config file the run reads: the `--config` path or the default location.
fn config_source(cli: &Cli) -> &Path {
    cli.config
        .as_deref()
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH))
}

/// Load the config named on the command line, or the default one if it
/// exists, then apply command-line overrides.
fn effective_config(cli: &Cli) -> Result<Config, ConfigError> {
    let path = config_source(cli);
    let mut config = if cli.config.is_some() {
        Config::load(path)?
    } else {
        Config::load_or_default(path)?
    };
    if let Some(theme) = cli.theme {
        config.theme = theme.into();
    }
    Ok(config)
}

/// Send tracing output to a file; the terminal belongs to the TUI.
fn init_logging(path: &Path) -> std::io::Result<()> {
    let log_file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,colloquy=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(log_file)),
        )
        .init();
    Ok(())
}
