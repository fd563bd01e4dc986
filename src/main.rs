//! family-office: terminal dashboard for a family office platform
//!
//! Tracks service integrations and presents portfolio, document, insight
//! and automation views over a built-in dataset.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use family_office::{
    cli::{self, RenderConfig},
    config::{self, AppConfig, ConfigOverrides},
    reports::ReportFormat,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "family-office")]
#[command(version)]
#[command(about = "Family office wealth dashboard", long_about = None)]
#[command(after_help = "SERVICES:
    googleDrive, blackboxAI, plaid, docusign

TABS:
    dashboard, portfolio, documents, ai-insights, automation

EXAMPLES:
    # Open the interactive dashboard
    family-office view

    # Connect Plaid and print the portfolio tab
    family-office render --toggle plaid --tab portfolio

    # Export the automation tab as JSON
    family-office render --tab automation -o json -O dashboard.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `view` subcommand
#[derive(Parser)]
struct ViewArgs {
    /// Color theme: dark, light, high-contrast
    #[arg(long)]
    theme: Option<String>,

    /// Idle tick interval in milliseconds
    #[arg(long)]
    tick_rate: Option<u64>,

    /// Capture mouse events
    #[arg(long)]
    mouse: bool,
}

/// Arguments for the `render` subcommand
#[derive(Parser)]
struct RenderArgs {
    /// Tab to render
    #[arg(short, long)]
    tab: Option<String>,

    /// Toggle a service connection before rendering (repeatable)
    #[arg(long = "toggle", value_name = "SERVICE")]
    toggles: Vec<String>,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard
    View(ViewArgs),

    /// Compose the dashboard headlessly and print it
    Render(RenderArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .family-office.yaml in the current directory
    Init,
}

/// Load the config file and layer CLI overrides on top.
fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<AppConfig> {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(path, overrides)?;
    if let Some(path) = loaded_from {
        tracing::debug!("using config {}", path.display());
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    // Dispatch to command handlers
    match cli.command {
        Commands::View(args) => {
            let overrides = ConfigOverrides {
                theme: args.theme,
                tick_rate_ms: args.tick_rate,
                mouse_enabled: args.mouse,
                ..ConfigOverrides::default()
            };
            let config = load_config(cli.config.as_deref(), &overrides)?;
            cli::run_view(&config.tui)
        }

        Commands::Render(args) => {
            let overrides = ConfigOverrides {
                format: args.output,
                no_color: cli.no_color,
                ..ConfigOverrides::default()
            };
            let config = load_config(cli.config.as_deref(), &overrides)?;
            cli::run_render(&RenderConfig {
                tab: args.tab,
                toggles: args.toggles,
                output: config.output,
                file: args.output_file,
            })
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "family-office", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to build schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config::file::search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::file::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".family-office.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
