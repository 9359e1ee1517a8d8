//! comgr CLI — device library and precompiled header selection for AMDGPU targets.

mod commands;
mod config;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use comgr_devlibs::Language;

use config::ComgrConfig;

#[derive(Parser)]
#[command(name = "comgr", version, about = "AMDGPU device library selection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (default: nearest comgr.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a comgr.toml template in the current directory
    Init,
    /// Inspect supported ISAs
    Isa {
        #[command(subcommand)]
        action: IsaAction,
    },
    /// Select the device libraries for a target
    Devlibs {
        /// Target ISA name (e.g., amdgcn-amd-amdhsa--gfx900)
        #[arg(long)]
        isa: Option<String>,
        /// Comma-separated options (correctly_rounded_sqrt, daz_opt, finite_only, unsafe_math)
        #[arg(long)]
        options: Option<String>,
        /// Source language (opencl-1.2, opencl-2.0)
        #[arg(long)]
        language: Option<Language>,
        /// Directory to write the selected libraries to
        #[arg(long)]
        out: Option<PathBuf>,
        /// Output format (human, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Select the precompiled header for a language
    Pch {
        /// Source language (opencl-1.2, opencl-2.0)
        #[arg(long)]
        language: Option<Language>,
        /// Directory to write the header to
        #[arg(long)]
        out: Option<PathBuf>,
        /// Output format (human, json)
        #[arg(long)]
        format: Option<String>,
    },
}

#[derive(Subcommand)]
enum IsaAction {
    /// List ISAs with embedded device libraries
    List,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init => commands::init::run(&cwd),

        Commands::Isa { action } => match action {
            IsaAction::List => commands::isa::list(),
        },

        Commands::Devlibs {
            isa,
            options,
            language,
            out,
            format,
        } => {
            let config = load_config(&cwd, cli.config.as_deref())?;
            let action = config.resolve_action(language, isa.as_deref(), options.as_deref());
            commands::devlibs::run(&action, out.as_deref(), format.as_deref())
        }

        Commands::Pch {
            language,
            out,
            format,
        } => {
            let config = load_config(&cwd, cli.config.as_deref())?;
            let action = config.resolve_action(language, None, None);
            commands::pch::run(action.language, out.as_deref(), format.as_deref())
        }
    }
}

/// Load the explicit config file, or the nearest `comgr.toml`, or defaults.
fn load_config(cwd: &Path, explicit: Option<&Path>) -> anyhow::Result<ComgrConfig> {
    if let Some(path) = explicit {
        return ComgrConfig::load(path);
    }
    match ComgrConfig::find_and_load(cwd)? {
        Some((config, path)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            Ok(config)
        }
        None => Ok(ComgrConfig::default()),
    }
}
