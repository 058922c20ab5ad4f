//! Uncompose - convert Docker Compose YAML into docker run commands
//!
//! This is the CLI entry point for uncompose.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use uncompose::command::RenderContext;
use uncompose::compose::{select_service, ComposeParser};
use uncompose::error::{Result, UncomposeError};

/// Uncompose - convert Docker Compose YAML into docker run commands
#[derive(Parser)]
#[command(name = "uncompose")]
#[command(author = "Evoker Industries")]
#[command(version)]
#[command(about = "Convert Docker Compose YAML into docker run commands", long_about = None)]
struct Cli {
    /// Compose file to convert [default: compose file in current directory]
    path: Option<PathBuf>,

    /// Generate docker run commands with the detach flag
    #[arg(short, long, conflicts_with = "rm")]
    detach: bool,

    /// String to prefix container names with [default: input file directory name]
    #[arg(short, long)]
    prefix: Option<String>,

    /// Generate docker run commands with the remove flag
    #[arg(short = 'r', long)]
    rm: bool,

    /// Only convert one service, selected by name or 1-based index
    #[arg(short, long)]
    service: Option<String>,

    /// Generate systemd unit files
    #[arg(short, long)]
    units: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if cli.units {
        return Err(UncomposeError::Unimplemented(
            "systemd unit file generation".to_string(),
        ));
    }

    let path = match cli.path {
        Some(path) => path,
        None => ComposeParser::find_compose_file(&std::env::current_dir()?).ok_or_else(|| {
            UncomposeError::ComposeParse("No compose file found in current directory".to_string())
        })?,
    };

    let prefix = match cli.prefix {
        Some(prefix) => prefix,
        None => default_prefix(&path)?,
    };

    let services = ComposeParser::parse_file(&path)?;
    tracing::debug!("Parsed {} services from {}", services.len(), path.display());

    let ctx = RenderContext {
        prefix,
        detach: cli.detach,
        remove: cli.rm,
    };

    match cli.service {
        Some(selector) => {
            let service = select_service(&services, &selector)?;
            println!("{}", ctx.render(service));
        }
        None => {
            for service in &services {
                println!("{}", ctx.render(service));
            }
        }
    }

    Ok(())
}

/// Default name prefix: the input file's parent directory name plus `_`
fn default_prefix(path: &Path) -> Result<String> {
    let abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    Ok(abs
        .parent()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str())
        .map(|name| format!("{}_", name))
        .unwrap_or_default())
}
