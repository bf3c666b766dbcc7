//! routeproto CLI - Route to RPC service definition compiler
//!
//! Commands:
//! - `routeproto compile` - Compile a route list into a service definition
//! - `routeproto check` - Validate a routeproto.toml manifest

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod compile;
mod manifest;

#[derive(Parser)]
#[command(name = "routeproto")]
#[command(author, version, about = "Compile HTTP routes into RPC definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a route list into a service definition document
    Compile {
        /// Path to routeproto.toml manifest (default: ./routeproto.toml if present)
        #[arg(short, long)]
        manifest: Option<String>,

        /// JSON file holding the route descriptors
        #[arg(short, long)]
        routes: Option<PathBuf>,

        /// OpenAPI/Swagger JSON document whose title names the service
        #[arg(short, long)]
        document: Option<PathBuf>,

        /// Service name (overrides the manifest and the document title)
        #[arg(short, long)]
        service_name: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Log level (trace, debug, info, warn, error, off)
        #[arg(short, long)]
        log_level: Option<String>,
    },

    /// Validate a routeproto.toml manifest
    Check {
        /// Path to routeproto.toml (default: ./routeproto.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            manifest,
            routes,
            document,
            service_name,
            output,
            log_level,
        } => {
            compile::run(compile::CompileArgs {
                manifest,
                routes,
                document,
                service_name,
                output,
                log_level,
            })?;
        }
        Commands::Check { manifest } => {
            manifest::check(manifest)?;
        }
    }

    Ok(())
}
