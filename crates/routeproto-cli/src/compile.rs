//! Compile command implementation

use crate::manifest::{DEFAULT_MANIFEST, Manifest};
use anyhow::{Context, Result};
use routeproto_core::prelude::*;
use routeproto_logging::init_logging_with_callback;
use std::path::{Path, PathBuf};
use std::sync::{Arc, mpsc};

/// Command-line overrides for a compile run
#[derive(Debug, Default)]
pub struct CompileArgs {
    pub manifest: Option<String>,
    pub routes: Option<PathBuf>,
    pub document: Option<PathBuf>,
    pub service_name: Option<String>,
    pub output: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Compile a route list into a service definition document
pub fn run(args: CompileArgs) -> Result<()> {
    let manifest = load_manifest(args.manifest.as_deref())?;
    manifest.validate()?;

    let level_name = args
        .log_level
        .clone()
        .unwrap_or_else(|| manifest.compiler.log_level.clone());
    let level: LogLevel = level_name.parse().map_err(anyhow::Error::msg)?;
    init_logging_with_callback(
        Arc::new(|level: LogLevel, target: &str, message: &str| {
            eprintln!("[{level}] {target}: {message}")
        }),
        level,
    );

    let routes_path = args
        .routes
        .or_else(|| manifest.input.routes.clone())
        .context("No routes file given (use --routes or [input] routes)")?;
    let routes = read_routes(&routes_path)?;

    let document = args
        .document
        .or_else(|| manifest.input.document.clone())
        .map(|path| read_document(&path))
        .transpose()?;

    let mut config = manifest.compiler.clone();
    config.service_name = args
        .service_name
        .or_else(|| manifest.service_name().map(str::to_string));

    let text = generate(config, routes, document.as_ref())?;

    match args.output.or_else(|| manifest.output.path.clone()) {
        Some(path) => {
            std::fs::write(&path, format!("{text}\n"))
                .with_context(|| format!("Failed to write output: {:?}", path))?;
            tracing::info!(path = %path.display(), "document written");
        }
        None => println!("{text}"),
    }

    Ok(())
}

/// Drive one generator lifecycle over the loaded routes
fn generate(
    config: CompilerConfig,
    routes: Vec<RouteDescriptor>,
    document: Option<&ApiDocument>,
) -> Result<String> {
    let (tx, rx) = mpsc::channel();
    let options = GeneratorOptions::new(config).with_callback(move |text| {
        let _ = tx.send(text);
    });

    let mut generator = ProtoGenerator::new(options)?;
    for route in routes {
        generator.on_route(route);
    }
    generator.on_ready(document)?;

    rx.try_recv()
        .context("Generator finished without producing a document")
}

fn load_manifest(path: Option<&str>) -> Result<Manifest> {
    match path {
        Some(path) => Manifest::from_file(path),
        None if Path::new(DEFAULT_MANIFEST).is_file() => Manifest::from_file(DEFAULT_MANIFEST),
        None => Ok(Manifest::default()),
    }
}

fn read_routes(path: &Path) -> Result<Vec<RouteDescriptor>> {
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read routes: {:?}", path))?;
    serde_json::from_slice(&content).with_context(|| format!("Failed to parse routes: {:?}", path))
}

fn read_document(path: &Path) -> Result<ApiDocument> {
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read document: {:?}", path))?;
    ApiDocument::from_json(&content)
        .with_context(|| format!("Failed to parse document: {:?}", path))
}
