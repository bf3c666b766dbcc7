//! Manifest parsing and validation

use anyhow::{Context, Result};
use routeproto_core::CompilerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Manifest file looked up when no path is given
pub const DEFAULT_MANIFEST: &str = "routeproto.toml";

/// routeproto.toml manifest structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub service: ServiceSection,

    #[serde(default)]
    pub input: InputSection,

    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub compiler: CompilerConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSection {
    /// Explicit service name, overrides the document title
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSection {
    /// JSON file holding the route descriptor list
    #[serde(default)]
    pub routes: Option<PathBuf>,

    /// OpenAPI/Swagger JSON document used as the service name fallback
    #[serde(default)]
    pub document: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    /// Destination of the generated document; stdout when absent
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Manifest {
    /// Load manifest from a file
    ///
    /// Relative input and output paths are resolved against the directory
    /// holding the manifest.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {:?}", path))?;

        let mut manifest = Self::from_str(&content)?;
        if let Some(base) = path.parent() {
            manifest.rebase(base);
        }
        Ok(manifest)
    }

    /// Parse manifest from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// The explicit service name, from `[service]` or `[compiler]`
    pub fn service_name(&self) -> Option<&str> {
        self.service
            .name
            .as_deref()
            .or(self.compiler.service_name.as_deref())
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.service.name
            && name.is_empty()
        {
            anyhow::bail!("Service name cannot be empty");
        }

        if let Some(routes) = &self.input.routes
            && routes.as_os_str().is_empty()
        {
            anyhow::bail!("Routes path cannot be empty");
        }

        if let Some(document) = &self.input.document
            && document.as_os_str().is_empty()
        {
            anyhow::bail!("Document path cannot be empty");
        }

        if let Some(output) = &self.output.path
            && output.as_os_str().is_empty()
        {
            anyhow::bail!("Output path cannot be empty");
        }

        if self.compiler.response_status.is_empty() {
            anyhow::bail!("Response status key cannot be empty");
        }

        self.compiler
            .log_level
            .parse::<routeproto_core::LogLevel>()
            .map_err(anyhow::Error::msg)?;

        Ok(())
    }

    fn rebase(&mut self, base: &Path) {
        let join = |path: &mut Option<PathBuf>| {
            if let Some(p) = path
                && p.is_relative()
                && !p.as_os_str().is_empty()
            {
                *p = base.join(p.as_path());
            }
        };
        join(&mut self.input.routes);
        join(&mut self.input.document);
        join(&mut self.output.path);
    }
}

/// Check command implementation
pub fn check(manifest_path: Option<String>) -> Result<()> {
    let path = manifest_path.unwrap_or_else(|| DEFAULT_MANIFEST.to_string());

    println!("Checking manifest: {}", path);

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;

    println!(
        "✓ Service: {}",
        manifest.service_name().unwrap_or("(from document title)")
    );
    match &manifest.input.routes {
        Some(routes) => println!("✓ Routes: {}", routes.display()),
        None => println!("✓ Routes: (from --routes)"),
    }
    match &manifest.output.path {
        Some(output) => println!("✓ Output: {}", output.display()),
        None => println!("✓ Output: stdout"),
    }
    println!("\nManifest is valid!");

    Ok(())
}
