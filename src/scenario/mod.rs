//! Scenario definitions and manifest loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One logical example: a named artifact executed once per runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Optional human-readable title for the banner; falls back to `name`.
    #[serde(default)]
    pub title: Option<String>,
    /// Relative path to the prebuilt artifact, resolved against the suite's
    /// working directory. Must exist at invocation time.
    pub artifact: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Scenario {
    /// Heading printed in the scenario banner.
    pub fn heading(&self) -> String {
        format!("Executing {}", self.title.as_deref().unwrap_or(&self.name))
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    scenarios: Vec<Scenario>,
}

/// The built-in pair: one example through the rendering pipeline, one
/// through the compute pipeline.
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "triangle".to_string(),
            title: Some("WebGPU Triangle Example".to_string()),
            artifact: "./triangle/target/wasm32-wasip1/debug/triangle.wasm".to_string(),
            args: Vec::new(),
        },
        Scenario {
            name: "compute".to_string(),
            title: Some("WebGPU Compute Example".to_string()),
            artifact: "./compute/target/wasm32-wasip1/debug/compute.wasm".to_string(),
            args: Vec::new(),
        },
    ]
}

/// Load a scenario set from a JSON manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<Scenario>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading manifest: {}", path.display()))?;
    let manifest: Manifest = serde_json::from_str(&text)
        .with_context(|| format!("parsing manifest: {}", path.display()))?;
    Ok(manifest.scenarios)
}
