//! Host runtime descriptors.

use crate::config::Config;

/// One candidate host runtime: a section label for reporting, the executable
/// name (resolved on PATH) or path, and the flags inserted between the
/// executable and the artifact path.
#[derive(Debug, Clone)]
pub struct RuntimeDescriptor {
    pub label: String,
    pub program: String,
    pub flags: Vec<String>,
}

impl RuntimeDescriptor {
    pub fn new(label: impl Into<String>, program: impl Into<String>, flags: Vec<String>) -> Self {
        Self {
            label: label.into(),
            program: program.into(),
            flags,
        }
    }
}

/// Flags every runtime receives for each scenario: the directory-access
/// grant and the environment forwarding the examples expect.
pub fn shared_flags(cfg: &Config) -> Vec<String> {
    let grant = cfg.get("SMOKE_DIR_GRANT").unwrap_or_else(|| ".".to_string());
    let forward = cfg
        .get("SMOKE_ENV_FORWARD")
        .unwrap_or_else(|| "RUST_LOG=debug".to_string());
    vec![format!("--dir={}", grant), format!("--env={}", forward)]
}

/// The default descriptor pair. Each descriptor owns its flag vector;
/// nothing is shared between them.
pub fn default_pair(cfg: &Config, iwasm_bin: &str, wasmedge_bin: &str) -> Vec<RuntimeDescriptor> {
    vec![
        RuntimeDescriptor::new("IWASM", iwasm_bin, shared_flags(cfg)),
        RuntimeDescriptor::new("WASMEDGE", wasmedge_bin, shared_flags(cfg)),
    ]
}
