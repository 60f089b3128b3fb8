use std::{
    collections::HashMap,
    env,
    fs,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use directories::BaseDirs;

/// Layered harness configuration: built-in defaults, overlaid by the
/// `.smokerc` file, overlaid by environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self::load_from(&default_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        let mut map = default_map();

        // Read .smokerc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().flatten() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self {
            inner: map,
            config_path: config_path.to_path_buf(),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        // ENV first
        if let Ok(v) = env::var(key) {
            return Some(v);
        }
        self.inner.get(key).cloned()
    }

    pub fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.get(key).map(PathBuf::from)
    }
}

fn is_config_key(k: &str) -> bool {
    const KEYS: &[&str] = &["IWASM_BIN", "WASMEDGE_BIN"];

    KEYS.contains(&k) || k.starts_with("SMOKE_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("webgpu_smoke").join(".smokerc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();

    // Runtime executables, resolvable on PATH
    m.insert("IWASM_BIN".into(), "iwasm".into());
    m.insert("WASMEDGE_BIN".into(), "wasmedge".into());

    // Flags handed identically to every runtime
    m.insert("SMOKE_DIR_GRANT".into(), ".".into());
    m.insert("SMOKE_ENV_FORWARD".into(), "RUST_LOG=debug".into());

    m
}
