use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "webgpu-smoke",
    about = "Run each WebGPU example artifact under every host runtime",
    version
)]
pub struct Cli {
    /// iwasm executable to use (name on PATH or a path).
    #[arg(long = "iwasm-bin")]
    pub iwasm_bin: Option<String>,

    /// wasmedge executable to use (name on PATH or a path).
    #[arg(long = "wasmedge-bin")]
    pub wasmedge_bin: Option<String>,

    /// Working directory for every invocation.
    ///
    /// Defaults to the directory containing the harness binary, matching the
    /// layout where the example artifacts sit next to it.
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// JSON manifest with the scenario set to run instead of the built-in pair.
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// List scenario names and exit without running anything.
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
