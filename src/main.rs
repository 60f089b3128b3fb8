use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use webgpu_smoke::{
    cli, config::Config, executor::ProcessExecutor, printer::Printer, runtime, scenario, suite,
};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Load config
    let cfg = Config::load();

    // Resolve runtime executables: CLI overrides config; config carries the
    // default names so nothing hides in process-wide state.
    let iwasm_bin = args
        .iwasm_bin
        .clone()
        .or_else(|| cfg.get("IWASM_BIN"))
        .unwrap_or_else(|| "iwasm".to_string());
    let wasmedge_bin = args
        .wasmedge_bin
        .clone()
        .or_else(|| cfg.get("WASMEDGE_BIN"))
        .unwrap_or_else(|| "wasmedge".to_string());

    // Scenario set: explicit manifest beats config beats the built-in pair.
    let scenarios = match args.manifest.clone().or_else(|| cfg.get_path("SMOKE_MANIFEST")) {
        Some(path) => scenario::load_manifest(&path)?,
        None => scenario::default_scenarios(),
    };

    if args.list {
        for s in &scenarios {
            println!("{}", s.name);
        }
        return Ok(());
    }

    let cwd = match args.dir.clone().or_else(|| cfg.get_path("SMOKE_WORK_DIR")) {
        Some(dir) => dir,
        None => harness_dir()?,
    };

    let runtimes = runtime::default_pair(&cfg, &iwasm_bin, &wasmedge_bin);
    let printer = Printer::auto();

    // Fail-fast: the first failing invocation propagates here and sets the
    // exit code; nothing is retried or skipped.
    suite::run_suite(&ProcessExecutor, &printer, &scenarios, &runtimes, &cwd)?;
    Ok(())
}

/// Directory containing the harness binary, the default base for every
/// invocation.
fn harness_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locating the harness executable")?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
