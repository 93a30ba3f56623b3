use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::debug;

use crate::materialize::materialize;

/// CLI для sower. Операционных флагов нет: инструмент работает с каталогом,
/// в котором лежит сам исполняемый файл.
#[derive(Parser, Debug)]
#[command(
    name = "sower",
    version,
    about = "One-shot base64 manifest materializer"
)]
pub struct Cli {}

pub fn run() -> Result<()> {
    let _cli = Cli::parse();

    // Base directory is resolved once from the executable's own location
    // and passed explicitly from here on.
    let exe = std::env::current_exe().context("resolve current executable path")?;
    let base = exe
        .parent()
        .ok_or_else(|| anyhow!("executable path {} has no parent directory", exe.display()))?
        .to_path_buf();
    debug!("base directory: {}", base.display());

    materialize(&base)?;
    Ok(())
}
