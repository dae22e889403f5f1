//! Init command — writes a default simulation config

use anyhow::{bail, Context, Result};
use ember_sim::SimulationConfig;
use std::fs;
use std::path::Path;

pub fn run(path: &str, force: bool) -> Result<()> {
    if Path::new(path).exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path);
    }

    let config = SimulationConfig::default();
    let body = config
        .to_toml_string()
        .context("Failed to serialize default config")?;
    let text = format!(
        "# Ember simulation config\n\
         # All \"_var\" fields are uniform jitter half-widths around the mean.\n\n{}",
        body
    );

    fs::write(path, text).with_context(|| format!("Failed to write {}", path))?;
    println!("[init] wrote {}", path);
    Ok(())
}
