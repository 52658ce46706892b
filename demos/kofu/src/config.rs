//! Demo configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use am_core::DemoConfig;

/// Directory holding the demo's bundled route, config, and alert clip.
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load `path` as JSON, or fall back to the defaults with the bundled clip.
///
/// A relative `alert_asset` is resolved against the directory of the file it
/// was read from.
pub fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        let mut config = DemoConfig::default();
        config.alert_asset = resolve_asset(&data_dir(), &config.alert_asset);
        return Ok(config);
    };
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening config {}", path.display()))?;
    let mut config: DemoConfig = serde_json::from_reader(file)
        .with_context(|| format!("parsing config {}", path.display()))?;
    let base = path.parent().unwrap_or(Path::new("."));
    config.alert_asset = resolve_asset(base, &config.alert_asset);
    Ok(config)
}

fn resolve_asset(base: &Path, asset: &Path) -> PathBuf {
    if asset.is_absolute() {
        asset.to_path_buf()
    } else {
        base.join(asset)
    }
}
