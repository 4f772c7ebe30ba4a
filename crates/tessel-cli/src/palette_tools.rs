use anyhow::{Context, Result};
use std::path::Path;

use tessel_core::{Color, TesselConfig};

/// Resolve a color argument: a palette name when a config is loaded, otherwise hex.
pub fn resolve_color(arg: &str, config: Option<&TesselConfig>) -> Result<Color> {
    if let Some(config) = config {
        if let Some(color) = config.color(arg)? {
            tracing::debug!("resolved '{}' from palette as {}", arg, color);
            return Ok(color);
        }
    }
    Color::from_hex(arg).with_context(|| format!("'{}' is neither a palette name nor a hex color", arg))
}

pub fn load_config(path: &Path) -> Result<TesselConfig> {
    TesselConfig::load_from_file(path)
        .with_context(|| format!("failed to load config: {}", path.display()))
}

pub fn list_palette(path: &Path) -> Result<()> {
    let config = load_config(path)?;
    let palette = config
        .palette()
        .with_context(|| format!("invalid palette in {}", path.display()))?;

    if palette.is_empty() {
        println!("No palette entries in {}", path.display());
        return Ok(());
    }

    let width = palette.keys().map(|k| k.len()).max().unwrap_or(0);
    for (name, color) in &palette {
        println!(
            "  {:<width$}  {}  {}",
            name,
            color,
            if color.is_dark() { "dark" } else { "light" },
            width = width
        );
    }
    Ok(())
}

pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("'{}' already exists", path.display());
    }

    let mut config = TesselConfig::default();
    for (name, color) in [
        ("background", Color::WHITE),
        ("ink", Color::BLACK),
        ("accent", Color::PURPLE),
    ] {
        config
            .palette
            .colors
            .insert(name.to_string(), color.to_string());
    }
    config
        .save_to_file(path)
        .with_context(|| format!("failed to write config: {}", path.display()))?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_color_prefers_palette() {
        let config =
            TesselConfig::from_toml_str("[palette.colors]\nff = \"0000FF\"\n").unwrap();
        assert_eq!(resolve_color("ff", Some(&config)).unwrap(), Color::BLUE);
        assert_eq!(resolve_color("ff", None).unwrap(), Color::WHITE);
    }

    #[test]
    fn test_resolve_color_rejects_unknown() {
        let err = resolve_color("nope", None).unwrap_err();
        assert!(err.to_string().contains("neither a palette name"));
    }

    #[test]
    fn test_init_config_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tessel.toml");
        init_config(&path).unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.color("accent").unwrap(), Some(Color::PURPLE));
        assert!(init_config(&path).is_err());
    }
}
