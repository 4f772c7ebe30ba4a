use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::color::Color;
use crate::error::{TesselError, TesselResult};

/// Named colors, stored as hex strings (e.g. "primary" -> "3366FF").
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct PaletteConfig {
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String, // tracing filter directive, e.g. "info" or "tessel_core=debug"
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct TesselConfig {
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TesselConfig {
    pub fn from_toml_str(contents: &str) -> TesselResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load_from_file(path: &Path) -> TesselResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TesselError::config(format!("failed to read config: {}", e), path)
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(
            "loaded config from {} ({} palette entries)",
            path.display(),
            config.palette.colors.len()
        );
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> TesselResult<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve every palette entry to a [`Color`].
    ///
    /// Fails on the first entry whose hex string does not parse.
    pub fn palette(&self) -> TesselResult<BTreeMap<String, Color>> {
        let mut resolved = BTreeMap::new();
        for (name, hex) in &self.palette.colors {
            let color = Color::from_hex(hex).map_err(|source| TesselError::Palette {
                name: name.clone(),
                source,
            })?;
            tracing::trace!("palette entry {} = {}", name, color);
            resolved.insert(name.clone(), color);
        }
        Ok(resolved)
    }

    /// Look up a single palette entry by name.
    pub fn color(&self, name: &str) -> TesselResult<Option<Color>> {
        match self.palette.colors.get(name) {
            Some(hex) => Color::from_hex(hex)
                .map(Some)
                .map_err(|source| TesselError::Palette {
                    name: name.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
[palette.colors]
primary = "#3366FF"
ink = "000000"
veil = "00000080"

[logging]
level = "debug"
"##;

    #[test]
    fn test_parse_config() {
        let config = TesselConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.palette.colors.len(), 3);
    }

    #[test]
    fn test_sections_default() {
        let config = TesselConfig::from_toml_str("").unwrap();
        assert_eq!(config, TesselConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_palette_resolves_colors() {
        let config = TesselConfig::from_toml_str(SAMPLE).unwrap();
        let palette = config.palette().unwrap();
        assert_eq!(palette["ink"], Color::BLACK);
        assert_eq!(palette["veil"].to_hex(), 0x00000080);
        assert_eq!(config.color("primary").unwrap().unwrap().to_hex(), 0x3366FFFF);
        assert_eq!(config.color("missing").unwrap(), None);
    }

    #[test]
    fn test_palette_reports_bad_entry() {
        let config = TesselConfig::from_toml_str("[palette.colors]\nbroken = \"zz\"\n").unwrap();
        match config.palette() {
            Err(TesselError::Palette { name, .. }) => assert_eq!(name, "broken"),
            other => panic!("expected palette error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tessel.toml");
        let config = TesselConfig::from_toml_str(SAMPLE).unwrap();
        config.save_to_file(&path).unwrap();
        let loaded = TesselConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = TesselConfig::load_from_file(Path::new("/nonexistent/tessel.toml")).unwrap_err();
        assert!(matches!(err, TesselError::Config { .. }));
    }
}
