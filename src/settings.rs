//! Run configuration
//!
//! The defaults reproduce the stock asset run: `./assets`, the four Expo
//! icon/splash files and the `#9333ea` brand purple. Everything can be
//! overridden from a JSON settings file or the command line.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use crate::error::{Result, RecolorError};

/// App brand purple, `#9333ea`
pub const DEFAULT_TARGET_COLOR: (u8, u8, u8) = (147, 51, 234);

/// Channel value every RGB component must stay strictly below to count as black
pub const DEFAULT_THRESHOLD: u8 = 30;

pub const DEFAULT_ASSETS_DIR: &str = "./assets";

pub const DEFAULT_FILES: [&str; 4] = ["icon.png", "splash.png", "adaptive-icon.png", "favicon.png"];

// ============================================================================
// SETTINGS
// ============================================================================

/// Settings for a single recolor pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecolorSettings {
    /// Replacement RGB for near-black pixels (default: (147, 51, 234))
    pub target_color: (u8, u8, u8),
    /// Near-black cutoff, compared with `<` on every channel (default: 30)
    pub threshold: u8,
}

impl Default for RecolorSettings {
    fn default() -> Self {
        Self {
            target_color: DEFAULT_TARGET_COLOR,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Settings for a batch run over a directory of assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSettings {
    /// Directory the file names are resolved against (default: ./assets)
    pub base_dir: PathBuf,
    /// File names processed in order
    pub files: Vec<String>,
    pub recolor: RecolorSettings,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            files: DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
            recolor: RecolorSettings::default(),
        }
    }
}

impl BatchSettings {
    /// Load settings from a JSON file; absent fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Full paths of the listed files, in order
    pub fn resolved_paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|name| self.base_dir.join(name)).collect()
    }
}

// ============================================================================
// HEX COLORS
// ============================================================================

/// Parse a hex color string into an RGB triple.
///
/// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive, with
/// surrounding whitespace trimmed. Shorthand digits are expanded (`F` -> `FF`).
pub fn parse_hex_color(s: &str) -> Result<(u8, u8, u8)> {
    let trimmed = s.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RecolorError::InvalidColor(s.to_string()));
    }

    let channel = |digits: &str| {
        u8::from_str_radix(digits, 16).map_err(|_| RecolorError::InvalidColor(s.to_string()))
    };

    match hex.len() {
        3 => Ok((
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 => Ok((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => Err(RecolorError::InvalidColor(s.to_string())),
    }
}

/// Format an RGB triple as lowercase `#rrggbb`
pub fn format_hex_color(color: (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_run() {
        let settings = BatchSettings::default();
        assert_eq!(settings.base_dir, PathBuf::from("./assets"));
        assert_eq!(settings.files, vec!["icon.png", "splash.png", "adaptive-icon.png", "favicon.png"]);
        assert_eq!(settings.recolor.target_color, (147, 51, 234));
        assert_eq!(settings.recolor.threshold, 30);
    }

    #[test]
    fn test_resolved_paths_keep_order() {
        let settings = BatchSettings {
            base_dir: PathBuf::from("/tmp/assets"),
            files: vec!["b.png".to_string(), "a.png".to_string()],
            ..Default::default()
        };
        assert_eq!(
            settings.resolved_paths(),
            vec![PathBuf::from("/tmp/assets/b.png"), PathBuf::from("/tmp/assets/a.png")]
        );
    }

    #[test]
    fn test_parse_hex_color_forms() {
        assert_eq!(parse_hex_color("#9333ea").unwrap(), (147, 51, 234));
        assert_eq!(parse_hex_color("9333EA").unwrap(), (147, 51, 234));
        assert_eq!(parse_hex_color("  #fff ").unwrap(), (255, 255, 255));
        assert_eq!(parse_hex_color("f00").unwrap(), (255, 0, 0));
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        for bad in ["", "#", "#12345", "#1234567", "zzzzzz", "+f+f+f", "#ééé"] {
            assert!(
                matches!(parse_hex_color(bad), Err(RecolorError::InvalidColor(_))),
                "expected rejection of {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_format_hex_color() {
        assert_eq!(format_hex_color((147, 51, 234)), "#9333ea");
        assert_eq!(format_hex_color((0, 0, 0)), "#000000");
    }

    #[test]
    fn test_load_partial_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "recolor": { "threshold": 12 } }"#).unwrap();

        let settings = BatchSettings::load(&path).unwrap();
        assert_eq!(settings.recolor.threshold, 12);
        assert_eq!(settings.recolor.target_color, DEFAULT_TARGET_COLOR);
        assert_eq!(settings.files.len(), 4);
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(BatchSettings::load(&path), Err(RecolorError::Json(_))));
    }
}
