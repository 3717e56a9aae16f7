use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Rgb;
use crate::foundation::error::{TfeError, TfeResult};
use crate::layer::checkers::Checkers;

/// Raster size and backdrop settings for hosts that render an editor.
///
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Raster width in pixels (default 256).
    pub width: u32,
    /// Raster height in pixels (default 128).
    pub height: u32,
    /// Checkerboard tile edge in pixels (default 16).
    pub checker_size: u32,
    /// First checker color (default black).
    pub checker_color1: Rgb,
    /// Second checker color (default white).
    pub checker_color2: Rgb,
    /// Draw the envelope outline (default true).
    pub show_outline: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 128,
            checker_size: 16,
            checker_color1: Rgb::BLACK,
            checker_color2: Rgb::WHITE,
            show_outline: true,
        }
    }
}

impl RenderConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> TfeResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| TfeError::config(format!("parse: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> TfeResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Reject sizes the renderer cannot use.
    pub fn validate(&self) -> TfeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TfeError::config("width and height must be > 0"));
        }
        if self.checker_size == 0 {
            return Err(TfeError::config("checker_size must be > 0"));
        }
        Ok(())
    }

    /// Background layer described by this config.
    pub fn checkers(&self) -> Checkers {
        Checkers::new(self.checker_size, self.checker_color1, self.checker_color2)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
