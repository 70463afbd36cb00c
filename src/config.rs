//! Default render options loaded from a JSON config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{MenuError, Result};
use crate::menu::{validate_depth, OptionOverrides};

pub const CONFIG_DIR_NAME: &str = "menu-render";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub options: OptionOverrides,
}

impl Config {
    /// `<config dir>/menu-render/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&json).map_err(|e| MenuError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        validate_depth(config.options.render_depth, &path.display().to_string())?;

        Ok(config)
    }

    /// Options applied to every item when it is built. Item-level options
    /// still win over these.
    pub fn item_defaults(&self) -> OptionOverrides {
        OptionOverrides {
            render_depth: None,
            ..self.options.clone()
        }
    }

    /// Options applied at render time, below anything given on the command
    /// line. Only the starting depth lives here.
    pub fn render_overrides(&self) -> OptionOverrides {
        OptionOverrides {
            render_depth: self.options.render_depth,
            ..OptionOverrides::default()
        }
    }

    /// Loads `explicit` if given, otherwise the default file when it exists.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file just yields the empty config.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading default config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
