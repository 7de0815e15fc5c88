//! Configuration loading and management.
//!
//! # Hierarchy
//!
//! Configuration is resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Project config: `scriptman.toml` in the working directory
//! 3. Environment variables: `SCRIPTMAN_*`
//! 4. CLI flags (applied by the binary)
//!
//! # Example Config
//!
//! ```toml
//! script_dir = "./libexec"
//! script_ext = ".sh"
//! command_name = "mdl"
//! launcher_name = "vitepress.js"
//! ```

use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{Error, Result};

/// Default directory scanned for helper scripts.
pub const DEFAULT_SCRIPT_DIR: &str = "./libexec";

/// Default extension a file must carry to count as a script.
pub const DEFAULT_SCRIPT_EXT: &str = ".sh";

/// Default published command name substituted into captured help text.
pub const DEFAULT_COMMAND_NAME: &str = "mdl";

/// Default launcher name as it appears inside captured help text.
///
/// Scripts invoked through the docs build see the build tool's own
/// entry point as `argv[0]`, so their usage lines mention it instead of
/// the name end users actually type.
pub const DEFAULT_LAUNCHER_NAME: &str = "vitepress.js";

/// Config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "scriptman.toml";

/// Settings for one documentation-generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned for helper scripts.
    pub script_dir: PathBuf,
    /// Extension (including the leading dot) a file must end with.
    pub script_ext: String,
    /// Published command name end users type.
    pub command_name: String,
    /// Name the launcher reports to spawned scripts; replaced by
    /// `command_name` in captured output.
    pub launcher_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script_dir: PathBuf::from(DEFAULT_SCRIPT_DIR),
            script_ext: DEFAULT_SCRIPT_EXT.to_string(),
            command_name: DEFAULT_COMMAND_NAME.to_string(),
            launcher_name: DEFAULT_LAUNCHER_NAME.to_string(),
        }
    }
}

/// Partial config as it appears in a TOML file; every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    script_dir: Option<PathBuf>,
    script_ext: Option<String>,
    command_name: Option<String>,
    launcher_name: Option<String>,
}

impl Config {
    /// Load configuration from defaults, the project config file (if any)
    /// and `SCRIPTMAN_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is malformed TOML or the
    /// resolved values fail validation.
    pub fn load() -> Result<Self> {
        let project = Path::new(PROJECT_CONFIG_FILE);
        let config = if project.exists() {
            Self::default().merge(load_toml_file(project)?)
        } else {
            Self::default()
        };
        let config = config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit TOML file, then apply
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or if the
    /// resolved values fail validation.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::default().merge(load_toml_file(path)?).apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Overlay file-provided values onto this config.
    fn merge(self, file: FileConfig) -> Self {
        Self {
            script_dir: file.script_dir.unwrap_or(self.script_dir),
            script_ext: file.script_ext.unwrap_or(self.script_ext),
            command_name: file.command_name.unwrap_or(self.command_name),
            launcher_name: file.launcher_name.unwrap_or(self.launcher_name),
        }
    }

    /// Overlay `SCRIPTMAN_*` environment variables onto this config.
    fn apply_env(self) -> Self {
        Self {
            script_dir: env::var("SCRIPTMAN_SCRIPT_DIR")
                .map(PathBuf::from)
                .unwrap_or(self.script_dir),
            script_ext: env::var("SCRIPTMAN_SCRIPT_EXT").unwrap_or(self.script_ext),
            command_name: env::var("SCRIPTMAN_COMMAND_NAME").unwrap_or(self.command_name),
            launcher_name: env::var("SCRIPTMAN_LAUNCHER_NAME").unwrap_or(self.launcher_name),
        }
    }

    /// Check invariants the pipeline relies on.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the extension lacks a leading dot or
    /// any of the names are empty.
    pub fn validate(&self) -> Result<()> {
        if !self.script_ext.starts_with('.') || self.script_ext.len() < 2 {
            return Err(Error::InvalidConfig(format!(
                "script_ext must start with '.' and name an extension, got '{}'",
                self.script_ext
            )));
        }
        if self.command_name.is_empty() {
            return Err(Error::InvalidConfig(
                "command_name must not be empty".to_string(),
            ));
        }
        if self.launcher_name.is_empty() {
            return Err(Error::InvalidConfig(
                "launcher_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse a TOML config file into a partial config.
fn load_toml_file(path: &Path) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| Error::io(path, &e))?;
    toml::from_str(&raw).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
