use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, XivenvError};
use crate::models::TargetSignature;

/// How `PATH` segments of the game process are filtered
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PathFilterMode {
    /// Only a single-segment `PATH` is filtered; longer ones are kept as is.
    /// This is what earlier releases of the tool effectively did.
    #[default]
    Legacy,
    /// Drop every segment that does not contain the marker
    Strict,
}

/// Runtime configuration, optionally loaded from a TOML file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub proc_root: PathBuf,
    pub target_marker: String,
    pub exe_marker: String,
    pub path_marker: String,
    pub path_filter: PathFilterMode,
    pub default_term: String,
    pub default_shell: String,
    pub drive_root: String,
}

impl Default for Config {
    fn default() -> Self {
        let signature = TargetSignature::default();
        Self {
            proc_root: PathBuf::from("/proc"),
            target_marker: signature.binary_marker,
            exe_marker: signature.exe_marker,
            path_marker: "steam".to_string(),
            path_filter: PathFilterMode::Legacy,
            default_term: "xterm".to_string(),
            default_shell: "/bin/bash".to_string(),
            drive_root: "drive_c".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| XivenvError::InvalidConfiguration(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            XivenvError::InvalidConfiguration(format!("{}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn signature(&self) -> TargetSignature {
        TargetSignature {
            exe_marker: self.exe_marker.clone(),
            binary_marker: self.target_marker.clone(),
        }
    }
}
