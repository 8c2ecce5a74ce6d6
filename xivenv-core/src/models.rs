use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::whitelist::{SHELL, STEAM_USER, WINEPREFIX};

/// A process seen while scanning the process table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCandidate {
    pub pid: u32,
    pub cmdline: Vec<String>,
}

impl ProcessCandidate {
    /// Build a candidate from a raw, NUL delimited `cmdline` record.
    pub fn from_raw(pid: u32, raw: &[u8]) -> Self {
        let cmdline = String::from_utf8_lossy(raw)
            .split('\0')
            .map(str::to_string)
            .collect();
        Self { pid, cmdline }
    }

    /// The token after the loader, i.e. the Windows binary when running
    /// under wine.
    pub fn binary(&self) -> Option<&str> {
        self.cmdline.get(1).map(String::as_str)
    }
}

/// What a candidate's command line must look like to be selected
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetSignature {
    pub exe_marker: String,
    pub binary_marker: String,
}

impl Default for TargetSignature {
    fn default() -> Self {
        Self {
            exe_marker: ".exe".to_string(),
            binary_marker: "ffxivboot.exe".to_string(),
        }
    }
}

impl TargetSignature {
    pub fn new(binary_marker: impl Into<String>) -> Self {
        Self {
            binary_marker: binary_marker.into(),
            ..Default::default()
        }
    }

    /// Check if the candidate runs a Windows executable at all
    pub fn is_windows_binary(&self, candidate: &ProcessCandidate) -> bool {
        candidate
            .binary()
            .is_some_and(|binary| binary.contains(&self.exe_marker))
    }

    /// Check if the candidate is the process we are looking for
    pub fn matches(&self, candidate: &ProcessCandidate) -> bool {
        self.is_windows_binary(candidate)
            && candidate
                .binary()
                .is_some_and(|binary| binary.contains(&self.binary_marker))
    }
}

/// Reconstructed environment, keyed by variable name.
///
/// Iteration is ordered by name, so anything rendered from it is stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct EnvironmentMap(BTreeMap<String, String>);

impl EnvironmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Insert `value` only when `key` is not set yet. Returns true if the
    /// default was applied.
    pub fn insert_default(&mut self, key: &str, value: &str) -> bool {
        if self.0.contains_key(key) {
            return false;
        }
        self.0.insert(key.to_string(), value.to_string());
        true
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn shell(&self) -> Option<&str> {
        self.get(SHELL)
    }

    /// The game was started through the Steam client
    pub fn is_steam(&self) -> bool {
        self.contains_key(STEAM_USER)
    }

    /// `$WINEPREFIX/<drive_root>`, relative when no prefix is set.
    pub fn drive_root(&self, drive_root: &str) -> PathBuf {
        PathBuf::from(self.get(WINEPREFIX).unwrap_or_default()).join(drive_root)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvironmentMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a EnvironmentMap {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// How the target pid was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateSource {
    /// Supplied by the caller, no scan was done
    Override,
    Scan {
        /// Number of process entries inspected
        scanned: usize,
        /// Entries whose command line could not be read
        unreadable: Vec<u32>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub pid: u32,
    pub source: LocateSource,
}

/// Result of reading and filtering a process environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub env: EnvironmentMap,
    /// Well formed records dropped because their name is not whitelisted
    pub filtered: Vec<String>,
    /// Records without `=` that were discarded
    pub malformed: Vec<String>,
    /// Variables that received a default value
    pub defaulted: Vec<String>,
}
