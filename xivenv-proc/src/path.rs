use std::path::Path;
use tracing::debug;
use xivenv_core::whitelist::{PATH, WINE};
use xivenv_core::{Config, EnvironmentMap, PathFilterMode};

pub const PATH_SEPARATOR: char = ':';

/// Rebuild `PATH` of the extracted environment.
///
/// The game's own segments are filtered by `config.path_marker`
/// (case-insensitive) according to `config.path_filter`. The directory of
/// the wine binary and then `host_path` are appended. Empty and `.`
/// segments are dropped.
pub fn repair_path(env: &mut EnvironmentMap, config: &Config, host_path: Option<&str>) {
    let original = env.get(PATH).unwrap_or_default().to_string();
    let mut segments = filter_segments(
        original.split(PATH_SEPARATOR).collect(),
        &config.path_marker,
        config.path_filter,
    );

    if let Some(dir) = env.get(WINE).and_then(wine_dir) {
        segments.push(dir);
    }
    if let Some(host) = host_path {
        segments.extend(host.split(PATH_SEPARATOR));
    }

    let repaired = segments
        .into_iter()
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join(&PATH_SEPARATOR.to_string());

    debug!(before = %original, after = %repaired, "repaired PATH");
    env.insert(PATH, repaired);
}

/// Directory holding the wine binary. The root is its own directory.
fn wine_dir(wine: &str) -> Option<&str> {
    let path = Path::new(wine);
    match path.parent() {
        Some(dir) => dir.to_str(),
        None if path.has_root() => Some("/"),
        None => None,
    }
}

fn filter_segments<'a>(segments: Vec<&'a str>, marker: &str, mode: PathFilterMode) -> Vec<&'a str> {
    let marker = marker.to_lowercase();
    let is_marked = |segment: &str| segment.to_lowercase().contains(&marker);

    match mode {
        // The filter loop of the original tool only ever ran its body when
        // PATH had exactly one segment.
        PathFilterMode::Legacy if segments.len() == 1 => {
            segments.into_iter().filter(|s| is_marked(*s)).collect()
        }
        PathFilterMode::Legacy => segments,
        PathFilterMode::Strict => segments.into_iter().filter(|s| is_marked(*s)).collect(),
    }
}
