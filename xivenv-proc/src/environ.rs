use tracing::debug;
use xivenv_core::whitelist::{SHELL, TERM, WINE};
use xivenv_core::{is_whitelisted, Config, Extraction, Result, XivenvError};

use crate::path::repair_path;
use crate::procfs::ProcSource;

/// One record of a raw environment block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvRecord<'a> {
    /// `NAME=value`, split on the first `=` only
    Pair(&'a str, &'a str),
    /// A record without any `=`
    Bare(&'a str),
}

/// Split a NUL delimited environment block into records. Empty records
/// (e.g. the trailing one) are skipped.
pub fn parse_environ(raw: &str) -> impl Iterator<Item = EnvRecord<'_>> {
    raw.split('\0')
        .filter(|record| !record.is_empty())
        .map(|record| match record.split_once('=') {
            Some((name, value)) => EnvRecord::Pair(name, value),
            None => EnvRecord::Bare(record),
        })
}

/// Keep the whitelisted variables of a raw environment block and fill in
/// `TERM` and `SHELL` when they are missing.
pub fn filter_environ(raw: &[u8], config: &Config) -> Extraction {
    let raw = String::from_utf8_lossy(raw);
    let mut extraction = Extraction::default();

    for record in parse_environ(&raw) {
        match record {
            EnvRecord::Pair(name, value) if is_whitelisted(name) => {
                extraction.env.insert(name, value);
            }
            EnvRecord::Pair(name, _) => extraction.filtered.push(name.to_string()),
            // wine is sometimes only flagged, not given a path
            EnvRecord::Bare(name) if name == WINE => {
                extraction.env.insert(WINE, "");
            }
            EnvRecord::Bare(name) => extraction.malformed.push(name.to_string()),
        }
    }

    apply_defaults(&mut extraction, config);
    extraction
}

fn apply_defaults(extraction: &mut Extraction, config: &Config) {
    for (key, value) in [(TERM, &config.default_term), (SHELL, &config.default_shell)] {
        if extraction.env.insert_default(key, value) {
            debug!(key, value = %value, "applied default");
            extraction.defaulted.push(key.to_string());
        }
    }
}

/// Read the environment of `pid`, filter it and repair its `PATH` against
/// the `PATH` of this process.
pub fn extract_environment<S: ProcSource + ?Sized>(
    source: &S,
    pid: u32,
    config: &Config,
) -> Result<Extraction> {
    let raw = source.environ(pid).map_err(|e| XivenvError::Read {
        path: source.record_path(pid, "environ"),
        source: e,
    })?;

    let mut extraction = filter_environ(&raw, config);
    debug!(
        pid,
        kept = extraction.env.len(),
        filtered = extraction.filtered.len(),
        malformed = extraction.malformed.len(),
        "filtered environment"
    );

    let host_path = std::env::var("PATH").ok();
    repair_path(&mut extraction.env, config, host_path.as_deref());

    Ok(extraction)
}
