use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use xivenv_core::{Result, XivenvError};

/// Access to per-process metadata.
///
/// `cmdline` and `environ` return the raw NUL delimited records.
pub trait ProcSource {
    /// All process ids currently listed, in ascending order
    fn pids(&self) -> Result<Vec<u32>>;

    fn cmdline(&self, pid: u32) -> io::Result<Vec<u8>>;

    fn environ(&self, pid: u32) -> io::Result<Vec<u8>>;

    /// Location of a record, used in diagnostics and errors
    fn record_path(&self, pid: u32, record: &str) -> PathBuf {
        PathBuf::from(format!("/proc/{}/{}", pid, record))
    }
}

/// The process pseudo-filesystem, normally mounted at `/proc`
#[derive(Debug, Clone)]
pub struct ProcFs {
    root: PathBuf,
}

impl ProcFs {
    pub fn new() -> Self {
        Self::with_root("/proc")
    }

    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcSource for ProcFs {
    fn pids(&self) -> Result<Vec<u32>> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| XivenvError::ProcessTable {
            path: self.root.clone(),
            source,
        })?;

        let mut pids: Vec<u32> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().to_str()?.parse::<u32>().ok())
            .filter(|pid| *pid > 0)
            .collect();
        pids.sort_unstable();

        debug!(root = %self.root.display(), count = pids.len(), "found process list");
        Ok(pids)
    }

    fn cmdline(&self, pid: u32) -> io::Result<Vec<u8>> {
        std::fs::read(self.record_path(pid, "cmdline"))
    }

    fn environ(&self, pid: u32) -> io::Result<Vec<u8>> {
        std::fs::read(self.record_path(pid, "environ"))
    }

    fn record_path(&self, pid: u32, record: &str) -> PathBuf {
        self.root.join(pid.to_string()).join(record)
    }
}
