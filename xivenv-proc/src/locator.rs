use tracing::{debug, info, warn};
use xivenv_core::{LocateSource, Located, ProcessCandidate, Result, TargetSignature, XivenvError};

use crate::procfs::ProcSource;

/// Finds the game process in the process table
#[derive(Debug, Clone, Default)]
pub struct ProcessLocator {
    signature: TargetSignature,
}

impl ProcessLocator {
    pub fn new(signature: TargetSignature) -> Self {
        Self { signature }
    }

    pub fn signature(&self) -> &TargetSignature {
        &self.signature
    }

    /// Return the pid of the target process.
    ///
    /// An `override_pid` is trusted as is and no scan happens. Otherwise the
    /// first candidate, in the order `source` lists them, whose second
    /// command line token matches the signature is selected. Candidates
    /// whose command line cannot be read are skipped.
    pub fn locate<S: ProcSource + ?Sized>(
        &self,
        source: &S,
        override_pid: Option<u32>,
    ) -> Result<Located> {
        if let Some(pid) = override_pid {
            info!(pid, "using provided PID");
            return Ok(Located {
                pid,
                source: LocateSource::Override,
            });
        }

        let pids = source.pids()?;
        let mut unreadable = Vec::new();
        let mut scanned = 0;

        for pid in pids {
            scanned += 1;

            let raw = match source.cmdline(pid) {
                Ok(raw) => raw,
                Err(e) => {
                    // processes exit mid-scan, or belong to someone else
                    warn!(
                        path = %source.record_path(pid, "cmdline").display(),
                        error = %e,
                        "failed to read cmdline"
                    );
                    unreadable.push(pid);
                    continue;
                }
            };

            let candidate = ProcessCandidate::from_raw(pid, &raw);
            if !self.signature.is_windows_binary(&candidate) {
                continue;
            }

            debug!(pid, binary = ?candidate.binary(), "inspecting windows process");
            if self.signature.matches(&candidate) {
                return Ok(Located {
                    pid,
                    source: LocateSource::Scan {
                        scanned,
                        unreadable,
                    },
                });
            }
        }

        Err(XivenvError::ProcessNotFound(
            self.signature.binary_marker.clone(),
        ))
    }
}
