use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, error, info, warn};
use xivenv_core::{Result, XivenvError};

use crate::process::LaunchSpec;

/// Starts a [`LaunchSpec`] with inherited stdio and waits for it
#[derive(Debug, Clone, Default)]
pub struct Launcher;

impl Launcher {
    pub fn new() -> Self {
        Self
    }

    /// Look `program` up in the child's own `PATH`.
    fn resolve(&self, spec: &LaunchSpec) -> Result<PathBuf> {
        let cwd = match &spec.working_directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        which::which_in(&spec.program, spec.env_var("PATH"), cwd).map_err(|e| {
            XivenvError::Spawn {
                program: spec.program.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, e.to_string()),
            }
        })
    }

    /// Run the child to completion. The working directory of this process
    /// is left untouched; the child is started in
    /// `spec.working_directory` instead.
    pub fn launch(&self, spec: &LaunchSpec) -> Result<ExitStatus> {
        let program = self.resolve(spec)?;
        info!(
            program = %program.display(),
            args = ?spec.args,
            env_count = spec.env.len(),
            "launching in environment"
        );

        let mut command = Command::new(&program);
        command
            .args(&spec.args)
            .env_clear()
            .envs(spec.env.iter().map(|(key, value)| (key, value)))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &spec.working_directory {
            debug!(cwd = %dir.display(), "changing directory for child");
            command.current_dir(dir);
        }

        let status = command.status().map_err(|e| {
            error!(program = %program.display(), error = %e, "failed to spawn process");
            XivenvError::Spawn {
                program: spec.program.clone(),
                source: e,
            }
        })?;

        if status.success() {
            info!(status = %status, "process exited");
        } else {
            warn!(status = %status, "process exited unsuccessfully");
        }
        Ok(status)
    }
}
