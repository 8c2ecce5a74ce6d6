use std::io::{IsTerminal, Write};
use std::process::ExitStatus;
use tracing::info;
use xivenv_core::{EnvironmentMap, Result};

use crate::executor::Launcher;
use crate::process::LaunchSpec;
use crate::script::write_script;

/// Tells whether an output stream is attached to an interactive terminal
pub trait StreamProbe {
    fn is_interactive(&self) -> bool;
}

impl StreamProbe for std::io::Stdout {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print a shell script recreating the environment
    Script,
    /// Launch the command inside the environment
    Exec,
}

impl OutputMode {
    /// Redirected output gets a script, a terminal gets the command.
    pub fn detect<P: StreamProbe + ?Sized>(probe: &P) -> Self {
        if probe.is_interactive() {
            OutputMode::Exec
        } else {
            OutputMode::Script
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    ScriptWritten,
    Exited(ExitStatus),
}

impl RunOutcome {
    /// Exit code this tool should finish with
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::ScriptWritten => 0,
            // killed by a signal
            RunOutcome::Exited(status) => status.code().unwrap_or(1),
        }
    }
}

/// Turns a reconstructed environment into either a script or a running
/// process
#[derive(Debug, Clone)]
pub struct OutputDriver {
    mode: OutputMode,
    drive_root: String,
    launcher: Launcher,
}

impl OutputDriver {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            drive_root: "drive_c".to_string(),
            launcher: Launcher::new(),
        }
    }

    pub fn with_drive_root(mut self, drive_root: impl Into<String>) -> Self {
        self.drive_root = drive_root.into();
        self
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Script mode writes to `out` and spawns nothing. Exec mode runs
    /// `command` (or `$SHELL`) and blocks until it exits.
    pub fn run<W: Write + ?Sized>(
        &self,
        env: &EnvironmentMap,
        command: &[String],
        out: &mut W,
    ) -> Result<RunOutcome> {
        match self.mode {
            OutputMode::Script => {
                info!("building shell script");
                write_script(out, env, command, &self.drive_root)?;
                Ok(RunOutcome::ScriptWritten)
            }
            OutputMode::Exec => {
                let spec = LaunchSpec::new(env, command)?.in_drive_root(env, &self.drive_root);
                let status = self.launcher.launch(&spec)?;
                Ok(RunOutcome::Exited(status))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xivenv_core::XivenvError;

    struct Probe(bool);

    impl StreamProbe for Probe {
        fn is_interactive(&self) -> bool {
            self.0
        }
    }

    fn env_with(pairs: &[(&str, &str)]) -> EnvironmentMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_detect_mode() {
        assert_eq!(OutputMode::detect(&Probe(true)), OutputMode::Exec);
        assert_eq!(OutputMode::detect(&Probe(false)), OutputMode::Script);
    }

    #[test]
    fn test_script_mode_writes_script() {
        let env = env_with(&[("FOO", "a\"b")]);
        let mut out: Vec<u8> = Vec::new();
        let outcome = OutputDriver::new(OutputMode::Script)
            .run(&env, &["run".to_string(), "x y".to_string()], &mut out)
            .unwrap();

        assert_eq!(outcome, RunOutcome::ScriptWritten);
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#!/bin/sh\n\nexport FOO=\"a\\\"b\"\n\ncd $WINEPREFIX/drive_c\nrun \"x y\"\n"
        );
    }

    #[test]
    fn test_script_mode_never_spawns() {
        // the command does not exist, which would fail in exec mode
        let mut out: Vec<u8> = Vec::new();
        let outcome = OutputDriver::new(OutputMode::Script)
            .run(&EnvironmentMap::new(), &["xivenv-no-such-program".to_string()], &mut out)
            .unwrap();
        assert_eq!(outcome, RunOutcome::ScriptWritten);
    }

    #[test]
    fn test_exec_mode_runs_command_in_drive_root() {
        let prefix = tempfile::tempdir().unwrap();
        let drive_c = prefix.path().join("drive_c");
        std::fs::create_dir(&drive_c).unwrap();
        let env = env_with(&[
            ("PATH", "/usr/bin:/bin"),
            ("WINEPREFIX", prefix.path().to_str().unwrap()),
        ]);

        let mut out: Vec<u8> = Vec::new();
        let command = vec!["sh".to_string(), "-c".to_string(), "touch marker; exit 4".to_string()];
        let outcome = OutputDriver::new(OutputMode::Exec)
            .run(&env, &command, &mut out)
            .unwrap();

        assert!(out.is_empty());
        assert!(drive_c.join("marker").exists());
        assert_eq!(outcome.exit_code(), 4);
    }

    #[test]
    fn test_exec_mode_falls_back_to_shell() {
        let env = env_with(&[("PATH", "/usr/bin:/bin"), ("SHELL", "true")]);
        let outcome = OutputDriver::new(OutputMode::Exec)
            .run(&env, &[], &mut std::io::sink())
            .unwrap();
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_exec_mode_surfaces_spawn_failure() {
        let env = env_with(&[("PATH", "/usr/bin:/bin")]);
        let err = OutputDriver::new(OutputMode::Exec)
            .run(&env, &["xivenv-no-such-program".to_string()], &mut std::io::sink())
            .unwrap_err();
        assert!(matches!(err, XivenvError::Spawn { .. }));
    }
}
