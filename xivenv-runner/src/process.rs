use std::path::PathBuf;
use tracing::warn;
use xivenv_core::{EnvironmentMap, Result, XivenvError};

/// Everything needed to start the child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: String,
    pub args: Vec<String>,
    /// The complete environment of the child, nothing else is inherited
    pub env: Vec<(String, String)>,
    /// `None` keeps the working directory of this process
    pub working_directory: Option<PathBuf>,
}

impl LaunchSpec {
    /// Run `command` inside `env`, falling back to its `SHELL`.
    pub fn new(env: &EnvironmentMap, command: &[String]) -> Result<Self> {
        let (program, args) = match command.split_first() {
            Some((program, args)) => (program.clone(), args.to_vec()),
            None => {
                let shell = env.shell().filter(|shell| !shell.is_empty()).ok_or_else(|| {
                    XivenvError::InvalidConfiguration(
                        "no command given and SHELL is not set".to_string(),
                    )
                })?;
                (shell.to_string(), Vec::new())
            }
        };

        Ok(Self {
            program,
            args,
            env: env
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            working_directory: None,
        })
    }

    /// Start in `$WINEPREFIX/<drive_root>` if that directory exists.
    pub fn in_drive_root(mut self, env: &EnvironmentMap, drive_root: &str) -> Self {
        let dir = env.drive_root(drive_root);
        if dir.is_dir() {
            self.working_directory = Some(dir);
        } else {
            warn!(path = %dir.display(), "drive root does not exist, staying in current directory");
            self.working_directory = None;
        }
        self
    }

    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }
}
