use clap::Parser;
use std::path::PathBuf;
use xivenv_core::{Config, PathFilterMode};

#[derive(Parser, Debug)]
#[command(name = "xivenv")]
#[command(version, about = "Recreate the environment of a running FINAL FANTASY XIV wine process", long_about = None)]
#[command(after_help = "  [COMMAND [ARGS...]]
        Provide a custom application to run. Defaults to $SHELL.

Redirect the command output to create a shell script instead of dropping a shell or launching the specified command:
    xivenv > ffxiv-env.sh
    xivenv wine winecfg > winecfg.sh")]
pub struct Cli {
    /// Toggle verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable even more verbose debug output (implies -v)
    #[arg(short, long)]
    pub debug: bool,

    /// Select the process ID of FFXIV instead of auto detection
    #[arg(short, long, value_name = "PID")]
    pub pid: Option<u32>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE", env = "XIVENV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where the process pseudo-filesystem is mounted
    #[arg(long, value_name = "DIR")]
    pub proc_root: Option<PathBuf>,

    /// Binary name to look for in the command line of wine processes
    #[arg(long, value_name = "NAME")]
    pub target: Option<String>,

    /// Drop every PATH entry of the game that is not part of steam
    #[arg(long)]
    pub strict_path: bool,

    /// Command to run inside the environment
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// Flags given on the command line take precedence over `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(root) = &self.proc_root {
            config.proc_root = root.clone();
        }
        if let Some(target) = &self.target {
            config.target_marker = target.clone();
        }
        if self.strict_path {
            config.path_filter = PathFilterMode::Strict;
        }
        config
    }
}
