//! Reading the game process out of the process table: finding it, pulling
//! its environment and repairing `PATH`.

pub mod environ;
pub mod locator;
pub mod path;
pub mod procfs;

pub use environ::{extract_environment, filter_environ, parse_environ, EnvRecord};
pub use locator::ProcessLocator;
pub use path::{repair_path, PATH_SEPARATOR};
pub use procfs::{ProcFs, ProcSource};
