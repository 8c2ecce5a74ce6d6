pub mod driver;
pub mod executor;
pub mod process;
pub mod script;

pub use driver::{OutputDriver, OutputMode, RunOutcome, StreamProbe};
pub use executor::Launcher;
pub use process::LaunchSpec;
pub use script::{quote, render_script, write_script};
