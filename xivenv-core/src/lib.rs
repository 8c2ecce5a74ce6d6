pub mod config;
pub mod error;
pub mod models;
pub mod whitelist;

pub use config::{Config, PathFilterMode};
pub use error::{Result, XivenvError};
pub use models::*;
pub use whitelist::{is_whitelisted, WHITELIST};
