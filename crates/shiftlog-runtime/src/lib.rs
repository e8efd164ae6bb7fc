pub mod config;
mod error;
mod session;

pub use config::{resolve_workspace_path, Config};
pub use error::{Error, Result};
pub use session::Session;
