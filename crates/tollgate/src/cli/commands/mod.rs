//! CLI commands

mod classify;
mod init;

pub use classify::ClassifyCommand;
pub use init::InitCommand;
