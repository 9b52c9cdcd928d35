//! CLI commands

mod classify;
mod completions;
mod init;
mod log;

pub use classify::ClassifyCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use log::LogCommand;
