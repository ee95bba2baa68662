//! Line-oriented terminal front end
//!
//! `renderer` turns `UiUpdate`s into text, `commands` parses typed lines
//! into `UiAction`s and `shell` ties both to the session client.

pub mod commands;
pub mod renderer;
pub mod shell;

pub use commands::{parse_command, CommandError, ShellCommand, USAGE};
pub use renderer::TerminalUi;
pub use shell::run_shell;
