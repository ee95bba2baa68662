//! Game Vault player crate.
//!
//! Session client, game API adapter, platform storage and the terminal
//! front end. The `gamevault-player` binary wires them together via
//! [`runner`].

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use application::{dispatch, SessionClient, UiAction};
pub use state::Platform;
