//! Runtime containers handed to the session client and the timer

mod platform;

pub use platform::{Platform, PlatformStorageAdapter};
