//! Application services

mod session_store;

pub use session_store::SessionStore;
