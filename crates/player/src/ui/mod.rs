//! UI layer.
//!
//! `presentation` holds the pure view builders every front end shares;
//! `terminal` is the line-oriented front end shipped with the binary.

pub mod presentation;
pub mod terminal;
