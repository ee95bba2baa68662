//! Common utilities shared across the domain

mod string;

pub use string::humanize_key;
