//! Test doubles and fixtures shared across unit tests.

mod fixtures;
mod recording_ui;

pub use fixtures::{api_request_failed, http_error, sword_inventory_json};
pub use recording_ui::RecordingUi;
