//! Game Vault Protocol - Wire types for the game API
//!
//! This crate contains the request and response bodies exchanged with the
//! game API server:
//! - `POST {base}/login`
//! - `GET {base}/inventory`
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain crate
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Lenient decoding** - Accept the field spellings the server actually emits

pub mod requests;
pub mod responses;

pub use requests::LoginRequest;
pub use responses::{ErrorResponse, InventoryItemData, InventoryResponse, LoginResponse};
