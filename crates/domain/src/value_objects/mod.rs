//! Value objects - Immutable objects defined by their attributes

mod inventory_stats;
mod session;
mod settings;
mod tab;

pub use inventory_stats::InventoryStats;
pub use session::{CurrentUser, Session};
pub use settings::{parse_flag, ClientSettings, DEFAULT_API_URL};
pub use tab::Tab;
