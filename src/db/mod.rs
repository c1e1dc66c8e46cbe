//! Persistence layer: per-profile key-value slots.

pub mod firestore;
pub mod memory;
pub mod profile_store;

pub use firestore::FirestoreStore;
pub use memory::MemoryStore;
pub use profile_store::ProfileStore;

use crate::error::AppError;
use async_trait::async_trait;

/// Slot keys, one JSON document each.
pub mod slots {
    pub const PROFILE: &str = "wildcord_profile";
    pub const RHYTHM: &str = "wildcord_rhythm";
    pub const CHAT: &str = "wildcord_chat";
    pub const CHECK_INS: &str = "wildcord_checkins";
    pub const STATS: &str = "wildcord_stats";
    pub const RSVPS: &str = "wildcord_rsvps";
}

/// Collection names as constants.
pub mod collections {
    /// One document per (profile, slot)
    pub const PROFILE_SLOTS: &str = "profile_slots";
}

/// String-valued key-value storage namespaced by profile.
///
/// `get` returns `Ok(None)` for an absent slot. Errors are reserved for
/// backend failures.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, profile_id: &str, key: &str) -> Result<Option<String>, AppError>;

    async fn set(&self, profile_id: &str, key: &str, value: String) -> Result<(), AppError>;
}
