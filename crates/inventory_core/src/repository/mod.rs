//! Repository layer: the interface the application depends on.
//!
//! # Responsibility
//! - Expose item capabilities independent of the storage technology.
//! - Provide the store-backed implementation and an in-memory backing.
//!
//! # Invariants
//! - Implementations add no validation, derived fields or caching.
//! - Store faults reach callers unchanged.

pub mod items_repository;
pub mod memory;
pub mod offline;

pub use items_repository::{ItemStream, ItemsRepository, RepoResult};
pub use memory::InMemoryItemsRepository;
pub use offline::OfflineItemsRepository;
