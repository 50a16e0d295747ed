//! In-memory store backing all three collections.
//!
//! Used for `STORAGE_BACKEND=memory` and for tests. DashMap's sharded locks
//! let concurrent requests touch different keys without blocking each other.

mod store;

pub use store::MemoryStore;
