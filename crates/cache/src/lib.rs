//! Cache store port and adapters.
//!
//! The cache is soft state: every entry is reconstructible from the
//! persistent repository, so deleting one is always safe and a backend
//! failure is never fatal to the caller's logical operation. Callers treat
//! [`CacheError`] as a miss (reads) or a degraded-success warning (writes).
//!
//! Two adapters are provided:
//!
//! - [`MemoryCache`] -- in-process map with per-entry TTL. Used by tests
//!   and by deployments without a `REDIS_URL`.
//! - [`RedisCache`] -- shared Redis backend behind a deadpool pool.

pub mod memory;
pub mod redis;
pub mod store;

pub use memory::MemoryCache;
pub use redis::RedisCache;
pub use store::{CacheError, CacheStore};
