//! Short-lived in-memory caching for upstream lookups.
//!
//! The cache is constructed once at startup and shared by reference with the
//! retrieval layer; there is no global instance.

mod clock;
mod expiring;

pub use clock::{Clock, ManualClock, SystemClock};
pub use expiring::{CacheEntry, ExpiringCache};
