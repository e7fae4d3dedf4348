//! Identifier generation

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Caller-supplied zero-argument ID generator
pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// Random hyphenated v4 UUID drawn from the OS random source
pub fn random_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Generator yielding `<prefix>-1`, `<prefix>-2`, ...
pub fn sequential(prefix: impl Into<String>) -> IdGenerator {
    let prefix = prefix.into();
    let counter = AtomicU64::new(0);
    Arc::new(move || {
        let next = counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", prefix, next)
    })
}
