use std::sync::atomic::{AtomicI32, Ordering};

/// Monotonic id counter for whiskies the service creates itself.
///
/// Ids handed out by clients on create never pass through here, so the
/// counter does not know about them.
#[derive(Debug, Default)]
pub struct IdAllocator {
    counter: AtomicI32,
}

impl IdAllocator {
    /// Returns the current value and advances the counter.
    pub fn next(&self) -> i32 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }
}
