use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct Entry<T> {
    value: T,
    stored_at: Instant,
}

/// Single-slot cache whose value goes stale after a fixed window.
///
/// A zero window never returns a value, so every read falls through to the
/// source.
pub struct RevalidatingCache<T> {
    window: Duration,
    slot: Arc<RwLock<Option<Entry<T>>>>,
}

impl<T: Clone> RevalidatingCache<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Cached value, if it was stored less than `window` ago
    pub async fn get_fresh(&self) -> Option<T> {
        if self.window.is_zero() {
            return None;
        }

        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|entry| entry.stored_at.elapsed() < self.window)
            .map(|entry| entry.value.clone())
    }

    pub async fn store(&self, value: T) {
        if self.window.is_zero() {
            return;
        }

        let mut slot = self.slot.write().await;
        *slot = Some(Entry {
            value,
            stored_at: Instant::now(),
        });
    }

    pub async fn invalidate(&self) {
        self.slot.write().await.take();
    }
}

impl<T> Clone for RevalidatingCache<T> {
    fn clone(&self) -> Self {
        Self {
            window: self.window,
            slot: self.slot.clone(),
        }
    }
}
