//! Per-cart mutual exclusion.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use common::CartId;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Hands out one async lock per cart.
///
/// `add_item_to_cart` is a read-modify-write over the repository. Holding the
/// cart's guard from the lookup until the save keeps two concurrent
/// additions to the same cart from overwriting each other, while additions to
/// different carts still run in parallel.
#[derive(Debug, Default)]
pub struct CartLocks {
    locks: Mutex<HashMap<CartId, Arc<AsyncMutex<()>>>>,
}

impl CartLocks {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and returns exclusive access to a cart.
    pub async fn lock(&self, cart_id: CartId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            // Entries nobody holds or waits on can go.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(cart_id).or_default())
        };
        lock.lock_owned().await
    }

    /// Returns the number of carts currently tracked.
    pub fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
