use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use domain::RepositoryError;
use tokio::sync::RwLock;

/// Keyed in-memory table shared by the repository implementations.
///
/// Rows are stored by value and cloned on the way in and out, so callers
/// never hold a reference into the table.
#[derive(Debug)]
pub(crate) struct Table<K, V> {
    entity: &'static str,
    rows: Arc<RwLock<HashMap<K, V>>>,
    fail_on_save: Arc<AtomicBool>,
}

impl<K, V> Clone for Table<K, V> {
    fn clone(&self) -> Self {
        Self {
            entity: self.entity,
            rows: Arc::clone(&self.rows),
            fail_on_save: Arc::clone(&self.fail_on_save),
        }
    }
}

impl<K, V> Table<K, V>
where
    K: Eq + Hash + Copy + std::fmt::Display,
    V: Clone,
{
    pub(crate) fn new(entity: &'static str) -> Self {
        Self {
            entity,
            rows: Arc::new(RwLock::new(HashMap::new())),
            fail_on_save: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) async fn get(&self, key: K) -> Result<V, RepositoryError> {
        self.rows
            .read()
            .await
            .get(&key)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(self.entity, key))
    }

    pub(crate) async fn get_many(&self, keys: &[K]) -> Vec<V> {
        let rows = self.rows.read().await;
        keys.iter().filter_map(|key| rows.get(key).cloned()).collect()
    }

    pub(crate) fn check_writable(&self) -> Result<(), RepositoryError> {
        if self.fail_on_save.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable(format!(
                "{} storage rejected the write",
                self.entity
            )));
        }
        Ok(())
    }

    pub(crate) async fn upsert(&self, key: K, value: V) -> Result<(), RepositoryError> {
        self.check_writable()?;
        self.rows.write().await.insert(key, value);
        Ok(())
    }

    pub(crate) async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub(crate) fn set_fail_on_save(&self, fail: bool) {
        self.fail_on_save.store(fail, Ordering::SeqCst);
    }
}
