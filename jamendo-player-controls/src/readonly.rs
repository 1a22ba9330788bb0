use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};

/// Shared player state that only the player may write.
#[derive(Debug)]
pub struct ReadOnly<T>(Arc<RwLock<T>>);

impl<T> Clone for ReadOnly<T> {
    fn clone(&self) -> Self {
        ReadOnly(self.0.clone())
    }
}

impl<T> ReadOnly<T> {
    pub async fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read().await
    }

    pub async fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.read().await.clone()
    }
}

impl<T> From<Arc<RwLock<T>>> for ReadOnly<T> {
    fn from(state: Arc<RwLock<T>>) -> Self {
        ReadOnly(state)
    }
}
