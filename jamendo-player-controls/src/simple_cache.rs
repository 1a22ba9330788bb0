use time::Duration;
use tokio::{sync::RwLock, time::Instant};

/// A single value that expires `ttl` after it was stored.
#[derive(Debug)]
pub(crate) struct SimpleCache<T> {
    entry: RwLock<Option<(Instant, T)>>,
    ttl: Duration,
}

impl<T> SimpleCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entry: RwLock::new(None),
            ttl,
        }
    }

    pub async fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        match &*self.entry.read().await {
            Some((stored, value)) if stored.elapsed() < self.ttl => Some(value.clone()),
            _ => None,
        }
    }

    pub async fn set(&self, value: T) {
        *self.entry.write().await = Some((Instant::now(), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn values_expire_after_ttl() {
        let cache = SimpleCache::new(Duration::milliseconds(20));
        assert_eq!(cache.get().await, None::<u8>);

        cache.set(3).await;
        assert_eq!(cache.get().await, Some(3));

        tokio::time::sleep(std::time::Duration::from_millis(40)).await;
        assert_eq!(cache.get().await, None);
    }
}
