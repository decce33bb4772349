use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::receipt::repository::PointsRepository;
use business::domain::receipt::value_objects::{Points, ReceiptId};

type IdGenerator = Box<dyn Fn() -> ReceiptId + Send + Sync>;

/// Process-lifetime store of receipt scores.
///
/// Id generation and insertion happen under the same write lock, so two
/// concurrent saves can never claim the same id.
pub struct PointsRepositoryInMemory {
    points: RwLock<HashMap<ReceiptId, Points>>,
    generate_id: IdGenerator,
}

impl PointsRepositoryInMemory {
    pub fn new() -> Self {
        Self::with_id_generator(ReceiptId::generate)
    }

    pub fn with_id_generator(generate_id: impl Fn() -> ReceiptId + Send + Sync + 'static) -> Self {
        Self {
            points: RwLock::new(HashMap::new()),
            generate_id: Box::new(generate_id),
        }
    }

    pub async fn len(&self) -> usize {
        self.points.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for PointsRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PointsRepository for PointsRepositoryInMemory {
    async fn save(&self, points: Points) -> Result<ReceiptId, RepositoryError> {
        let mut stored = self.points.write().await;

        loop {
            let id = (self.generate_id)();
            if let Entry::Vacant(entry) = stored.entry(id.clone()) {
                entry.insert(points);
                return Ok(id);
            }
            tracing::debug!(id = %id, "receipt id collision, regenerating");
        }
    }

    async fn get_by_id(&self, id: &ReceiptId) -> Result<Points, RepositoryError> {
        let stored = self.points.read().await;

        stored.get(id).copied().ok_or_else(RepositoryError::not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn should_return_saved_points() {
        let repository = PointsRepositoryInMemory::new();

        let id = repository.save(Points::new(28)).await.unwrap();
        let points = repository.get_by_id(&id).await.unwrap();

        assert_eq!(points, Points::new(28));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let repository = PointsRepositoryInMemory::new();
        repository.save(Points::new(5)).await.unwrap();

        let result = repository.get_by_id(&ReceiptId::new("unknown-id")).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_never_reuse_an_id() {
        let repository = PointsRepositoryInMemory::new();
        let mut ids = HashSet::new();

        for n in 0..10_000 {
            let id = repository.save(Points::new(n)).await.unwrap();
            assert!(ids.insert(id), "id issued twice");
        }

        assert_eq!(repository.len().await, 10_000);
    }

    #[tokio::test]
    async fn should_regenerate_id_on_collision() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        // Yields "a", "a", "b", ...
        let repository = PointsRepositoryInMemory::with_id_generator(move || {
            match counter.fetch_add(1, Ordering::SeqCst) {
                0 | 1 => ReceiptId::new("a"),
                _ => ReceiptId::new("b"),
            }
        });

        let first = repository.save(Points::new(1)).await.unwrap();
        let second = repository.save(Points::new(2)).await.unwrap();

        assert_eq!(first, ReceiptId::new("a"));
        assert_eq!(second, ReceiptId::new("b"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(repository.get_by_id(&first).await.unwrap(), Points::new(1));
        assert_eq!(repository.get_by_id(&second).await.unwrap(), Points::new(2));
    }

    #[tokio::test]
    async fn should_keep_every_record_under_concurrent_saves() {
        let repository = Arc::new(PointsRepositoryInMemory::new());

        let handles: Vec<_> = (0..64)
            .map(|n| {
                let repository = repository.clone();
                tokio::spawn(async move { repository.save(Points::new(n)).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().unwrap());
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(repository.len().await, 64);
    }

    #[tokio::test]
    async fn should_start_empty() {
        assert!(PointsRepositoryInMemory::default().is_empty().await);
    }
}
