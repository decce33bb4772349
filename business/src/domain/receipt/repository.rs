use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::value_objects::{Points, ReceiptId};

/// Storage for computed scores. Records are immutable once saved.
#[async_trait]
pub trait PointsRepository: Send + Sync {
    /// Stores the points under a freshly generated, unused identifier.
    async fn save(&self, points: Points) -> Result<ReceiptId, RepositoryError>;
    async fn get_by_id(&self, id: &ReceiptId) -> Result<Points, RepositoryError>;
}
