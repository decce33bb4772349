use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::repository::PointsRepository;
use crate::domain::receipt::use_cases::get_points::{
    GetReceiptPointsParams, GetReceiptPointsUseCase,
};
use crate::domain::receipt::value_objects::Points;

pub struct GetReceiptPointsUseCaseImpl {
    pub repository: Arc<dyn PointsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetReceiptPointsUseCase for GetReceiptPointsUseCaseImpl {
    async fn execute(&self, params: GetReceiptPointsParams) -> Result<Points, ReceiptError> {
        self.logger
            .debug(&format!("Fetching points for receipt: {}", params.id));

        let points = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReceiptError::NotFound,
                other => ReceiptError::Repository(other),
            })?;

        Ok(points)
    }
}
