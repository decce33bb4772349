use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::repository::PointsRepository;
use crate::domain::receipt::scoring;
use crate::domain::receipt::use_cases::process::{ProcessReceiptParams, ProcessReceiptUseCase};
use crate::domain::receipt::value_objects::ReceiptId;

pub struct ProcessReceiptUseCaseImpl {
    pub repository: Arc<dyn PointsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProcessReceiptUseCase for ProcessReceiptUseCaseImpl {
    async fn execute(&self, params: ProcessReceiptParams) -> Result<ReceiptId, ReceiptError> {
        let points = match scoring::score_receipt(params.receipt) {
            Ok(points) => points,
            Err(reason) => {
                self.logger
                    .warn(&format!("Rejected invalid receipt: {}", reason));
                return Err(ReceiptError::Invalid(reason));
            }
        };

        let id = match self.repository.save(points).await {
            Ok(id) => id,
            Err(err) => {
                self.logger
                    .error(&format!("Failed to store receipt points: {}", err));
                return Err(err.into());
            }
        };

        self.logger
            .info(&format!("Receipt {} scored {} points", id, points));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::receipt::errors::InvalidReceipt;
    use crate::domain::receipt::model::{Receipt, ReceiptItem};
    use crate::domain::receipt::value_objects::Points;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub PointsRepo {}

        #[async_trait]
        impl PointsRepository for PointsRepo {
            async fn save(&self, points: Points) -> Result<ReceiptId, RepositoryError>;
            async fn get_by_id(&self, id: &ReceiptId) -> Result<Points, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn corner_market_receipt() -> Receipt {
        Receipt {
            retailer: Some("M&M Corner Market".to_string()),
            purchase_date: Some("2022-03-20".to_string()),
            purchase_time: Some("14:33".to_string()),
            total: Some(9.00),
            items: Some(vec![
                ReceiptItem {
                    short_description: Some("Gatorade".to_string()),
                    price: Some(2.25),
                };
                4
            ]),
        }
    }

    #[tokio::test]
    async fn should_store_score_and_return_id() {
        let mut mock_repo = MockPointsRepo::new();
        mock_repo
            .expect_save()
            .with(eq(Points::new(109)))
            .times(1)
            .returning(|_| Ok(ReceiptId::new("generated-id")));

        let use_case = ProcessReceiptUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ProcessReceiptParams {
                receipt: corner_market_receipt(),
            })
            .await;

        assert_eq!(result.unwrap(), ReceiptId::new("generated-id"));
    }

    #[tokio::test]
    async fn should_reject_invalid_receipt_without_storing() {
        let mut mock_repo = MockPointsRepo::new();
        mock_repo.expect_save().never();

        let use_case = ProcessReceiptUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ProcessReceiptParams {
                receipt: Receipt {
                    total: None,
                    ..corner_market_receipt()
                },
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ReceiptError::Invalid(InvalidReceipt::MissingField("total"))
        ));
    }

    #[tokio::test]
    async fn should_log_rejection_reason_as_warning() {
        let mut logger = MockLog::new();
        logger
            .expect_warn()
            .withf(|message| message.contains("receipt.invalid_purchase_time"))
            .times(1)
            .returning(|_| ());

        let use_case = ProcessReceiptUseCaseImpl {
            repository: Arc::new(MockPointsRepo::new()),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(ProcessReceiptParams {
                receipt: Receipt {
                    purchase_time: Some("16:60".to_string()),
                    ..corner_market_receipt()
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), ReceiptError::Invalid(_)));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockPointsRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = ProcessReceiptUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ProcessReceiptParams {
                receipt: corner_market_receipt(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ReceiptError::Repository(RepositoryError::Persistence)
        ));
    }
}
