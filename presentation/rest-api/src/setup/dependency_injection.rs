use std::sync::Arc;

use business::application::receipt::get_points::GetReceiptPointsUseCaseImpl;
use business::application::receipt::process::ProcessReceiptUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::receipt::repository::PointsRepository;
use logger::TracingLogger;
use persistence::receipt::repository::PointsRepositoryInMemory;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub receipt_api: crate::api::receipt::routes::ReceiptApi,
}

impl DependencyContainer {
    /// Wires the APIs around a fresh in-memory points store.
    pub fn new() -> Self {
        Self::with_repository(Arc::new(PointsRepositoryInMemory::new()))
    }

    pub fn with_repository(points_repository: Arc<dyn PointsRepository>) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        let process_use_case = Arc::new(ProcessReceiptUseCaseImpl {
            repository: points_repository.clone(),
            logger: logger.clone(),
        });
        let get_points_use_case = Arc::new(GetReceiptPointsUseCaseImpl {
            repository: points_repository,
            logger,
        });

        let receipt_api =
            crate::api::receipt::routes::ReceiptApi::new(process_use_case, get_points_use_case);

        Self {
            health_api,
            receipt_api,
        }
    }
}
