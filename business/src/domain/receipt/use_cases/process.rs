use async_trait::async_trait;

use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::Receipt;
use crate::domain::receipt::value_objects::ReceiptId;

pub struct ProcessReceiptParams {
    pub receipt: Receipt,
}

#[async_trait]
pub trait ProcessReceiptUseCase: Send + Sync {
    async fn execute(&self, params: ProcessReceiptParams) -> Result<ReceiptId, ReceiptError>;
}
