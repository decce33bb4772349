use poem::http::StatusCode;
use poem_openapi::payload::PlainText;

use business::domain::receipt::errors::ReceiptError;

use crate::api::error::{
    INTERNAL_ERROR_MESSAGE, INVALID_RECEIPT_MESSAGE, IntoErrorResponse, RECEIPT_NOT_FOUND_MESSAGE,
};

impl IntoErrorResponse for ReceiptError {
    fn into_error_response(self) -> (StatusCode, PlainText<String>) {
        let (status, message) = match &self {
            ReceiptError::Invalid(_) => (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE),
            ReceiptError::NotFound => (StatusCode::NOT_FOUND, RECEIPT_NOT_FOUND_MESSAGE),
            ReceiptError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, PlainText(message.to_string()))
    }
}
