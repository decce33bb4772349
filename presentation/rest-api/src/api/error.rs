use poem::error::ReadBodyError;
use poem::http::StatusCode;
use poem_openapi::payload::PlainText;

pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid";
pub const RECEIPT_NOT_FOUND_MESSAGE: &str = "No receipt found for that id";
pub const BAD_REQUEST_MESSAGE: &str = "Bad request";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors are reported as a status code plus a short plain-text message.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, PlainText<String>);
}

/// Failures while extracting the request (reading or decoding the body).
impl IntoErrorResponse for poem::Error {
    fn into_error_response(self) -> (StatusCode, PlainText<String>) {
        if self.is::<ReadBodyError>() {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                PlainText(self.to_string()),
            );
        }
        (StatusCode::BAD_REQUEST, PlainText(self.to_string()))
    }
}
