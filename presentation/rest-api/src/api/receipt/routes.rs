use std::sync::Arc;

use poem::Body;
use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{Json, PlainText},
};

use business::domain::receipt::model::Receipt;
use business::domain::receipt::use_cases::get_points::{
    GetReceiptPointsParams, GetReceiptPointsUseCase,
};
use business::domain::receipt::use_cases::process::{ProcessReceiptParams, ProcessReceiptUseCase};

use crate::api::error::IntoErrorResponse;
use crate::api::receipt::dto::{ProcessReceiptRequest, ReceiptIdResponse, ReceiptPointsResponse};
use crate::api::tags::ApiTags;

pub struct ReceiptApi {
    process_use_case: Arc<dyn ProcessReceiptUseCase>,
    get_points_use_case: Arc<dyn GetReceiptPointsUseCase>,
}

impl ReceiptApi {
    pub fn new(
        process_use_case: Arc<dyn ProcessReceiptUseCase>,
        get_points_use_case: Arc<dyn GetReceiptPointsUseCase>,
    ) -> Self {
        Self {
            process_use_case,
            get_points_use_case,
        }
    }
}

/// Receipt scoring API
///
/// Submit receipts for scoring and look up the awarded points.
#[OpenApi]
impl ReceiptApi {
    /// Process a receipt
    ///
    /// Scores the receipt and stores the result. Returns the identifier
    /// under which the points can be looked up. The body is read as JSON
    /// whatever its declared content type; `total` and `price` are decimal
    /// strings.
    #[oai(path = "/receipts/process", method = "post", tag = "ApiTags::Receipts")]
    async fn process(&self, body: Body) -> ProcessReceiptResponse {
        let bytes = match body.into_vec().await {
            Ok(bytes) => bytes,
            Err(err) => return process_bad_request(err.into()),
        };
        let request: ProcessReceiptRequest = match serde_json::from_slice(&bytes) {
            Ok(request) => request,
            Err(err) => return ProcessReceiptResponse::BadRequest(PlainText(err.to_string())),
        };
        let receipt = Receipt::from(request);

        match self
            .process_use_case
            .execute(ProcessReceiptParams { receipt })
            .await
        {
            Ok(id) => ProcessReceiptResponse::Ok(Json(ReceiptIdResponse { id: id.to_string() })),
            Err(err) => {
                let (status, text) = err.into_error_response();
                match status.as_u16() {
                    400 => ProcessReceiptResponse::BadRequest(text),
                    _ => ProcessReceiptResponse::InternalError(text),
                }
            }
        }
    }

    /// Get receipt points
    ///
    /// Returns the points awarded to a previously processed receipt.
    #[oai(path = "/receipts/:id/points", method = "get", tag = "ApiTags::Receipts")]
    async fn get_points(&self, id: Path<String>) -> GetReceiptPointsResponse {
        match self
            .get_points_use_case
            .execute(GetReceiptPointsParams { id: id.0.into() })
            .await
        {
            Ok(points) => GetReceiptPointsResponse::Ok(Json(ReceiptPointsResponse {
                points: points.to_string(),
            })),
            Err(err) => {
                let (status, text) = err.into_error_response();
                match status.as_u16() {
                    404 => GetReceiptPointsResponse::NotFound(text),
                    _ => GetReceiptPointsResponse::InternalError(text),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "process_bad_request")]
pub enum ProcessReceiptResponse {
    #[oai(status = 200)]
    Ok(Json<ReceiptIdResponse>),
    #[oai(status = 400)]
    BadRequest(PlainText<String>),
    #[oai(status = 500)]
    InternalError(PlainText<String>),
}

fn process_bad_request(err: poem::Error) -> ProcessReceiptResponse {
    let (status, text) = err.into_error_response();
    match status.as_u16() {
        400 => ProcessReceiptResponse::BadRequest(text),
        _ => ProcessReceiptResponse::InternalError(text),
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetReceiptPointsResponse {
    #[oai(status = 200)]
    Ok(Json<ReceiptPointsResponse>),
    #[oai(status = 404)]
    NotFound(PlainText<String>),
    #[oai(status = 500)]
    InternalError(PlainText<String>),
}
