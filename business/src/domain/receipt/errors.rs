/// Reason a receipt could not be scored.
///
/// Only used for diagnostics: callers of the HTTP API always see the same
/// generic message regardless of the variant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidReceipt {
    #[error("receipt.missing_field.{0}")]
    MissingField(&'static str),
    #[error("receipt.invalid_purchase_time")]
    InvalidPurchaseTime,
    #[error("receipt.invalid_purchase_date")]
    InvalidPurchaseDate,
    #[error("receipt.incomplete_item.{0}")]
    IncompleteItem(usize),
    #[error("receipt.invalid_amount")]
    InvalidAmount,
}

#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("receipt.invalid")]
    Invalid(#[from] InvalidReceipt),
    #[error("receipt.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
