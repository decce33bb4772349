use std::fmt;
use std::str::FromStr;

use poem_openapi::Object;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use business::domain::receipt::model::{Receipt, ReceiptItem};

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("invalid decimal value: {0:?}")]
pub struct InvalidDecimal(pub String);

/// A decimal amount sent as a JSON string, e.g. `"12.25"`.
///
/// The string content must follow JSON number grammar, so `".5"`, `"+5"`,
/// `" 5"` or `"NaN"` are rejected, as is an unquoted JSON number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecimalString(f64);

impl DecimalString {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for DecimalString {
    type Err = InvalidDecimal;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDecimal(raw.to_string());

        if raw.trim() != raw {
            return Err(invalid());
        }
        let number: serde_json::Number = raw.parse().map_err(|_| invalid())?;
        number
            .as_f64()
            .filter(|value| value.is_finite())
            .map(DecimalString)
            .ok_or_else(invalid)
    }
}

impl<'de> Deserialize<'de> for DecimalString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DecimalStringVisitor;

        impl Visitor<'_> for DecimalStringVisitor {
            type Value = DecimalString;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal number encoded as a string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<DecimalString, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DecimalStringVisitor)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItemRequest {
    pub short_description: Option<String>,
    pub price: Option<DecimalString>,
}

/// Body of `POST /receipts/process`. Absent and `null` fields both decode to
/// `None`; the business layer decides whether the receipt is complete.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReceiptRequest {
    pub retailer: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_time: Option<String>,
    pub total: Option<DecimalString>,
    pub items: Option<Vec<ReceiptItemRequest>>,
}

#[derive(Debug, Clone, Object)]
pub struct ReceiptIdResponse {
    /// Identifier to look the points up with
    pub id: String,
}

#[derive(Debug, Clone, Object)]
pub struct ReceiptPointsResponse {
    /// Points awarded, as a decimal string
    pub points: String,
}

impl From<ReceiptItemRequest> for ReceiptItem {
    fn from(dto: ReceiptItemRequest) -> Self {
        Self {
            short_description: dto.short_description,
            price: dto.price.map(DecimalString::value),
        }
    }
}

impl From<ProcessReceiptRequest> for Receipt {
    fn from(dto: ProcessReceiptRequest) -> Self {
        Self {
            retailer: dto.retailer,
            purchase_date: dto.purchase_date,
            purchase_time: dto.purchase_time,
            total: dto.total.map(DecimalString::value),
            items: dto
                .items
                .map(|items| items.into_iter().map(ReceiptItem::from).collect()),
        }
    }
}
