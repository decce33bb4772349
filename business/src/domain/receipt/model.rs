use chrono::NaiveDate;

use super::errors::InvalidReceipt;
use super::scoring;
use super::value_objects::PurchaseTime;

const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A receipt exactly as submitted: every field may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Receipt {
    pub retailer: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_time: Option<String>,
    pub total: Option<f64>,
    pub items: Option<Vec<ReceiptItem>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptItem {
    pub short_description: Option<String>,
    pub price: Option<f64>,
}

/// A receipt that passed validation and can be scored.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedReceipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: PurchaseTime,
    pub total: f64,
    pub items: Vec<ValidatedItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedItem {
    pub short_description: String,
    pub price: f64,
}

impl Receipt {
    /// Checks every required field and parses date and time.
    ///
    /// Fails on the first problem found; an empty item list is accepted.
    pub fn validate(self) -> Result<ValidatedReceipt, InvalidReceipt> {
        let retailer = self
            .retailer
            .ok_or(InvalidReceipt::MissingField("retailer"))?;
        let purchase_date = self
            .purchase_date
            .ok_or(InvalidReceipt::MissingField("purchaseDate"))?;
        let purchase_time = self
            .purchase_time
            .ok_or(InvalidReceipt::MissingField("purchaseTime"))?;
        let total = self.total.ok_or(InvalidReceipt::MissingField("total"))?;
        let items = self.items.ok_or(InvalidReceipt::MissingField("items"))?;

        let purchase_time: PurchaseTime = purchase_time
            .parse()
            .map_err(|_| InvalidReceipt::InvalidPurchaseTime)?;

        let purchase_date = parse_purchase_date(&purchase_date)?;

        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match (item.short_description, item.price) {
                (Some(short_description), Some(price)) => Ok(ValidatedItem {
                    short_description,
                    price,
                }),
                _ => Err(InvalidReceipt::IncompleteItem(index)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !total.is_finite() || items.iter().any(|item| !is_scorable_item(item)) {
            return Err(InvalidReceipt::InvalidAmount);
        }

        Ok(ValidatedReceipt {
            retailer,
            purchase_date,
            purchase_time,
            total,
            items,
        })
    }
}

/// Strict `YYYY-MM-DD`. chrono alone also takes unpadded or space-padded
/// fields and signed years, so the shape is checked first.
fn parse_purchase_date(value: &str) -> Result<NaiveDate, InvalidReceipt> {
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if !well_formed {
        return Err(InvalidReceipt::InvalidPurchaseDate);
    }
    NaiveDate::parse_from_str(value, PURCHASE_DATE_FORMAT)
        .map_err(|_| InvalidReceipt::InvalidPurchaseDate)
}

/// Prices must be finite, and an item may never take points away: a
/// qualifying description with a price of -5.00 or less would.
fn is_scorable_item(item: &ValidatedItem) -> bool {
    item.price.is_finite()
        && !(scoring::description_qualifies(&item.short_description)
            && scoring::description_bonus(item.price) < 0.0)
}
