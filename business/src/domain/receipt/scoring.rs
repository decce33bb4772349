use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use super::errors::InvalidReceipt;
use super::model::{Receipt, ValidatedItem, ValidatedReceipt};
use super::value_objects::{Points, PurchaseTime};

const ROUND_DOLLAR_BONUS: u64 = 50;
const QUARTER_MULTIPLE_BONUS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const DESCRIPTION_LENGTH_DIVISOR: usize = 3;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const AFTERNOON_BONUS: u64 = 10;
const ODD_DAY_BONUS: u64 = 6;

static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9]+").expect("non-alphanumeric pattern is valid")
});

/// Validates a raw receipt and scores it.
pub fn score_receipt(receipt: Receipt) -> Result<Points, InvalidReceipt> {
    let receipt = receipt.validate()?;
    Ok(score(&receipt))
}

/// Computes the loyalty points of a validated receipt.
///
/// Business rules, summed:
/// - 1 point per ASCII alphanumeric character in the retailer name
/// - 50 points if the total is a round dollar amount
/// - 25 points if the total is a multiple of 0.25
/// - 5 points for every two items
/// - `ceil(price * 0.2)` per item whose trimmed description length is a multiple of 3
/// - 10 points if purchased between 14:00 and 16:00 (both inclusive)
/// - 6 points if the day of the purchase date is odd
pub fn score(receipt: &ValidatedReceipt) -> Points {
    [
        retailer_name_points(&receipt.retailer),
        round_dollar_points(receipt.total),
        quarter_multiple_points(receipt.total),
        item_pair_points(receipt.items.len()),
        receipt.items.iter().map(description_length_points).sum(),
        afternoon_points(receipt.purchase_time),
        odd_day_points(receipt.purchase_date.day()),
    ]
    .into_iter()
    .sum()
}

pub fn retailer_name_points(retailer: &str) -> Points {
    let stripped = NON_ALPHANUMERIC.replace_all(retailer, "");
    Points::new(stripped.len() as u64)
}

pub fn round_dollar_points(total: f64) -> Points {
    if total == total.floor() {
        Points::new(ROUND_DOLLAR_BONUS)
    } else {
        Points::ZERO
    }
}

pub fn quarter_multiple_points(total: f64) -> Points {
    let quarters = total / 0.25;
    if quarters == quarters.floor() {
        Points::new(QUARTER_MULTIPLE_BONUS)
    } else {
        Points::ZERO
    }
}

pub fn item_pair_points(item_count: usize) -> Points {
    Points::new((item_count / 2) as u64 * POINTS_PER_ITEM_PAIR)
}

/// Trimmed length is a multiple of 3. An empty trimmed description has
/// length 0 and therefore qualifies.
pub fn description_qualifies(description: &str) -> bool {
    description.trim().len() % DESCRIPTION_LENGTH_DIVISOR == 0
}

/// `ceil(price * 0.2)`, before conversion to points.
pub fn description_bonus(price: f64) -> f64 {
    (price * DESCRIPTION_PRICE_MULTIPLIER).ceil()
}

pub fn description_length_points(item: &ValidatedItem) -> Points {
    if !description_qualifies(&item.short_description) {
        return Points::ZERO;
    }
    // Validation rejects items whose bonus would be negative; -0.0 casts to 0.
    Points::new(description_bonus(item.price) as u64)
}

pub fn afternoon_points(time: PurchaseTime) -> Points {
    let in_window = (14..16).contains(&time.hour()) || (time.hour() == 16 && time.minute() == 0);
    if in_window {
        Points::new(AFTERNOON_BONUS)
    } else {
        Points::ZERO
    }
}

pub fn odd_day_points(day: u32) -> Points {
    if day % 2 == 1 {
        Points::new(ODD_DAY_BONUS)
    } else {
        Points::ZERO
    }
}
