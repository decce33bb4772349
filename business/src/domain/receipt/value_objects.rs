use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier under which a scored receipt is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random (UUID v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ReceiptId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ReceiptId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Loyalty points awarded to a receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Points(u64);

impl Points {
    pub const ZERO: Points = Points(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::ops::Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Points::ZERO, |acc, p| acc + p)
    }
}

impl std::fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Time of day a purchase was made, 24h clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PurchaseTime {
    hour: u8,
    minute: u8,
}

impl PurchaseTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl std::fmt::Display for PurchaseTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for PurchaseTime {
    type Err = String;

    /// Parses `HH:MM`. Each part goes through the plain integer parser, so
    /// `7:5` and `+07:05` are accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid purchase time: {}", s);

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if minute.contains(':') {
            return Err(invalid());
        }

        let hour: i64 = hour.parse().map_err(|_| invalid())?;
        let minute: i64 = minute.parse().map_err(|_| invalid())?;

        let hour = u8::try_from(hour).map_err(|_| invalid())?;
        let minute = u8::try_from(minute).map_err(|_| invalid())?;

        PurchaseTime::new(hour, minute).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_purchase_time() {
        let time: PurchaseTime = "13:01".parse().unwrap();
        assert_eq!(time.hour(), 13);
        assert_eq!(time.minute(), 1);
    }

    #[test]
    fn should_parse_boundaries() {
        assert_eq!("00:00".parse::<PurchaseTime>(), Ok(PurchaseTime::new(0, 0).unwrap()));
        assert_eq!("23:59".parse::<PurchaseTime>(), Ok(PurchaseTime::new(23, 59).unwrap()));
    }

    #[test]
    fn should_accept_unpadded_parts() {
        let time: PurchaseTime = "7:5".parse().unwrap();
        assert_eq!(time, PurchaseTime::new(7, 5).unwrap());
    }

    #[test]
    fn should_reject_out_of_range_parts() {
        assert!("24:00".parse::<PurchaseTime>().is_err());
        assert!("12:60".parse::<PurchaseTime>().is_err());
        assert!("-1:30".parse::<PurchaseTime>().is_err());
    }

    #[test]
    fn should_reject_malformed_time() {
        assert!("".parse::<PurchaseTime>().is_err());
        assert!("1300".parse::<PurchaseTime>().is_err());
        assert!("13:00:00".parse::<PurchaseTime>().is_err());
        assert!("ab:cd".parse::<PurchaseTime>().is_err());
        assert!("13:".parse::<PurchaseTime>().is_err());
    }

    #[test]
    fn should_display_zero_padded() {
        assert_eq!(PurchaseTime::new(9, 5).unwrap().to_string(), "09:05");
    }

    #[test]
    fn should_sum_points() {
        let total: Points = [Points::new(6), Points::new(10), Points::new(12)]
            .into_iter()
            .sum();
        assert_eq!(total, Points::new(28));
        assert_eq!(total.to_string(), "28");
    }

    #[test]
    fn should_generate_distinct_receipt_ids() {
        let first = ReceiptId::generate();
        let second = ReceiptId::generate();
        assert_ne!(first, second);
        assert!(Uuid::parse_str(first.as_str()).is_ok());
    }

    #[test]
    fn should_convert_receipt_id_from_str() {
        let id: ReceiptId = "unknown-id".into();
        assert_eq!(id.as_str(), "unknown-id");
        assert_eq!(id.to_string(), "unknown-id");
    }
}
