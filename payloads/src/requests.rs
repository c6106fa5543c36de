use crate::AmenityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const TITLE_MAX_LEN: usize = 255;
pub const SUBTITLE_MAX_LEN: usize = 255;

pub const CAPACITY_ERROR: &str = "Capacity must be greater than zero";
pub const CANCELLATION_DAYS_ERROR: &str =
    "Cancellation days must be an integer number";

/// Parse a guest-capacity input field.
///
/// The backend stores capacity as an integer guest count; anything that is
/// not a positive integer is rejected with the inline message shown under
/// the field.
pub fn validate_capacity(input: &str) -> Result<i64, &'static str> {
    match input.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CAPACITY_ERROR),
    }
}

/// Parse a cancellation-days input field.
///
/// Any integer value passes, including zero and negatives; only fractional
/// or non-numeric input is rejected.
pub fn validate_cancellation_days(input: &str) -> Result<i64, &'static str> {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => Ok(v as i64),
        _ => Err(CANCELLATION_DAYS_ERROR),
    }
}

/// Coerce a monetary input field to a decimal the way number inputs behave:
/// an empty or unparseable field counts as zero.
pub fn parse_money(input: &str) -> Decimal {
    input.trim().parse::<Decimal>().unwrap_or_default()
}

/// `PUT /property/{id}` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGeneralDetails {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub capacity: i64,
    pub is_available: bool,
    pub is_cancellable: bool,
    pub cancellation_days: i64,
}

/// `PUT /property/{id}/addresses/{address_id}` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAddress {
    pub country: String,
    pub province: String,
    pub city: String,
    pub street: String,
    pub postal_code: String,
}

/// `PUT /property/{id}/prices/{price_id}` body. Every field goes out as a
/// JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePrice {
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cleaning_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub service_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub daily_discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub weekly_discount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenityRef {
    pub amenity_id: AmenityId,
}

/// `PATCH /property/{id}/amenities` body: the full replacement set, not a
/// diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceAmenities {
    pub amenities: Vec<AmenityRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;
    use serde_json::json;

    #[test]
    fn capacity_must_be_positive() {
        assert_eq!(validate_capacity("0"), Err(CAPACITY_ERROR));
        assert_eq!(validate_capacity("-3"), Err(CAPACITY_ERROR));
        assert_eq!(validate_capacity("two"), Err(CAPACITY_ERROR));
        assert_eq!(validate_capacity(""), Err(CAPACITY_ERROR));
        assert_eq!(validate_capacity("4"), Ok(4));
        assert_eq!(validate_capacity(" 12 "), Ok(12));
    }

    #[test]
    fn cancellation_days_must_be_integral() {
        assert_eq!(
            validate_cancellation_days("2.5"),
            Err(CANCELLATION_DAYS_ERROR)
        );
        assert_eq!(
            validate_cancellation_days("abc"),
            Err(CANCELLATION_DAYS_ERROR)
        );
        assert_eq!(validate_cancellation_days(""), Err(CANCELLATION_DAYS_ERROR));
        // Zero and negatives are integers, so they pass this check.
        assert_eq!(validate_cancellation_days("0"), Ok(0));
        assert_eq!(validate_cancellation_days("-7"), Ok(-7));
        assert_eq!(validate_cancellation_days("14"), Ok(14));
        assert_eq!(validate_cancellation_days("14.0"), Ok(14));
    }

    #[test]
    fn money_parsing_defaults_to_zero() {
        assert_eq!(parse_money("100"), dec!(100));
        assert_eq!(parse_money("19.99"), dec!(19.99));
        assert_eq!(parse_money(""), Decimal::ZERO);
        assert_eq!(parse_money("n/a"), Decimal::ZERO);
    }

    #[test]
    fn price_payload_serializes_as_numbers() {
        let payload = UpdatePrice {
            price: dec!(100),
            cleaning_fee: dec!(20),
            service_fee: dec!(7.5),
            tax: dec!(13),
            daily_discount: dec!(0),
            weekly_discount: dec!(10),
        };
        let value = serde_json::to_value(&payload).unwrap();
        for field in [
            "price",
            "cleaning_fee",
            "service_fee",
            "tax",
            "daily_discount",
            "weekly_discount",
        ] {
            assert!(value[field].is_number(), "{field} must be a JSON number");
        }
        assert_eq!(value["price"].as_f64(), Some(100.0));
        assert_eq!(value["service_fee"].as_f64(), Some(7.5));
    }

    #[test]
    fn amenities_payload_wire_shape() {
        let payload = ReplaceAmenities {
            amenities: vec![
                AmenityRef {
                    amenity_id: AmenityId(2),
                },
                AmenityRef {
                    amenity_id: AmenityId(5),
                },
            ],
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "amenities": [
                { "amenity_id": 2 },
                { "amenity_id": 5 },
            ]})
        );
    }
}
