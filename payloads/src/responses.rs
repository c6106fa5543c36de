use crate::{AddressId, AmenityId, ImageId, PriceId, PropertyId};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A property as returned by the backend: the aggregate root plus its owned
/// address, price record, amenity associations, and image list.
///
/// The frontend treats this as a read-only snapshot; edits happen on local
/// drafts and are persisted through the request payloads in
/// [`crate::requests`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub capacity: i64,
    pub is_available: bool,
    pub is_cancellable: bool,
    pub cancellation_days: i64,
    pub property_address: Address,
    pub property_price: PropertyPrice,
    pub property_amenities: Vec<PropertyAmenity>,
    #[serde(default)]
    pub property_images: Vec<PropertyImage>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub country: String,
    pub province: String,
    pub city: String,
    pub street: String,
    pub postal_code: String,
}

/// Nightly price and fees for a property. Monetary fields are decimals in
/// memory and plain JSON numbers on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPrice {
    pub id: PriceId,
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

/// Association row linking a property to one amenity from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAmenity {
    pub amenity_id: AmenityId,
}

/// Image metadata. The bytes live in object storage; `image` is the URL to
/// fetch them from, suitable for an `<img src>` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyImage {
    pub id: ImageId,
    pub image: String,
}
