//! Form state for the property-details modal.
//!
//! All editing state lives in [`PropertyForm`]: one draft per facet, the
//! single facet currently in edit mode, and the general-details error map.
//! The modal component owns a `PropertyForm` in a `use_state` handle and the
//! section widgets only emit callbacks back into it, so every transition is
//! testable without a browser.

use std::collections::{BTreeMap, BTreeSet};

use payloads::{
    AmenityId, ImageId, requests,
    responses::{Property, PropertyImage},
};

/// One editable aspect of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    General,
    Address,
    Price,
    Amenities,
    Images,
}

/// Draft of the general-details facet. Numeric fields hold the raw input
/// text and are coerced when a save is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneralDraft {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub capacity: String,
    pub is_available: bool,
    pub is_cancellable: bool,
    pub cancellation_days: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressDraft {
    pub country: String,
    pub province: String,
    pub city: String,
    pub street: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceDraft {
    pub price: String,
    pub cleaning_fee: String,
    pub service_fee: String,
    pub tax: String,
    pub daily_discount: String,
    pub weekly_discount: String,
}

/// A file selected for upload, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Value an input control hands back to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// Per-field validation messages for the general-details facet, keyed by
/// field name.
pub type ErrorMap = BTreeMap<&'static str, &'static str>;

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyForm {
    snapshot: Property,
    active: Option<Facet>,
    pub general: GeneralDraft,
    pub address: AddressDraft,
    pub price: PriceDraft,
    pub amenities: BTreeSet<AmenityId>,
    pub images: Vec<PropertyImage>,
    pub pending_image: Option<PendingImage>,
    pub errors: ErrorMap,
}

impl PropertyForm {
    pub fn new(property: &Property) -> Self {
        let mut form = Self {
            snapshot: property.clone(),
            active: None,
            general: GeneralDraft::default(),
            address: AddressDraft::default(),
            price: PriceDraft::default(),
            amenities: BTreeSet::new(),
            images: property.property_images.clone(),
            pending_image: None,
            errors: ErrorMap::new(),
        };
        form.reset_general();
        form.reset_address();
        form.reset_price();
        form.reset_amenities();
        form
    }

    pub fn active(&self) -> Option<Facet> {
        self.active
    }

    pub fn is_editing(&self, facet: Facet) -> bool {
        self.active == Some(facet)
    }

    /// Enter edit mode for one facet. The facet's draft is re-seeded from
    /// the property snapshot so an earlier abandoned edit never resurfaces.
    pub fn begin_edit(&mut self, facet: Facet) {
        match facet {
            Facet::General => self.reset_general(),
            Facet::Address => self.reset_address(),
            Facet::Price => self.reset_price(),
            Facet::Amenities => self.reset_amenities(),
            Facet::Images => self.pending_image = None,
        }
        self.errors.clear();
        self.active = Some(facet);
    }

    /// Leave edit mode without saving.
    pub fn cancel(&mut self) {
        self.active = None;
        self.pending_image = None;
        self.errors.clear();
    }

    /// Mark a successful save: leave edit mode and fold the sent draft into
    /// the local snapshot, so the form stays consistent even if the
    /// follow-up refresh fails.
    pub fn complete_save(&mut self) {
        match self.active {
            Some(Facet::General) => {
                if let Some(details) = general_payload_of(&self.general) {
                    self.snapshot.title = details.title;
                    self.snapshot.subtitle = details.subtitle;
                    self.snapshot.description = details.description;
                    self.snapshot.capacity = details.capacity;
                    self.snapshot.is_available = details.is_available;
                    self.snapshot.is_cancellable = details.is_cancellable;
                    self.snapshot.cancellation_days = details.cancellation_days;
                }
            }
            Some(Facet::Address) => {
                let address = &mut self.snapshot.property_address;
                address.country = self.address.country.clone();
                address.province = self.address.province.clone();
                address.city = self.address.city.clone();
                address.street = self.address.street.clone();
                address.postal_code = self.address.postal_code.clone();
            }
            Some(Facet::Price) => {
                let details = self.price_payload();
                let price = &mut self.snapshot.property_price;
                price.price = details.price;
                price.cleaning_fee = details.cleaning_fee;
                price.service_fee = details.service_fee;
                price.tax = details.tax;
                price.daily_discount = details.daily_discount;
                price.weekly_discount = details.weekly_discount;
            }
            Some(Facet::Amenities) => {
                self.snapshot.property_amenities = self
                    .amenities
                    .iter()
                    .map(|&amenity_id| payloads::responses::PropertyAmenity {
                        amenity_id,
                    })
                    .collect();
            }
            Some(Facet::Images) | None => {}
        }
        self.active = None;
        self.pending_image = None;
        self.errors.clear();
    }

    /// Route a field edit to the draft of the facet currently in edit mode.
    /// Edits arriving while no facet is active, or naming a field the active
    /// facet does not have, are ignored.
    pub fn apply_change(&mut self, field: &str, value: FieldValue) {
        match self.active {
            Some(Facet::General) => self.apply_general(field, value),
            Some(Facet::Address) => {
                if let FieldValue::Text(text) = value {
                    self.apply_address(field, text);
                }
            }
            Some(Facet::Price) => {
                if let FieldValue::Text(text) = value {
                    self.apply_price(field, text);
                }
            }
            _ => {}
        }
    }

    /// Toggle one amenity in the selection set: present ids are removed,
    /// absent ids are added. Only honored while the amenities facet is in
    /// edit mode.
    pub fn toggle_amenity(&mut self, amenity_id: AmenityId) {
        if self.active != Some(Facet::Amenities) {
            return;
        }
        if !self.amenities.remove(&amenity_id) {
            self.amenities.insert(amenity_id);
        }
    }

    /// Drop one image from the local list by identity. Entries with other
    /// ids keep their order.
    pub fn remove_image(&mut self, image_id: ImageId) {
        if let Some(index) =
            self.images.iter().position(|image| image.id == image_id)
        {
            self.images.remove(index);
        }
    }

    pub fn set_pending_image(&mut self, pending: Option<PendingImage>) {
        self.pending_image = pending;
    }

    /// Validate the general draft and build its request payload. On failure
    /// the error map is populated and no payload is produced; on success the
    /// error map is cleared.
    pub fn general_payload(
        &mut self,
    ) -> Option<requests::UpdateGeneralDetails> {
        let mut errors = ErrorMap::new();
        if let Err(message) = requests::validate_capacity(&self.general.capacity)
        {
            errors.insert("capacity", message);
        }
        if let Err(message) =
            requests::validate_cancellation_days(&self.general.cancellation_days)
        {
            errors.insert("cancellation_days", message);
        }
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        self.errors.clear();
        general_payload_of(&self.general)
    }

    pub fn address_payload(&self) -> requests::UpdateAddress {
        requests::UpdateAddress {
            country: self.address.country.clone(),
            province: self.address.province.clone(),
            city: self.address.city.clone(),
            street: self.address.street.clone(),
            postal_code: self.address.postal_code.clone(),
        }
    }

    /// Coerce every price field to a number, the way the backend expects
    /// them.
    pub fn price_payload(&self) -> requests::UpdatePrice {
        requests::UpdatePrice {
            price: requests::parse_money(&self.price.price),
            cleaning_fee: requests::parse_money(&self.price.cleaning_fee),
            service_fee: requests::parse_money(&self.price.service_fee),
            tax: requests::parse_money(&self.price.tax),
            daily_discount: requests::parse_money(&self.price.daily_discount),
            weekly_discount: requests::parse_money(&self.price.weekly_discount),
        }
    }

    /// The full current selection, not a diff.
    pub fn amenities_payload(&self) -> requests::ReplaceAmenities {
        requests::ReplaceAmenities {
            amenities: self
                .amenities
                .iter()
                .map(|&amenity_id| requests::AmenityRef { amenity_id })
                .collect(),
        }
    }

    fn reset_general(&mut self) {
        self.general = GeneralDraft {
            title: self.snapshot.title.clone(),
            subtitle: self.snapshot.subtitle.clone(),
            description: self.snapshot.description.clone(),
            capacity: self.snapshot.capacity.to_string(),
            is_available: self.snapshot.is_available,
            is_cancellable: self.snapshot.is_cancellable,
            cancellation_days: self.snapshot.cancellation_days.to_string(),
        };
    }

    fn reset_address(&mut self) {
        let address = &self.snapshot.property_address;
        self.address = AddressDraft {
            country: address.country.clone(),
            province: address.province.clone(),
            city: address.city.clone(),
            street: address.street.clone(),
            postal_code: address.postal_code.clone(),
        };
    }

    fn reset_price(&mut self) {
        let price = &self.snapshot.property_price;
        self.price = PriceDraft {
            price: price.price.to_string(),
            cleaning_fee: price.cleaning_fee.to_string(),
            service_fee: price.service_fee.to_string(),
            tax: price.tax.to_string(),
            daily_discount: price.daily_discount.to_string(),
            weekly_discount: price.weekly_discount.to_string(),
        };
    }

    fn reset_amenities(&mut self) {
        self.amenities = self
            .snapshot
            .property_amenities
            .iter()
            .map(|amenity| amenity.amenity_id)
            .collect();
    }

    fn apply_general(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            ("title", FieldValue::Text(text)) => self.general.title = text,
            ("subtitle", FieldValue::Text(text)) => {
                self.general.subtitle = text
            }
            ("description", FieldValue::Text(text)) => {
                self.general.description = text
            }
            ("capacity", FieldValue::Text(text)) => {
                self.general.capacity = text
            }
            ("cancellation_days", FieldValue::Text(text)) => {
                self.general.cancellation_days = text
            }
            ("is_available", FieldValue::Flag(flag)) => {
                self.general.is_available = flag
            }
            ("is_cancellable", FieldValue::Flag(flag)) => {
                self.general.is_cancellable = flag
            }
            _ => {}
        }
    }

    fn apply_address(&mut self, field: &str, text: String) {
        match field {
            "country" => self.address.country = text,
            "province" => self.address.province = text,
            "city" => self.address.city = text,
            "street" => self.address.street = text,
            "postal_code" => self.address.postal_code = text,
            _ => {}
        }
    }

    fn apply_price(&mut self, field: &str, text: String) {
        match field {
            "price" => self.price.price = text,
            "cleaning_fee" => self.price.cleaning_fee = text,
            "service_fee" => self.price.service_fee = text,
            "tax" => self.price.tax = text,
            "daily_discount" => self.price.daily_discount = text,
            "weekly_discount" => self.price.weekly_discount = text,
            _ => {}
        }
    }
}

/// Build the general-details payload from an already-validated draft.
/// Returns None only if the numeric fields fail to parse, which
/// `general_payload` rules out beforehand.
fn general_payload_of(
    draft: &GeneralDraft,
) -> Option<requests::UpdateGeneralDetails> {
    let capacity = requests::validate_capacity(&draft.capacity).ok()?;
    let cancellation_days =
        requests::validate_cancellation_days(&draft.cancellation_days).ok()?;
    Some(requests::UpdateGeneralDetails {
        title: draft.title.clone(),
        subtitle: draft.subtitle.clone(),
        description: draft.description.clone(),
        capacity,
        is_available: draft.is_available,
        is_cancellable: draft.is_cancellable,
        cancellation_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use payloads::{
        AddressId, PriceId, PropertyId,
        requests::{CANCELLATION_DAYS_ERROR, CAPACITY_ERROR},
        responses::{Address, PropertyAmenity, PropertyPrice},
    };
    use rust_decimal::dec;

    fn test_property() -> Property {
        let created_at: Timestamp = "2025-03-01T12:00:00Z".parse().unwrap();
        Property {
            id: PropertyId(7),
            title: "Harbor View Loft".to_string(),
            subtitle: "Bright loft near the old port".to_string(),
            description: "Two-bedroom loft with a balcony.".to_string(),
            capacity: 4,
            is_available: true,
            is_cancellable: true,
            cancellation_days: 5,
            property_address: Address {
                id: AddressId(3),
                country: "Canada".to_string(),
                province: "Quebec".to_string(),
                city: "Montreal".to_string(),
                street: "41 Rue de la Commune".to_string(),
                postal_code: "H2Y 2C6".to_string(),
            },
            property_price: PropertyPrice {
                id: PriceId(9),
                price: dec!(120),
                cleaning_fee: dec!(30),
                service_fee: dec!(10),
                tax: dec!(15),
                daily_discount: dec!(0),
                weekly_discount: dec!(12),
            },
            property_amenities: vec![
                PropertyAmenity {
                    amenity_id: AmenityId(2),
                },
                PropertyAmenity {
                    amenity_id: AmenityId(5),
                },
            ],
            property_images: vec![
                PropertyImage {
                    id: ImageId(1),
                    image: "https://img.example/1.jpg".to_string(),
                },
                PropertyImage {
                    id: ImageId(2),
                    image: "https://img.example/2.jpg".to_string(),
                },
                PropertyImage {
                    id: ImageId(3),
                    image: "https://img.example/3.jpg".to_string(),
                },
            ],
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn drafts_seed_from_snapshot() {
        let form = PropertyForm::new(&test_property());
        assert_eq!(form.active(), None);
        assert_eq!(form.general.title, "Harbor View Loft");
        assert_eq!(form.general.capacity, "4");
        assert_eq!(form.price.price, "120");
        assert_eq!(
            form.amenities,
            BTreeSet::from([AmenityId(2), AmenityId(5)])
        );
    }

    #[test]
    fn one_facet_active_at_a_time() {
        let mut form = PropertyForm::new(&test_property());
        form.begin_edit(Facet::General);
        assert!(form.is_editing(Facet::General));
        form.begin_edit(Facet::Price);
        assert!(form.is_editing(Facet::Price));
        assert!(!form.is_editing(Facet::General));
        form.cancel();
        assert_eq!(form.active(), None);
    }

    #[test]
    fn change_routing_ignores_inactive_facets() {
        let mut form = PropertyForm::new(&test_property());

        // Nothing active: silent no-op.
        form.apply_change("title", FieldValue::Text("Renamed".to_string()));
        assert_eq!(form.general.title, "Harbor View Loft");

        // Address active: general fields are not reachable.
        form.begin_edit(Facet::Address);
        form.apply_change("title", FieldValue::Text("Renamed".to_string()));
        form.apply_change("city", FieldValue::Text("Laval".to_string()));
        assert_eq!(form.general.title, "Harbor View Loft");
        assert_eq!(form.address.city, "Laval");
    }

    #[test]
    fn begin_edit_reseeds_abandoned_draft() {
        let mut form = PropertyForm::new(&test_property());
        form.begin_edit(Facet::General);
        form.apply_change("title", FieldValue::Text("Typo title".to_string()));
        form.cancel();

        form.begin_edit(Facet::General);
        assert_eq!(form.general.title, "Harbor View Loft");
    }

    #[test]
    fn amenity_toggle_is_an_involution() {
        let mut form = PropertyForm::new(&test_property());
        form.begin_edit(Facet::Amenities);
        let before = form.amenities.clone();

        form.toggle_amenity(AmenityId(5));
        assert_eq!(form.amenities, BTreeSet::from([AmenityId(2)]));
        form.toggle_amenity(AmenityId(5));
        assert_eq!(form.amenities, before);
    }

    #[test]
    fn amenity_toggle_requires_edit_mode() {
        let mut form = PropertyForm::new(&test_property());
        form.toggle_amenity(AmenityId(11));
        assert_eq!(
            form.amenities,
            BTreeSet::from([AmenityId(2), AmenityId(5)])
        );

        form.begin_edit(Facet::General);
        form.toggle_amenity(AmenityId(11));
        assert_eq!(
            form.amenities,
            BTreeSet::from([AmenityId(2), AmenityId(5)])
        );
    }

    #[test]
    fn general_validation_blocks_payload() {
        let mut form = PropertyForm::new(&test_property());
        form.begin_edit(Facet::General);
        form.apply_change("capacity", FieldValue::Text("0".to_string()));
        form.apply_change(
            "cancellation_days",
            FieldValue::Text("2.5".to_string()),
        );

        assert_eq!(form.general_payload(), None);
        assert_eq!(form.errors.get("capacity"), Some(&CAPACITY_ERROR));
        assert_eq!(
            form.errors.get("cancellation_days"),
            Some(&CANCELLATION_DAYS_ERROR)
        );
        // Still editing, draft untouched.
        assert!(form.is_editing(Facet::General));
        assert_eq!(form.general.capacity, "0");
    }

    #[test]
    fn general_payload_coerces_numeric_fields() {
        let mut form = PropertyForm::new(&test_property());
        form.begin_edit(Facet::General);
        form.apply_change("capacity", FieldValue::Text("6".to_string()));
        form.apply_change(
            "cancellation_days",
            FieldValue::Text("0".to_string()),
        );
        form.apply_change("is_available", FieldValue::Flag(false));

        let details = form.general_payload().unwrap();
        assert_eq!(details.capacity, 6);
        assert_eq!(details.cancellation_days, 0);
        assert!(!details.is_available);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn price_payload_coerces_strings_to_numbers() {
        let mut form = PropertyForm::new(&test_property());
        form.begin_edit(Facet::Price);
        form.apply_change("price", FieldValue::Text("100".to_string()));
        form.apply_change("cleaning_fee", FieldValue::Text("20".to_string()));
        form.apply_change("service_fee", FieldValue::Text("7.5".to_string()));

        let details = form.price_payload();
        assert_eq!(details.price, dec!(100));
        assert_eq!(details.cleaning_fee, dec!(20));
        assert_eq!(details.service_fee, dec!(7.5));
        // Untouched fields still come from the snapshot.
        assert_eq!(details.tax, dec!(15));
    }

    #[test]
    fn amenities_payload_carries_full_selection() {
        let mut form = PropertyForm::new(&test_property());
        form.begin_edit(Facet::Amenities);
        form.toggle_amenity(AmenityId(11));

        let payload = form.amenities_payload();
        let ids: Vec<AmenityId> =
            payload.amenities.iter().map(|a| a.amenity_id).collect();
        assert_eq!(ids, vec![AmenityId(2), AmenityId(5), AmenityId(11)]);
    }

    #[test]
    fn complete_save_resets_active_and_keeps_draft() {
        let mut form = PropertyForm::new(&test_property());
        form.begin_edit(Facet::General);
        form.apply_change("title", FieldValue::Text("New title".to_string()));

        form.complete_save();
        assert_eq!(form.active(), None);
        // The draft reflects exactly what was sent, and re-entering edit
        // mode resumes from the saved values.
        assert_eq!(form.general.title, "New title");
        form.begin_edit(Facet::General);
        assert_eq!(form.general.title, "New title");
    }

    #[test]
    fn failed_save_leaves_form_unchanged() {
        let mut form = PropertyForm::new(&test_property());
        form.begin_edit(Facet::Price);
        form.apply_change("price", FieldValue::Text("95".to_string()));

        let before = form.clone();
        // A failed request performs no form transition at all; building the
        // payload must not mutate anything either.
        let _ = form.price_payload();
        assert_eq!(form, before);
    }

    #[test]
    fn remove_image_deletes_exactly_one_entry() {
        let mut form = PropertyForm::new(&test_property());
        form.remove_image(ImageId(2));

        let ids: Vec<ImageId> =
            form.images.iter().map(|image| image.id).collect();
        assert_eq!(ids, vec![ImageId(1), ImageId(3)]);

        // Unknown ids leave the list alone.
        form.remove_image(ImageId(99));
        assert_eq!(form.images.len(), 2);
    }

    #[test]
    fn images_save_requires_pending_file() {
        let mut form = PropertyForm::new(&test_property());
        form.begin_edit(Facet::Images);
        assert_eq!(form.pending_image, None);

        form.set_pending_image(Some(PendingImage {
            file_name: "balcony.jpg".to_string(),
            data: vec![0xff, 0xd8, 0xff],
        }));
        form.cancel();
        // Cancel clears the staged file along with edit mode.
        assert_eq!(form.pending_image, None);
    }
}
