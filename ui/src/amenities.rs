use payloads::AmenityId;

/// Catalog of amenities a host can attach to a property. Ids match the
/// backend's amenity table.
pub const AMENITIES: &[(AmenityId, &str)] = &[
    (AmenityId(1), "Air conditioning"),
    (AmenityId(2), "WiFi"),
    (AmenityId(3), "TV"),
    (AmenityId(4), "Kitchen"),
    (AmenityId(5), "Washing machine"),
    (AmenityId(6), "Exercise equipment"),
    (AmenityId(7), "Parking"),
    (AmenityId(8), "Swimming pool"),
    (AmenityId(9), "Outdoor dining area"),
    (AmenityId(10), "First aid kit"),
    (AmenityId(11), "Pet allowed"),
    (AmenityId(12), "Smoke alarm"),
    (AmenityId(13), "Dedicated workspace"),
    (AmenityId(14), "Security and monitoring"),
];

/// Display label for an amenity id, if it is part of the catalog.
pub fn amenity_label(amenity_id: AmenityId) -> Option<&'static str> {
    AMENITIES
        .iter()
        .find(|(id, _)| *id == amenity_id)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_resolve_for_catalog_ids() {
        assert_eq!(amenity_label(AmenityId(2)), Some("WiFi"));
        assert_eq!(amenity_label(AmenityId(14)), Some("Security and monitoring"));
        assert_eq!(amenity_label(AmenityId(99)), None);
    }
}
