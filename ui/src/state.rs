use payloads::{PropertyId, responses};
use std::collections::HashMap;
use yewdux::prelude::*;

/// Global app state: the canonical store for fetched properties, keyed by
/// id. Pages read through [`crate::hooks::use_property`], which fills this
/// cache on first load and on explicit refetch.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub properties: HashMap<PropertyId, responses::Property>,
}

impl State {
    pub fn has_property_loaded(&self, property_id: PropertyId) -> bool {
        self.properties.contains_key(&property_id)
    }

    pub fn get_property(
        &self,
        property_id: PropertyId,
    ) -> Option<&responses::Property> {
        self.properties.get(&property_id)
    }

    pub fn set_property(
        &mut self,
        property_id: PropertyId,
        property: responses::Property,
    ) {
        self.properties.insert(property_id, property);
    }
}
