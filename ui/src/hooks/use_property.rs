use payloads::{PropertyId, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{FetchHookReturn, use_fetch_with_cache},
};

/// Hook to manage single property data with lazy loading and global state
/// caching.
///
/// The property page fetches through this hook; the details modal receives
/// the resulting snapshot as a prop and triggers `refetch` after each
/// successful save so the whole page re-renders from authoritative data.
#[hook]
pub fn use_property(
    property_id: PropertyId,
) -> FetchHookReturn<responses::Property> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();
    let fetch_dispatch = dispatch.clone();

    use_fetch_with_cache(
        property_id,
        move || get_cached_state.get_property(property_id).cloned(),
        move || !should_fetch_state.has_property_loaded(property_id),
        move || {
            let dispatch = fetch_dispatch.clone();
            async move {
                let api_client = get_api_client();
                let property = api_client
                    .get_property(&property_id)
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| {
                    s.set_property(property_id, property.clone());
                });
                Ok(property)
            }
        },
    )
}
