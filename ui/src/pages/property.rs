use payloads::PropertyId;
use yew::prelude::*;

use crate::{components::PropertyDetailsModal, hooks::use_property};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub property_id: PropertyId,
}

/// Overview page for one property. Fetches the aggregate, shows a summary
/// card, and opens the details modal on demand; the modal's `on_update`
/// refetches so edits show up everywhere.
#[function_component]
pub fn PropertyPage(props: &Props) -> Html {
    let property_hook = use_property(props.property_id);
    let show_details = use_state(|| false);

    let open_details = {
        let show_details = show_details.clone();
        Callback::from(move |_| show_details.set(true))
    };

    let close_details = {
        let show_details = show_details.clone();
        Callback::from(move |_| show_details.set(false))
    };

    let refetch = property_hook.refetch.clone();

    property_hook.render("property", |property, is_loading, _error| {
        let address = &property.property_address;
        html! {
            <div class="max-w-3xl mx-auto">
                <div class="bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
                    <div class="flex justify-between items-start">
                        <div>
                            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                                {&property.title}
                            </h1>
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {&property.subtitle}
                            </p>
                            <p class="mt-2 text-sm text-neutral-600 dark:text-neutral-400">
                                {format!(
                                    "{}, {} · up to {} guests",
                                    address.city, address.country, property.capacity
                                )}
                            </p>
                        </div>
                        <button
                            onclick={open_details.clone()}
                            disabled={is_loading}
                            class="py-2 px-4 border border-transparent rounded-md shadow-sm
                                   text-sm font-medium text-white
                                   bg-neutral-900 hover:bg-neutral-800
                                   dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                                   disabled:opacity-50
                                   transition-colors duration-200"
                        >
                            {"Manage details"}
                        </button>
                    </div>
                </div>

                if *show_details {
                    <PropertyDetailsModal
                        property={property.clone()}
                        on_close={close_details.clone()}
                        on_update={refetch.clone()}
                    />
                }
            </div>
        }
    })
}
