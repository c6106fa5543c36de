use std::collections::BTreeSet;

use payloads::AmenityId;
use yew::prelude::*;

use crate::amenities::{AMENITIES, amenity_label};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selected: BTreeSet<AmenityId>,
    pub is_editing: bool,
    pub disabled: bool,
    pub on_edit: Callback<()>,
    pub on_toggle: Callback<AmenityId>,
    pub on_cancel: Callback<()>,
    pub on_save: Callback<()>,
}

#[function_component]
pub fn AmenitiesSection(props: &Props) -> Html {
    html! {
        <div class="py-6 border-b border-neutral-200 dark:border-neutral-700">
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                    {"Amenities"}
                </h3>
                if !props.is_editing {
                    <button
                        onclick={props.on_edit.reform(|_| ())}
                        disabled={props.disabled}
                        class="text-sm font-medium text-neutral-600 dark:text-neutral-400
                               hover:text-neutral-900 dark:hover:text-neutral-100
                               disabled:opacity-50 transition-colors"
                    >
                        {"Edit"}
                    </button>
                }
            </div>

            if props.is_editing {
                <div class="space-y-4">
                    <div class="grid grid-cols-2 sm:grid-cols-3 gap-2">
                        {for AMENITIES.iter().map(|&(amenity_id, label)| {
                            let is_selected = props.selected.contains(&amenity_id);
                            let on_toggle = {
                                let on_toggle = props.on_toggle.clone();
                                Callback::from(move |_| on_toggle.emit(amenity_id))
                            };
                            html! {
                                <button
                                    type="button"
                                    key={amenity_id.0}
                                    onclick={on_toggle}
                                    disabled={props.disabled}
                                    class={classes!(
                                        "px-3", "py-2", "rounded-md", "border", "text-sm",
                                        "text-left", "transition-colors", "duration-150",
                                        "disabled:opacity-50", "disabled:cursor-not-allowed",
                                        if is_selected {
                                            "border-neutral-900 dark:border-neutral-100 \
                                             bg-neutral-900 text-white \
                                             dark:bg-neutral-100 dark:text-neutral-900"
                                        } else {
                                            "border-neutral-300 dark:border-neutral-600 \
                                             bg-white dark:bg-neutral-700 \
                                             text-neutral-700 dark:text-neutral-300 \
                                             hover:border-neutral-400"
                                        }
                                    )}
                                >
                                    {if is_selected {
                                        format!("✓ {label}")
                                    } else {
                                        label.to_string()
                                    }}
                                </button>
                            }
                        })}
                    </div>

                    <div class="flex justify-end space-x-3 pt-2">
                        <button
                            type="button"
                            onclick={props.on_cancel.reform(|_| ())}
                            disabled={props.disabled}
                            class="py-2 px-4 border border-neutral-300 dark:border-neutral-600
                                   rounded-md shadow-sm text-sm font-medium
                                   text-neutral-700 dark:text-neutral-300
                                   bg-white dark:bg-neutral-700
                                   hover:bg-neutral-50 dark:hover:bg-neutral-600
                                   disabled:opacity-50 disabled:cursor-not-allowed
                                   transition-colors duration-200"
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="button"
                            onclick={props.on_save.reform(|_| ())}
                            disabled={props.disabled}
                            class="py-2 px-4 border border-transparent rounded-md shadow-sm
                                   text-sm font-medium text-white
                                   bg-neutral-900 hover:bg-neutral-800
                                   dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                                   disabled:opacity-50 disabled:cursor-not-allowed
                                   transition-colors duration-200"
                        >
                            if props.disabled {
                                {"Saving..."}
                            } else {
                                {"Save"}
                            }
                        </button>
                    </div>
                </div>
            } else if props.selected.is_empty() {
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"No amenities listed yet."}
                </p>
            } else {
                <ul class="grid grid-cols-2 sm:grid-cols-3 gap-y-2 text-neutral-900 dark:text-neutral-100">
                    {for props.selected.iter().map(|&amenity_id| html! {
                        <li key={amenity_id.0} class="text-sm">
                            {amenity_label(amenity_id)
                                .map(str::to_string)
                                .unwrap_or_else(|| format!("Amenity #{amenity_id}"))}
                        </li>
                    })}
                </ul>
            }
        </div>
    }
}
