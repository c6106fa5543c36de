use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

use crate::property_form::{AddressDraft, FieldValue};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub address: AddressDraft,
    pub is_editing: bool,
    pub disabled: bool,
    pub on_edit: Callback<()>,
    pub on_change: Callback<(&'static str, FieldValue)>,
    pub on_cancel: Callback<()>,
    pub on_save: Callback<()>,
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 \
     dark:border-neutral-600 rounded-md shadow-sm bg-white \
     dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100 \
     focus:outline-none focus:ring-2 focus:ring-neutral-500 \
     focus:border-neutral-500 disabled:opacity-50 \
     disabled:cursor-not-allowed";

const LABEL_CLASS: &str = "block text-sm font-medium text-neutral-700 \
     dark:text-neutral-300 mb-2";

#[function_component]
pub fn AddressSection(props: &Props) -> Html {
    let address = &props.address;

    let text_change = |field: &'static str| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, FieldValue::Text(input.value())));
        })
    };

    let text_field = |field: &'static str, label: &str, value: String| {
        html! {
            <div>
                <label for={format!("address-{field}")} class={LABEL_CLASS}>
                    {label.to_string()}
                </label>
                <input
                    type="text"
                    id={format!("address-{field}")}
                    name={field}
                    value={value}
                    onchange={text_change(field)}
                    disabled={props.disabled}
                    class={INPUT_CLASS}
                />
            </div>
        }
    };

    html! {
        <div class="py-6 border-b border-neutral-200 dark:border-neutral-700">
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                    {"Address"}
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
                    {text_field("street", "Street", address.street.clone())}
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        {text_field("city", "City", address.city.clone())}
                        {text_field("province", "Province", address.province.clone())}
                        {text_field("country", "Country", address.country.clone())}
                        {text_field("postal_code", "Postal code", address.postal_code.clone())}
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
            } else {
                <div class="text-neutral-900 dark:text-neutral-100">
                    <p>{&address.street}</p>
                    <p>
                        {format!(
                            "{}, {} {}",
                            address.city, address.province, address.postal_code
                        )}
                    </p>
                    <p>{&address.country}</p>
                </div>
            }
        </div>
    }
}
