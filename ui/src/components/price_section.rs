use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

use crate::property_form::{FieldValue, PriceDraft};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub price: PriceDraft,
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

/// Labels for the six price fields, in display order.
const PRICE_FIELDS: &[(&str, &str)] = &[
    ("price", "Nightly price"),
    ("cleaning_fee", "Cleaning fee"),
    ("service_fee", "Service fee"),
    ("tax", "Tax"),
    ("daily_discount", "Daily discount"),
    ("weekly_discount", "Weekly discount"),
];

#[function_component]
pub fn PriceSection(props: &Props) -> Html {
    let price = &props.price;

    let value_of = |field: &str| -> String {
        match field {
            "price" => price.price.clone(),
            "cleaning_fee" => price.cleaning_fee.clone(),
            "service_fee" => price.service_fee.clone(),
            "tax" => price.tax.clone(),
            "daily_discount" => price.daily_discount.clone(),
            "weekly_discount" => price.weekly_discount.clone(),
            _ => String::new(),
        }
    };

    let number_change = |field: &'static str| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, FieldValue::Text(input.value())));
        })
    };

    html! {
        <div class="py-6 border-b border-neutral-200 dark:border-neutral-700">
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                    {"Pricing"}
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
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        {for PRICE_FIELDS.iter().map(|&(field, label)| html! {
                            <div key={field}>
                                <label for={format!("price-{field}")} class={LABEL_CLASS}>
                                    {label}
                                </label>
                                <input
                                    type="number"
                                    step="0.01"
                                    id={format!("price-{field}")}
                                    name={field}
                                    value={value_of(field)}
                                    onchange={number_change(field)}
                                    disabled={props.disabled}
                                    class={INPUT_CLASS}
                                />
                            </div>
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
            } else {
                <dl class="grid grid-cols-2 sm:grid-cols-3 gap-x-6 gap-y-3">
                    {for PRICE_FIELDS.iter().map(|&(field, label)| html! {
                        <div key={field}>
                            <dt class="text-sm text-neutral-600 dark:text-neutral-400">
                                {label}
                            </dt>
                            <dd class="text-neutral-900 dark:text-neutral-100">
                                {if field.ends_with("_discount") {
                                    format!("{}%", value_of(field))
                                } else {
                                    format!("${}", value_of(field))
                                }}
                            </dd>
                        </div>
                    })}
                </dl>
            }
        </div>
    }
}
