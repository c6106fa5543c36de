use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::property_form::{ErrorMap, FieldValue, GeneralDraft};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub general: GeneralDraft,
    pub is_editing: bool,
    /// True while a save for any facet is in flight.
    pub disabled: bool,
    pub errors: ErrorMap,
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

/// Display and edit widget for the general-details facet. Pure function of
/// its props; every mutation is delegated upward through callbacks.
#[function_component]
pub fn GeneralDetailsSection(props: &Props) -> Html {
    let general = &props.general;

    let text_change = |field: &'static str| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, FieldValue::Text(input.value())));
        })
    };

    let textarea_change = |field: &'static str| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit((field, FieldValue::Text(input.value())));
        })
    };

    let flag_change = |field: &'static str| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, FieldValue::Flag(input.checked())));
        })
    };

    let field_error = |field: &str| -> Html {
        match props.errors.get(field) {
            Some(message) => html! {
                <p class="mt-1 text-sm text-red-600 dark:text-red-400">
                    {*message}
                </p>
            },
            None => html! {},
        }
    };

    html! {
        <div class="py-6 border-b border-neutral-200 dark:border-neutral-700">
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                    {"General Details"}
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
                    <div>
                        <label for="general-title" class={LABEL_CLASS}>
                            {"Title"}
                        </label>
                        <input
                            type="text"
                            id="general-title"
                            name="title"
                            value={general.title.clone()}
                            onchange={text_change("title")}
                            disabled={props.disabled}
                            class={INPUT_CLASS}
                        />
                    </div>

                    <div>
                        <label for="general-subtitle" class={LABEL_CLASS}>
                            {"Subtitle"}
                        </label>
                        <input
                            type="text"
                            id="general-subtitle"
                            name="subtitle"
                            value={general.subtitle.clone()}
                            onchange={text_change("subtitle")}
                            disabled={props.disabled}
                            class={INPUT_CLASS}
                        />
                    </div>

                    <div>
                        <label for="general-description" class={LABEL_CLASS}>
                            {"Description"}
                        </label>
                        <textarea
                            id="general-description"
                            name="description"
                            rows="3"
                            value={general.description.clone()}
                            onchange={textarea_change("description")}
                            disabled={props.disabled}
                            class={INPUT_CLASS}
                        />
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div>
                            <label for="general-capacity" class={LABEL_CLASS}>
                                {"Capacity"}
                            </label>
                            <input
                                type="number"
                                id="general-capacity"
                                name="capacity"
                                value={general.capacity.clone()}
                                onchange={text_change("capacity")}
                                disabled={props.disabled}
                                class={INPUT_CLASS}
                            />
                            {field_error("capacity")}
                        </div>

                        <div>
                            <label for="general-cancellation-days" class={LABEL_CLASS}>
                                {"Cancellation days"}
                            </label>
                            <input
                                type="number"
                                id="general-cancellation-days"
                                name="cancellation_days"
                                value={general.cancellation_days.clone()}
                                onchange={text_change("cancellation_days")}
                                disabled={props.disabled}
                                class={INPUT_CLASS}
                            />
                            {field_error("cancellation_days")}
                        </div>
                    </div>

                    <div class="flex items-center space-x-6">
                        <div class="flex items-center">
                            <input
                                type="checkbox"
                                id="general-is-available"
                                name="is_available"
                                checked={general.is_available}
                                onchange={flag_change("is_available")}
                                disabled={props.disabled}
                                class="h-4 w-4 text-neutral-600 focus:ring-neutral-500
                                       border-neutral-300 dark:border-neutral-600 rounded
                                       disabled:opacity-50"
                            />
                            <label for="general-is-available" class="ml-2 text-sm font-medium text-neutral-700 dark:text-neutral-300">
                                {"Available for booking"}
                            </label>
                        </div>

                        <div class="flex items-center">
                            <input
                                type="checkbox"
                                id="general-is-cancellable"
                                name="is_cancellable"
                                checked={general.is_cancellable}
                                onchange={flag_change("is_cancellable")}
                                disabled={props.disabled}
                                class="h-4 w-4 text-neutral-600 focus:ring-neutral-500
                                       border-neutral-300 dark:border-neutral-600 rounded
                                       disabled:opacity-50"
                            />
                            <label for="general-is-cancellable" class="ml-2 text-sm font-medium text-neutral-700 dark:text-neutral-300">
                                {"Free cancellation"}
                            </label>
                        </div>
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
                <div class="space-y-3">
                    <div>
                        <p class="text-xl font-medium text-neutral-900 dark:text-neutral-100">
                            {&general.title}
                        </p>
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {&general.subtitle}
                        </p>
                    </div>
                    <p class="text-neutral-900 dark:text-neutral-100">
                        {&general.description}
                    </p>
                    <div class="flex flex-wrap gap-x-6 gap-y-1 text-sm text-neutral-600 dark:text-neutral-400">
                        <span>{format!("Up to {} guests", general.capacity)}</span>
                        <span>
                            {if general.is_available {
                                "Available for booking"
                            } else {
                                "Not currently available"
                            }}
                        </span>
                        <span>
                            {if general.is_cancellable {
                                format!(
                                    "Free cancellation up to {} days before check-in",
                                    general.cancellation_days
                                )
                            } else {
                                "No free cancellation".to_string()
                            }}
                        </span>
                    </div>
                </div>
            }
        </div>
    }
}
