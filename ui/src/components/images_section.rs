use base64::{Engine as _, engine::general_purpose};
use payloads::{ImageId, responses::PropertyImage};
use web_sys::Event;
use yew::prelude::*;

use crate::property_form::PendingImage;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub images: Vec<PropertyImage>,
    pub pending: Option<PendingImage>,
    pub is_editing: bool,
    pub disabled: bool,
    pub on_edit: Callback<()>,
    /// Raw change event from the file input; the controller reads the file.
    pub on_file_select: Callback<Event>,
    pub on_delete: Callback<ImageId>,
    pub on_cancel: Callback<()>,
    pub on_save: Callback<()>,
}

#[function_component]
pub fn ImagesSection(props: &Props) -> Html {
    let preview_url = props.pending.as_ref().map(|pending| {
        format!(
            "data:image/jpeg;base64,{}",
            general_purpose::STANDARD.encode(&pending.data)
        )
    });

    html! {
        <div class="py-6">
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                    {"Images"}
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

            if props.images.is_empty() && !props.is_editing {
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"No images uploaded yet."}
                </p>
            }

            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                {for props.images.iter().map(|image| {
                    let on_delete = {
                        let on_delete = props.on_delete.clone();
                        let image_id = image.id;
                        Callback::from(move |_| on_delete.emit(image_id))
                    };
                    html! {
                        <div key={image.id.0} class="relative aspect-video rounded-lg overflow-hidden
                                                     bg-neutral-100 dark:bg-neutral-700">
                            <img
                                src={image.image.clone()}
                                alt={format!("Property image {}", image.id)}
                                class="w-full h-full object-cover"
                            />
                            if props.is_editing {
                                <button
                                    type="button"
                                    onclick={on_delete}
                                    disabled={props.disabled}
                                    title="Delete image"
                                    class="absolute top-2 right-2 w-7 h-7 rounded-full
                                           bg-red-600 text-white hover:bg-red-700
                                           disabled:opacity-50
                                           flex items-center justify-center
                                           transition-colors duration-150"
                                >
                                    {"×"}
                                </button>
                            }
                        </div>
                    }
                })}
            </div>

            if props.is_editing {
                <div class="mt-4 space-y-3">
                    if let Some(url) = preview_url {
                        <div class="flex items-center gap-4">
                            <div class="w-32 h-20 rounded-md overflow-hidden
                                        bg-neutral-100 dark:bg-neutral-700 flex-shrink-0">
                                <img
                                    src={url}
                                    alt="Upload preview"
                                    class="w-full h-full object-cover"
                                />
                            </div>
                            <p class="text-sm text-neutral-600 dark:text-neutral-400 truncate">
                                {props.pending.as_ref()
                                    .map(|pending| pending.file_name.clone())
                                    .unwrap_or_default()}
                            </p>
                        </div>
                    }

                    <input
                        type="file"
                        accept="image/*"
                        onchange={props.on_file_select.clone()}
                        disabled={props.disabled}
                        class="block w-full text-sm text-neutral-600 dark:text-neutral-400
                               file:mr-4 file:py-2 file:px-4 file:rounded-md file:border-0
                               file:text-sm file:font-medium
                               file:bg-neutral-100 file:text-neutral-700
                               dark:file:bg-neutral-700 dark:file:text-neutral-300
                               hover:file:bg-neutral-200 dark:hover:file:bg-neutral-600"
                    />

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
                                {"Uploading..."}
                            } else {
                                {"Upload Image"}
                            }
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}
