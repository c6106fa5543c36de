use payloads::{AmenityId, ImageId, MAX_IMAGE_SIZE, requests, responses::Property};
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement};
use yew::prelude::*;

use crate::{
    components::{
        AddressSection, AmenitiesSection, GeneralDetailsSection,
        ImagesSection, Modal, PriceSection,
    },
    contexts::toast::use_toast,
    get_api_client,
    property_form::{Facet, FieldValue, PendingImage, PropertyForm},
};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Read-only snapshot of the property; refreshed by the parent through
    /// `on_update`.
    pub property: Property,
    pub on_close: Callback<()>,
    /// Called after any successful save so the parent can refetch.
    pub on_update: Callback<()>,
}

/// The one request a save issues, chosen by the active facet.
enum SaveRequest {
    General(requests::UpdateGeneralDetails),
    Address(requests::UpdateAddress),
    Price(requests::UpdatePrice),
    Amenities(requests::ReplaceAmenities),
    Image(PendingImage),
    /// Saving the images facet with no staged file sends nothing.
    Nothing,
}

/// Parent controller for the five property sections. Owns all form state
/// through a [`PropertyForm`] and converts section saves into typed backend
/// requests; at most one facet is in edit mode and at most one request is in
/// flight at any time.
#[function_component]
pub fn PropertyDetailsModal(props: &Props) -> Html {
    let form = use_state(|| PropertyForm::new(&props.property));
    let saving = use_state(|| false);
    let toast = use_toast();

    // Rebuild the form whenever the parent hands us a fresh snapshot, e.g.
    // after the post-save refetch.
    {
        let form = form.clone();
        use_effect_with(props.property.clone(), move |property| {
            form.set(PropertyForm::new(property));
        });
    }

    let on_edit = {
        let form = form.clone();
        let saving = saving.clone();
        Callback::from(move |facet: Facet| {
            if *saving {
                return;
            }
            let mut next = (*form).clone();
            next.begin_edit(facet);
            form.set(next);
        })
    };

    let on_change = {
        let form = form.clone();
        Callback::from(move |(field, value): (&'static str, FieldValue)| {
            let mut next = (*form).clone();
            next.apply_change(field, value);
            form.set(next);
        })
    };

    let on_toggle_amenity = {
        let form = form.clone();
        Callback::from(move |amenity_id: AmenityId| {
            let mut next = (*form).clone();
            next.toggle_amenity(amenity_id);
            form.set(next);
        })
    };

    let on_cancel = {
        let form = form.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            if *saving {
                return;
            }
            let mut next = (*form).clone();
            next.cancel();
            form.set(next);
        })
    };

    let on_save = {
        let form = form.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let on_update = props.on_update.clone();
        let property_id = props.property.id;
        let address_id = props.property.property_address.id;
        let price_id = props.property.property_price.id;

        Callback::from(move |_| {
            if *saving {
                return;
            }
            let Some(facet) = form.active() else {
                return;
            };

            let mut next = (*form).clone();
            let request = match facet {
                Facet::General => match next.general_payload() {
                    Some(details) => SaveRequest::General(details),
                    None => {
                        // Inline errors; stay in edit mode, no request.
                        form.set(next);
                        return;
                    }
                },
                Facet::Address => SaveRequest::Address(next.address_payload()),
                Facet::Price => SaveRequest::Price(next.price_payload()),
                Facet::Amenities => {
                    SaveRequest::Amenities(next.amenities_payload())
                }
                Facet::Images => match next.pending_image.clone() {
                    Some(pending) => SaveRequest::Image(pending),
                    None => SaveRequest::Nothing,
                },
            };

            let form = form.clone();
            let saving = saving.clone();
            let toast = toast.clone();
            let on_update = on_update.clone();

            wasm_bindgen_futures::spawn_local(async move {
                saving.set(true);

                let api_client = get_api_client();
                let result = match request {
                    SaveRequest::General(details) => {
                        api_client
                            .update_general_details(&property_id, &details)
                            .await
                    }
                    SaveRequest::Address(details) => {
                        api_client
                            .update_address(&property_id, &address_id, &details)
                            .await
                    }
                    SaveRequest::Price(details) => {
                        api_client
                            .update_price(&property_id, &price_id, &details)
                            .await
                    }
                    SaveRequest::Amenities(details) => {
                        api_client
                            .replace_amenities(&property_id, &details)
                            .await
                    }
                    SaveRequest::Image(pending) => {
                        api_client
                            .upload_image(
                                &property_id,
                                pending.file_name,
                                pending.data,
                            )
                            .await
                    }
                    SaveRequest::Nothing => Ok(()),
                };

                match result {
                    Ok(()) => {
                        next.complete_save();
                        form.set(next);
                        toast.success("Property updated successfully!");
                        on_update.emit(());
                    }
                    Err(e) => {
                        // Draft and edit mode are preserved for retry.
                        tracing::warn!("property save failed: {e}");
                        toast.error(e.to_string());
                    }
                }

                saving.set(false);
            });
        })
    };

    let on_delete_image = {
        let form = form.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let property_id = props.property.id;

        Callback::from(move |image_id: ImageId| {
            if *saving {
                return;
            }

            let form = form.clone();
            let saving = saving.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                saving.set(true);

                let api_client = get_api_client();
                match api_client.delete_image(&property_id, &image_id).await {
                    Ok(()) => {
                        let mut next = (*form).clone();
                        next.remove_image(image_id);
                        form.set(next);
                        toast.success("Image deleted successfully!");
                    }
                    Err(e) => {
                        tracing::warn!("image delete failed: {e}");
                        toast.error(e.to_string());
                    }
                }

                saving.set(false);
            });
        })
    };

    let on_file_select = {
        let form = form.clone();
        let toast = toast.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files = match input.files() {
                Some(f) => f,
                None => return,
            };
            let file = match files.get(0) {
                Some(f) => f,
                None => return,
            };

            let file_size = file.size() as usize;
            if file_size > MAX_IMAGE_SIZE {
                toast.error(format!(
                    "File is too large ({:.1}MB). Maximum size is 5MB.",
                    file_size as f64 / 1_048_576.0
                ));
                return;
            }

            let file_name = file.name();

            // Read file as array buffer
            let reader = FileReader::new().unwrap();
            let reader_clone = reader.clone();
            let form = form.clone();

            let onload = Closure::wrap(Box::new(move |_: Event| {
                let result = reader_clone.result().unwrap();
                let array = js_sys::Uint8Array::new(&result);
                let data: Vec<u8> = array.to_vec();

                let mut next = (*form).clone();
                next.set_pending_image(Some(PendingImage {
                    file_name: file_name.clone(),
                    data,
                }));
                form.set(next);
            }) as Box<dyn FnMut(_)>);

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            reader.read_as_array_buffer(&file).unwrap();
            onload.forget();
        })
    };

    html! {
        <Modal on_close={props.on_close.clone()} max_width="max-w-4xl">
            <div class="sticky top-0 bg-white dark:bg-neutral-800 px-6 py-4
                        border-b border-neutral-200 dark:border-neutral-700
                        flex justify-between items-center z-10">
                <h2 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {&props.property.title}
                </h2>
                <button
                    onclick={props.on_close.reform(|_| ())}
                    title="Close"
                    class="text-neutral-500 hover:text-neutral-700
                           dark:hover:text-neutral-300 transition-colors duration-150"
                >
                    <span class="text-2xl leading-none">{"×"}</span>
                </button>
            </div>

            <div class="px-6 pb-6">
                <GeneralDetailsSection
                    general={form.general.clone()}
                    is_editing={form.is_editing(Facet::General)}
                    disabled={*saving}
                    errors={form.errors.clone()}
                    on_edit={on_edit.reform(|_| Facet::General)}
                    on_change={on_change.clone()}
                    on_cancel={on_cancel.clone()}
                    on_save={on_save.clone()}
                />

                <AddressSection
                    address={form.address.clone()}
                    is_editing={form.is_editing(Facet::Address)}
                    disabled={*saving}
                    on_edit={on_edit.reform(|_| Facet::Address)}
                    on_change={on_change.clone()}
                    on_cancel={on_cancel.clone()}
                    on_save={on_save.clone()}
                />

                <PriceSection
                    price={form.price.clone()}
                    is_editing={form.is_editing(Facet::Price)}
                    disabled={*saving}
                    on_edit={on_edit.reform(|_| Facet::Price)}
                    on_change={on_change.clone()}
                    on_cancel={on_cancel.clone()}
                    on_save={on_save.clone()}
                />

                <AmenitiesSection
                    selected={form.amenities.clone()}
                    is_editing={form.is_editing(Facet::Amenities)}
                    disabled={*saving}
                    on_edit={on_edit.reform(|_| Facet::Amenities)}
                    on_toggle={on_toggle_amenity.clone()}
                    on_cancel={on_cancel.clone()}
                    on_save={on_save.clone()}
                />

                <ImagesSection
                    images={form.images.clone()}
                    pending={form.pending_image.clone()}
                    is_editing={form.is_editing(Facet::Images)}
                    disabled={*saving}
                    on_edit={on_edit.reform(|_| Facet::Images)}
                    on_file_select={on_file_select.clone()}
                    on_delete={on_delete_image.clone()}
                    on_cancel={on_cancel.clone()}
                    on_save={on_save.clone()}
                />
            </div>
        </Modal>
    }
}
