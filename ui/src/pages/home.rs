use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Minimal landing page for the host dashboard: jump to a property by id.
#[function_component]
pub fn HomePage() -> Html {
    let navigator = use_navigator().unwrap();
    let id_ref = use_node_ref();

    let on_submit = {
        let id_ref = id_ref.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = id_ref.cast::<HtmlInputElement>().unwrap();
            if let Ok(id) = input.value().trim().parse::<i64>() {
                navigator.push(&Route::Property { id });
            }
        })
    };

    html! {
        <div class="max-w-md mx-auto py-16">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                {"Host dashboard"}
            </h1>
            <p class="text-neutral-600 dark:text-neutral-400 mb-8">
                {"Open one of your properties to view and edit its details."}
            </p>
            <form onsubmit={on_submit} class="flex gap-3">
                <input
                    ref={id_ref}
                    type="number"
                    min="1"
                    placeholder="Property id"
                    class="flex-1 px-3 py-2 border border-neutral-300 dark:border-neutral-600
                           rounded-md shadow-sm bg-white dark:bg-neutral-700
                           text-neutral-900 dark:text-neutral-100
                           focus:outline-none focus:ring-2 focus:ring-neutral-500"
                />
                <button
                    type="submit"
                    class="py-2 px-4 border border-transparent rounded-md shadow-sm
                           text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           transition-colors duration-200"
                >
                    {"Open"}
                </button>
            </form>
        </div>
    }
}
