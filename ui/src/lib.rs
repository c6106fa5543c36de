use payloads::{APIClient, PropertyId};
use yew::prelude::*;
use yew_router::prelude::*;

mod amenities;
mod components;
mod contexts;
mod hooks;
pub mod logs;
mod pages;
mod property_form;
mod state;

use components::ToastContainer;
use contexts::toast::ToastProvider;
use pages::{HomePage, PropertyPage};

pub use state::State;

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <div class="min-h-screen bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                    <Switch<Route> render={switch} />
                    <ToastContainer />
                </div>
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/property/:id")]
    Property { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <HomePage />
            </main>
        },
        Route::Property { id } => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <PropertyPage property_id={PropertyId(id)} />
            </main>
        },
        Route::NotFound => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="text-center">
                    <h1 class="text-4xl font-bold text-neutral-900 dark:text-white">{"404"}</h1>
                    <p class="text-neutral-600 dark:text-neutral-300">{"Page not found"}</p>
                </div>
            </main>
        },
    }
}
