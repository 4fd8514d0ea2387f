use payloads::{APIClient, SpaceId, TokenStore};
use std::sync::Arc;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod state;
mod storage;
mod utils;

pub use logs::init_logging;
pub(crate) use state::{AuthState, State};

use components::RequireAuth;
use contexts::toast::ToastProvider;
use hooks::use_authentication;
use storage::BrowserTokenStore;

/// API address used when BACKEND_URL is not set at build time.
const DEFAULT_BACKEND_URL: &str = "http://localhost:8091";

pub fn backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

pub fn token_store() -> Arc<dyn TokenStore> {
    Arc::new(BrowserTokenStore)
}

/// Global API client backed by local storage.
///
/// A rejected session sends the browser to the login page with a full page
/// load, so no in-memory state survives it.
pub fn get_api_client() -> APIClient {
    APIClient::new(backend_url(), token_store()).with_unauthorized_handler(
        || {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        },
    )
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AuthBootstrap />
                <div class="min-h-screen bg-neutral-50 text-neutral-900">
                    <Switch<Route> render={switch} />
                </div>
                <components::ToastStack />
            </ToastProvider>
        </BrowserRouter>
    }
}

/// Restores the session from storage once per page load.
#[function_component]
fn AuthBootstrap() -> Html {
    use_authentication();
    html! {}
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/spaces")]
    Spaces,
    #[at("/spaces/new")]
    NewSpace,
    #[at("/spaces/:id/edit")]
    EditSpace { id: SpaceId },
    #[at("/leads")]
    Leads,
    #[at("/locations")]
    Locations,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    let page = match route {
        Route::Login => return html! { <pages::LoginPage /> },
        Route::NotFound => return html! { <pages::NotFoundPage /> },
        Route::Dashboard => html! { <pages::DashboardPage /> },
        Route::Spaces => html! { <pages::SpacesPage /> },
        Route::NewSpace => html! { <pages::SpaceEditorPage /> },
        Route::EditSpace { id } => {
            html! { <pages::SpaceEditorPage space_id={Some(id)} /> }
        }
        Route::Leads => html! { <pages::LeadsPage /> },
        Route::Locations => html! { <pages::LocationsPage /> },
        Route::Settings => html! { <pages::SettingsPage /> },
    };
    html! {
        <RequireAuth>
            <components::layout::AdminLayout>
                {page}
            </components::layout::AdminLayout>
        </RequireAuth>
    }
}
