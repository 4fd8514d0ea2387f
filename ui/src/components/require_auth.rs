use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use super::Spinner;
use crate::{AuthState, Route, State};

/// Gate for every admin route.
///
/// Nothing below it mounts until the stored session has been read, so page
/// hooks never fire a request without a token. A missing session redirects
/// to the login page.
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Html,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let (state, _) = use_store::<State>();

    match state.auth_state {
        AuthState::LoggedIn(_) => props.children.clone(),
        AuthState::LoggedOut => html! { <Redirect<Route> to={Route::Login} /> },
        AuthState::Unknown => html! {
            <div class="min-h-screen grid place-items-center">
                <Spinner label="Checking session..." />
            </div>
        },
    }
}
