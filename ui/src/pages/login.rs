use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::LoginForm;
use crate::hooks::use_title;
use crate::utils::is_dev_mode;
use crate::{Route, State};

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Sign in");
    let (state, _) = use_store::<State>();

    // Covers both a stored session on load and a fresh sign-in.
    if state.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    html! {
        <div class="flex items-center justify-center min-h-screen px-4">
            <LoginForm show_dev_credentials={is_dev_mode()} />
        </div>
    }
}
