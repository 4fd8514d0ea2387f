use crate::{Route, State};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();

        yew::platform::spawn_local(async move {
            // Local credentials are gone whatever the API says.
            if let Err(e) = crate::get_api_client().logout().await {
                tracing::debug!("logout request failed: {e}");
            }

            dispatch.reduce_mut(|state| state.logout());

            if let Some(navigator) = navigator {
                navigator.push(&Route::Login);
            }
        });
    })
}
