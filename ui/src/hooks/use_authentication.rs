use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State, token_store};

/// Restore the session from local storage on startup.
///
/// Both the token and a readable user must be present. The token is not
/// checked against the API here; the first request that gets a 401 ends
/// the session.
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        match token_store().session() {
            Some(session) => {
                tracing::debug!("restored session for {}", session.email);
                dispatch.reduce_mut(|state| {
                    state.auth_state = AuthState::LoggedIn(session);
                });
            }
            None => dispatch.reduce_mut(|state| state.logout()),
        }
    });
}
