use payloads::Session;
use yew::prelude::*;
use yewdux::use_store;

use crate::State;

/// The signed-in admin, if the stored session has been restored.
#[hook]
pub fn use_session() -> Option<Session> {
    let (state, _) = use_store::<State>();
    state.session().cloned()
}
