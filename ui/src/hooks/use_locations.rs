use payloads::Location;
use yew::prelude::*;
use yewdux::prelude::*;

use super::FetchHookReturn;
use super::use_fetch::use_fetch_with_cache;
use crate::{State, get_api_client};

/// Locations cached in global state. The city selector and the locations
/// page share one copy; mutations clear it and refetch.
#[hook]
pub fn use_locations() -> FetchHookReturn<Vec<Location>> {
    let (state, dispatch) = use_store::<State>();
    let signed_in = state.is_authenticated();
    let cached = state.locations.as_ref().cloned();

    use_fetch_with_cache(
        (signed_in, cached.is_some()),
        cached,
        signed_in && !state.locations.is_fetched(),
        move |_| async move {
            let locations = get_api_client().list_locations().await?;
            dispatch.reduce_mut(|s| s.set_locations(locations.clone()));
            Ok(locations)
        },
    )
}
