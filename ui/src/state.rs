use payloads::{Location, Session};
use yewdux::prelude::*;

use crate::hooks::FetchState;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    /// Storage has not been read yet.
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(Session),
}

/// Global UI state shared through yewdux.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    /// Written by `use_authentication`, the login form and logout.
    pub auth_state: AuthState,
    /// Shared by the city selectors and the locations page.
    pub locations: FetchState<Vec<Location>>,

    /// Bumped after every space mutation so list pages refetch.
    pub spaces_revision: u32,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.auth_state {
            AuthState::LoggedIn(session) => Some(session),
            _ => None,
        }
    }

    pub fn set_locations(&mut self, locations: Vec<Location>) {
        self.locations = FetchState::Fetched(locations);
    }

    pub fn clear_locations(&mut self) {
        self.locations = FetchState::NotFetched;
    }

    pub fn spaces_changed(&mut self) {
        self.spaces_revision = self.spaces_revision.wrapping_add(1);
    }

    /// Forget the session and everything fetched under it.
    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
        self.clear_locations();
    }
}
