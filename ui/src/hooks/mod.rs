pub mod use_authentication;
pub mod use_confirmed_delete;
pub mod use_debounce;
pub mod use_fetch;
pub mod use_list_query;
pub mod use_locations;
pub mod use_logout;
pub mod use_push_route;
pub mod use_records;
pub mod use_session;
pub mod use_title;

pub use use_authentication::use_authentication;
pub use use_confirmed_delete::use_confirmed_delete;
pub use use_debounce::use_debounce;
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_list_query::{QueryAction, use_list_query};
pub use use_locations::use_locations;
pub use use_logout::use_logout;
pub use use_push_route::use_push_route;
pub use use_records::{use_dashboard_stats, use_lead_stats, use_leads, use_spaces};
pub use use_session::use_session;
pub use use_title::use_title;

/// Distinguishes "not fetched yet" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(data) => Some(data),
            Self::NotFetched => None,
        }
    }
}
