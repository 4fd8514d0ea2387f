//! List and statistics hooks. Each issues exactly one request per distinct
//! set of parameters.

use payloads::requests::ListQuery;
use payloads::responses::{DashboardStats, LeadStats, Paginated};
use payloads::{Lead, Space};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// `revision` forces a refetch with unchanged filters after a mutation.
#[hook]
pub fn use_spaces(
    query: ListQuery,
    revision: u32,
) -> FetchHookReturn<Paginated<Space>> {
    use_fetch((query, revision), |(query, _)| {
        let query = query.clone();
        async move { get_api_client().list_spaces(&query).await }
    })
}

#[hook]
pub fn use_leads(
    query: ListQuery,
    revision: u32,
) -> FetchHookReturn<Paginated<Lead>> {
    use_fetch((query, revision), |(query, _)| {
        let query = query.clone();
        async move { get_api_client().list_leads(&query).await }
    })
}

#[hook]
pub fn use_lead_stats(revision: u32) -> FetchHookReturn<LeadStats> {
    use_fetch(revision, |_| async { get_api_client().lead_stats().await })
}

#[hook]
pub fn use_dashboard_stats() -> FetchHookReturn<DashboardStats> {
    use_fetch((), |_| async { get_api_client().dashboard_stats().await })
}
