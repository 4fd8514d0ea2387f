use payloads::ClientError;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;
use crate::components::{ErrorPanel, Spinner};

/// What a page needs to draw one remote resource.
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    /// True until the first response and while a refetch is in flight.
    pub is_loading: bool,
    /// Display text of the last failure, cleared when a new request starts.
    pub error: Option<String>,
}

impl<T> FetchHookReturn<T> {
    /// Spinner before the first response, the error if it failed, otherwise
    /// `view(data, is_loading, error)`. During a refetch the previous data
    /// stays on screen and `view` decides how to show the reload.
    pub fn render<F>(&self, noun: &str, view: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match (&self.data, &self.error) {
            (FetchState::Fetched(data), error) => {
                view(data, self.is_loading, error.as_ref())
            }
            (FetchState::NotFetched, Some(error)) => {
                html! { <ErrorPanel message={error.clone()} /> }
            }
            (FetchState::NotFetched, None) => {
                html! { <Spinner label={format!("Loading {noun}...")} /> }
            }
        }
    }
}

enum FetchEvent<T> {
    Started,
    Succeeded(T),
    Failed(String),
}

struct Request<T> {
    data: FetchState<T>,
    in_flight: bool,
    error: Option<String>,
}

impl<T> Default for Request<T> {
    fn default() -> Self {
        Self {
            data: FetchState::NotFetched,
            in_flight: false,
            error: None,
        }
    }
}

impl<T: Clone + 'static> Reducible for Request<T> {
    type Action = FetchEvent<T>;

    fn reduce(self: Rc<Self>, event: FetchEvent<T>) -> Rc<Self> {
        let next = match event {
            FetchEvent::Started => Request {
                data: self.data.clone(),
                in_flight: true,
                error: None,
            },
            FetchEvent::Succeeded(data) => Request {
                data: FetchState::Fetched(data),
                in_flight: false,
                error: None,
            },
            FetchEvent::Failed(message) => Request {
                data: self.data.clone(),
                in_flight: false,
                error: Some(message),
            },
        };
        Rc::new(next)
    }
}

impl<T> Request<T> {
    /// Nothing to show and nothing has gone wrong yet counts as loading, so
    /// the first render shows a spinner rather than an empty page.
    fn is_loading(&self, has_data: bool) -> bool {
        self.in_flight || (!has_data && self.error.is_none())
    }
}

/// Runs one request, reporting start and outcome to `dispatch`.
fn spawn_request<T, Fut>(dispatch: UseReducerDispatcher<Request<T>>, request: Fut)
where
    T: Clone + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    dispatch.dispatch(FetchEvent::Started);
    yew::platform::spawn_local(async move {
        match request.await {
            Ok(data) => dispatch.dispatch(FetchEvent::Succeeded(data)),
            Err(e) => {
                tracing::debug!("fetch failed: {e}");
                dispatch.dispatch(FetchEvent::Failed(e.to_string()));
            }
        }
    });
}

/// Issues `fetch(&deps)` on mount and again whenever `deps` changes, once
/// per distinct value.
///
/// ```rust,ignore
/// let space = use_fetch(space_id, |id| {
///     let id = id.clone();
///     async move { get_api_client().get_space(&id).await }
/// });
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + 'static,
    F: FnOnce(&D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let request = use_reducer(Request::<T>::default);

    {
        let dispatch = request.dispatcher();
        use_effect_with(deps, move |deps| spawn_request(dispatch, fetch(deps)));
    }

    FetchHookReturn {
        is_loading: request.is_loading(request.data.is_fetched()),
        data: request.data.clone(),
        error: request.error.clone(),
    }
}

/// Variant for data kept in the yewdux store, which outlives the component.
///
/// `cached` is whatever the store currently holds. When `deps` changes and
/// `should_fetch` is set, `fetch` runs; it is responsible for writing the
/// result back to the store.
#[hook]
pub fn use_fetch_with_cache<T, D, F, Fut>(
    deps: D,
    cached: Option<T>,
    should_fetch: bool,
    fetch: F,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + 'static,
    F: FnOnce(&D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let request = use_reducer(Request::<T>::default);

    {
        let dispatch = request.dispatcher();
        let in_flight = request.in_flight;
        use_effect_with(deps, move |deps| {
            if should_fetch && !in_flight {
                spawn_request(dispatch, fetch(deps));
            }
        });
    }

    let data = match cached {
        Some(data) => FetchState::Fetched(data),
        None => FetchState::NotFetched,
    };
    FetchHookReturn {
        is_loading: request.is_loading(data.is_fetched()),
        data,
        error: request.error.clone(),
    }
}
