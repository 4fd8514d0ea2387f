use payloads::requests::ListQuery;
use std::rc::Rc;
use yew::prelude::*;

use super::use_debounce;
use super::use_debounce::SEARCH_DEBOUNCE_MS;

pub enum QueryAction {
    Page(u32),
    Status(String),
    Search(String),
    SpaceType(String),
    City(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryState(pub ListQuery);

impl Reducible for QueryState {
    type Action = QueryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let query = self.0.clone();
        let next = match action {
            QueryAction::Page(page) => query.with_page(page),
            QueryAction::Status(status) => query.with_status(&status),
            QueryAction::Search(search) => query.with_search(&search),
            QueryAction::SpaceType(space_type) => {
                query.with_space_type(&space_type)
            }
            QueryAction::City(city) => query.with_city(&city),
        };
        // Same query, same Rc: no re-render and no refetch.
        if next == self.0 {
            self
        } else {
            Rc::new(QueryState(next))
        }
    }
}

/// Filter state for a list page.
///
/// `search_input` is the raw text of the search box; it only reaches the
/// query once typing pauses. Every other change applies immediately and
/// filter changes go back to page 1.
#[hook]
pub fn use_list_query(
    search_input: String,
) -> (ListQuery, Callback<QueryAction>) {
    let state = use_reducer(QueryState::default);
    let search = use_debounce(search_input, SEARCH_DEBOUNCE_MS);

    {
        let state = state.clone();
        use_effect_with(search, move |search| {
            state.dispatch(QueryAction::Search(search.clone()));
        });
    }

    let dispatch = {
        let state = state.clone();
        Callback::from(move |action| state.dispatch(action))
    };
    (state.0.clone(), dispatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_change_returns_to_first_page() {
        let state = Rc::new(QueryState::default());
        let state = state.reduce(QueryAction::Page(3));
        assert_eq!(state.0.page, 3);

        let state = state.reduce(QueryAction::Status("new".into()));
        assert_eq!(state.0.page, 1);
        assert_eq!(state.0.status.as_deref(), Some("new"));
    }

    #[test]
    fn unchanged_query_keeps_identity() {
        let state = Rc::new(QueryState::default());
        let same = state.clone().reduce(QueryAction::Search("  ".into()));
        assert!(Rc::ptr_eq(&state, &same));
    }
}
