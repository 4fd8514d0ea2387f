use payloads::responses::Paginated;
use payloads::{Location, LocationId, Space, SpaceStatus, SpaceType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::layout::PageHeader;
use crate::components::{
    ConfirmationModal, EmptyState, PaginationControls, SpaceStatusBadge,
};
use crate::contexts::toast::use_toast;
use crate::hooks::{
    QueryAction, use_confirmed_delete, use_list_query, use_locations,
    use_spaces, use_title,
};
use crate::utils::format::rupees;
use crate::{Route, State, get_api_client};

#[function_component]
pub fn SpacesPage() -> Html {
    use_title("Coworking Spaces");
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();

    let search_input = use_state(String::new);
    let (query, set_query) = use_list_query((*search_input).clone());
    let spaces_hook = use_spaces(query.clone(), state.spaces_revision);
    let locations_hook = use_locations();
    let locations = locations_hook.data.as_ref().cloned().unwrap_or_default();

    let deletion = use_confirmed_delete(
        |space: Space| async move { get_api_client().delete_space(&space.id).await },
        Callback::from(move |space: Space| {
            dispatch.reduce_mut(|s| s.spaces_changed());
            toast.success(format!("Deleted {}", space.space_name));
        }),
    );

    let on_search = {
        let search_input = search_input.clone();
        Callback::from(move |e: InputEvent| {
            search_input.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let select = |action: fn(String) -> QueryAction| {
        set_query.reform(move |e: Event| {
            action(e.target_unchecked_into::<HtmlSelectElement>().value())
        })
    };

    let filter_class = "px-3 py-2 border border-neutral-300 rounded-md text-sm \
                        bg-white focus:outline-none focus:ring-2 focus:ring-neutral-500";

    html! {
        <div>
            <PageHeader
                title="Coworking Spaces"
                description="Manage listings across all locations"
            >
                <Link<Route>
                    to={Route::NewSpace}
                    classes="px-4 py-2 text-sm font-medium rounded-md text-white \
                             bg-neutral-900 hover:bg-neutral-800"
                >
                    {"+ Add Space"}
                </Link<Route>>
            </PageHeader>

            <div class="flex flex-col md:flex-row gap-3 mb-4">
                <input
                    type="search"
                    placeholder="Search spaces..."
                    value={(*search_input).clone()}
                    oninput={on_search}
                    class={classes!(filter_class, "flex-1")}
                />
                <select onchange={select(QueryAction::Status)} class={filter_class}>
                    <option value="" selected={query.status.is_none()}>{"All statuses"}</option>
                    {for SpaceStatus::ALL.iter().map(|s| html! {
                        <option
                            value={s.as_str()}
                            selected={query.status.as_deref() == Some(s.as_str())}
                        >
                            {s.label()}
                        </option>
                    })}
                </select>
                <select onchange={select(QueryAction::SpaceType)} class={filter_class}>
                    <option value="" selected={query.space_type.is_none()}>{"All types"}</option>
                    {for SpaceType::ALL.iter().map(|t| html! {
                        <option
                            value={t.as_str()}
                            selected={query.space_type.as_deref() == Some(t.as_str())}
                        >
                            {t.label()}
                        </option>
                    })}
                </select>
                <select onchange={select(QueryAction::City)} class={filter_class}>
                    <option value="" selected={query.city.is_none()}>{"All cities"}</option>
                    {for locations.iter().map(|l| html! {
                        <option
                            value={l.id.0.clone()}
                            selected={query.city.as_deref() == Some(l.id.0.as_str())}
                        >
                            {&l.name}
                        </option>
                    })}
                </select>
            </div>

            {spaces_hook.render("spaces", |page, is_loading, error| html! {
                <>
                    if let Some(error) = error {
                        <p class="mb-2 text-sm text-red-600">{error}</p>
                    }
                    <SpacesTable
                        page={page.clone()}
                        locations={locations.clone()}
                        on_delete={deletion.prompt.clone()}
                    />
                    <PaginationControls
                        pagination={page.pagination}
                        on_page_change={set_query.reform(QueryAction::Page)}
                        {is_loading}
                        noun="spaces"
                    />
                </>
            })}

            if let Some(space) = &deletion.target {
                <ConfirmationModal
                    title="Delete Space"
                    message={format!("Delete \"{}\"?", space.space_name)}
                    on_confirm={deletion.confirm.clone()}
                    on_cancel={deletion.cancel.clone()}
                    is_busy={deletion.is_deleting}
                    error={deletion.error.clone()}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SpacesTableProps {
    page: Paginated<Space>,
    locations: Vec<Location>,
    on_delete: Callback<Space>,
}

fn location_name<'a>(locations: &'a [Location], id: &'a LocationId) -> &'a str {
    locations
        .iter()
        .find(|l| &l.id == id)
        .map(|l| l.name.as_str())
        .unwrap_or(id.0.as_str())
}

#[function_component]
fn SpacesTable(props: &SpacesTableProps) -> Html {
    if props.page.items.is_empty() {
        return html! {
            <EmptyState
                title="No spaces found"
                description="Try different filters or add a new space."
            />
        };
    }

    html! {
        <div class="overflow-x-auto bg-white rounded-lg border border-neutral-200">
            <table class="min-w-full divide-y divide-neutral-200 text-sm">
                <thead class="bg-neutral-50">
                    <tr class="text-left text-neutral-500">
                        <th class="px-4 py-3 font-medium">{"Space"}</th>
                        <th class="px-4 py-3 font-medium">{"Type"}</th>
                        <th class="px-4 py-3 font-medium">{"City"}</th>
                        <th class="px-4 py-3 font-medium">{"Hot desk"}</th>
                        <th class="px-4 py-3 font-medium">{"Status"}</th>
                        <th class="px-4 py-3 font-medium text-right">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-100">
                    {for props.page.items.iter().map(|space| {
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            let space = space.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(space.clone()))
                        };
                        html! {
                            <tr key={space.id.0.clone()}>
                                <td class="px-4 py-3">
                                    <p class="font-medium text-neutral-900">{&space.space_name}</p>
                                    <p class="text-xs text-neutral-500">
                                        {format!(
                                            "{} · {}",
                                            space.space_id.as_deref().unwrap_or("-"),
                                            space.space_category.label()
                                        )}
                                    </p>
                                </td>
                                <td class="px-4 py-3">{space.space_type.label()}</td>
                                <td class="px-4 py-3">{location_name(&props.locations, &space.city)}</td>
                                <td class="px-4 py-3">
                                    {space.pricing.hot_desk.map(rupees).unwrap_or_else(|| "-".into())}
                                </td>
                                <td class="px-4 py-3">
                                    <SpaceStatusBadge status={space.status} />
                                </td>
                                <td class="px-4 py-3 text-right whitespace-nowrap">
                                    <Link<Route>
                                        to={Route::EditSpace { id: space.id.clone() }}
                                        classes="text-neutral-700 hover:text-neutral-900 font-medium mr-4"
                                    >
                                        {"Edit"}
                                    </Link<Route>>
                                    <button
                                        onclick={on_delete}
                                        class="text-red-600 hover:text-red-800 font-medium"
                                    >
                                        {"Delete"}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
