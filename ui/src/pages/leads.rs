use payloads::export::{export_filename, leads_csv};
use payloads::requests::ListQuery;
use payloads::responses::Paginated;
use payloads::{Lead, LeadStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::layout::PageHeader;
use crate::components::{
    ConfirmationModal, EmptyState, LeadDetailModal, PaginationControls,
    StatCard, lead_status_select_class,
};
use crate::contexts::toast::{ToastHandle, use_toast};
use crate::get_api_client;
use crate::hooks::{
    QueryAction, use_confirmed_delete, use_lead_stats, use_leads,
    use_list_query, use_title,
};
use crate::utils::download::download_text;
use crate::utils::format::short_date;
use crate::utils::today;

/// Upper bound on rows in one report.
const EXPORT_LIMIT: u32 = 1000;

#[function_component]
pub fn LeadsPage() -> Html {
    use_title("Leads");
    let toast = use_toast();

    let search_input = use_state(String::new);
    let (query, set_query) = use_list_query((*search_input).clone());
    // Bumped after every mutation so the list and counts refetch.
    let revision = use_state(|| 0u32);
    let leads_hook = use_leads(query.clone(), *revision);
    let stats_hook = use_lead_stats(*revision);

    let selected = use_state(|| None::<Lead>);
    let is_exporting = use_state(|| false);

    let bump = {
        let revision = revision.clone();
        Callback::from(move |_: ()| revision.set(revision.wrapping_add(1)))
    };

    let on_search = {
        let search_input = search_input.clone();
        Callback::from(move |e: InputEvent| {
            search_input.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_status_filter = set_query.reform(|e: Event| {
        QueryAction::Status(e.target_unchecked_into::<HtmlSelectElement>().value())
    });

    let on_status_change = {
        let bump = bump.clone();
        let toast = toast.clone();
        Callback::from(move |(lead, status): (Lead, LeadStatus)| {
            let bump = bump.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                match get_api_client().update_lead_status(&lead.id, status).await {
                    Ok(updated) => {
                        toast.success(format!(
                            "{} marked as {}",
                            updated.name,
                            updated.status.label()
                        ));
                        bump.emit(());
                    }
                    Err(e) => toast.error(e.to_string()),
                }
            });
        })
    };

    let deletion = use_confirmed_delete(
        |lead: Lead| async move { get_api_client().delete_lead(&lead.id).await },
        {
            let bump = bump.clone();
            let toast = toast.clone();
            Callback::from(move |lead: Lead| {
                toast.success(format!("Deleted lead {}", lead.lead_id));
                bump.emit(());
            })
        },
    );

    let on_export = {
        let query = query.clone();
        let is_exporting = is_exporting.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            if *is_exporting {
                return;
            }
            let query = ListQuery {
                page: 1,
                limit: EXPORT_LIMIT,
                ..query.clone()
            };
            let is_exporting = is_exporting.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                is_exporting.set(true);
                export_report(&query, &toast).await;
                is_exporting.set(false);
            });
        })
    };

    let on_view = {
        let selected = selected.clone();
        Callback::from(move |lead: Lead| selected.set(Some(lead)))
    };
    let filter_class = "px-3 py-2 border border-neutral-300 rounded-md text-sm \
                        bg-white focus:outline-none focus:ring-2 focus:ring-neutral-500";

    html! {
        <div>
            <PageHeader title="Leads" description="Enquiries from the public site">
                <button
                    onclick={on_export}
                    disabled={*is_exporting}
                    class="px-4 py-2 text-sm font-medium rounded-md border \
                           border-neutral-300 text-neutral-700 bg-white \
                           hover:bg-neutral-50 disabled:opacity-50"
                >
                    {if *is_exporting { "Exporting..." } else { "Export Report" }}
                </button>
            </PageHeader>

            <div class="mb-6">
                {stats_hook.render("lead statistics", |stats, _, _| html! {
                    <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                        <StatCard title="Total Enquiries" value={stats.total.to_string()} />
                        <StatCard title="New" value={stats.new.to_string()} accent="bg-blue-500" />
                        <StatCard title="Qualified" value={stats.qualified.to_string()} accent="bg-green-500" />
                        <StatCard title="Converted" value={stats.converted.to_string()} accent="bg-teal-500" />
                    </div>
                })}
            </div>

            <div class="flex flex-col md:flex-row gap-3 mb-4">
                <input
                    type="search"
                    placeholder="Search by name, email or lead ID..."
                    value={(*search_input).clone()}
                    oninput={on_search}
                    class={classes!(filter_class, "flex-1")}
                />
                <select onchange={on_status_filter} class={filter_class}>
                    <option value="" selected={query.status.is_none()}>{"All statuses"}</option>
                    {for LeadStatus::ALL.iter().map(|s| html! {
                        <option
                            value={s.as_str()}
                            selected={query.status.as_deref() == Some(s.as_str())}
                        >
                            {s.label()}
                        </option>
                    })}
                </select>
            </div>

            {leads_hook.render("leads", |page, is_loading, error| html! {
                <>
                    if let Some(error) = error {
                        <p class="mb-2 text-sm text-red-600">{error}</p>
                    }
                    <LeadsTable
                        page={page.clone()}
                        on_view={on_view.clone()}
                        on_status_change={on_status_change.clone()}
                        on_delete={deletion.prompt.clone()}
                    />
                    <PaginationControls
                        pagination={page.pagination}
                        on_page_change={set_query.reform(QueryAction::Page)}
                        {is_loading}
                        noun="leads"
                    />
                </>
            })}

            if let Some(lead) = &*selected {
                <LeadDetailModal
                    lead={lead.clone()}
                    on_close={{
                        let selected = selected.clone();
                        Callback::from(move |_| selected.set(None))
                    }}
                />
            }

            if let Some(lead) = &deletion.target {
                <ConfirmationModal
                    title="Delete Lead"
                    message={format!("Delete the enquiry from {}?", lead.name)}
                    on_confirm={deletion.confirm.clone()}
                    on_cancel={deletion.cancel.clone()}
                    is_busy={deletion.is_deleting}
                    error={deletion.error.clone()}
                />
            }
        </div>
    }
}

/// Download every lead matching the current filters as CSV.
async fn export_report(query: &ListQuery, toast: &ToastHandle) {
    let leads = match get_api_client().list_leads(query).await {
        Ok(page) => page.items,
        Err(e) => {
            toast.error(e.to_string());
            return;
        }
    };
    if leads.is_empty() {
        toast.error("There are no leads to export");
        return;
    }

    let csv = match leads_csv(&leads) {
        Ok(csv) => csv,
        Err(e) => {
            tracing::error!("lead export failed: {e}");
            toast.error(e.to_string());
            return;
        }
    };
    let filename = export_filename(today());
    match download_text(&filename, &csv, "text/csv;charset=utf-8") {
        Ok(()) => toast.success(format!("Exported {} leads", leads.len())),
        Err(e) => {
            tracing::error!("download failed: {e:?}");
            toast.error("Could not start the download");
        }
    }
}

#[derive(Properties, PartialEq)]
struct LeadsTableProps {
    page: Paginated<Lead>,
    on_view: Callback<Lead>,
    on_status_change: Callback<(Lead, LeadStatus)>,
    on_delete: Callback<Lead>,
}

#[function_component]
fn LeadsTable(props: &LeadsTableProps) -> Html {
    if props.page.items.is_empty() {
        return html! {
            <EmptyState
                title="No leads found"
                description="New enquiries will show up here."
            />
        };
    }

    html! {
        <div class="overflow-x-auto bg-white rounded-lg border border-neutral-200">
            <table class="min-w-full divide-y divide-neutral-200 text-sm">
                <thead class="bg-neutral-50">
                    <tr class="text-left text-neutral-500">
                        <th class="px-4 py-3 font-medium">{"Lead"}</th>
                        <th class="px-4 py-3 font-medium">{"Contact"}</th>
                        <th class="px-4 py-3 font-medium">{"Enquired for"}</th>
                        <th class="px-4 py-3 font-medium">{"Seats"}</th>
                        <th class="px-4 py-3 font-medium">{"Date"}</th>
                        <th class="px-4 py-3 font-medium">{"Status"}</th>
                        <th class="px-4 py-3 font-medium text-right">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-100">
                    {for props.page.items.iter().map(|lead| {
                        let on_view = {
                            let on_view = props.on_view.clone();
                            let lead = lead.clone();
                            Callback::from(move |_: MouseEvent| on_view.emit(lead.clone()))
                        };
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            let lead = lead.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(lead.clone()))
                        };
                        let on_status = {
                            let on_status_change = props.on_status_change.clone();
                            let lead = lead.clone();
                            Callback::from(move |e: Event| {
                                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                                match value.parse::<LeadStatus>() {
                                    Ok(status) if status != lead.status => {
                                        on_status_change.emit((lead.clone(), status))
                                    }
                                    Ok(_) => {}
                                    Err(e) => tracing::warn!("{e}"),
                                }
                            })
                        };

                        html! {
                            <tr key={lead.id.0.clone()}>
                                <td class="px-4 py-3">
                                    <p class="font-medium text-neutral-900">{&lead.name}</p>
                                    <p class="text-xs text-neutral-500">{&lead.lead_id}</p>
                                </td>
                                <td class="px-4 py-3">
                                    <p>{&lead.email}</p>
                                    <p class="text-xs text-neutral-500">{&lead.phone}</p>
                                </td>
                                <td class="px-4 py-3">
                                    <p>{&lead.enquired_for}</p>
                                    <p class="text-xs text-neutral-500">
                                        {format!("{} · {}", lead.space_type, lead.location)}
                                    </p>
                                </td>
                                <td class="px-4 py-3">{lead.number_of_seats}</td>
                                <td class="px-4 py-3 whitespace-nowrap">{short_date(lead.date)}</td>
                                <td class="px-4 py-3">
                                    <select
                                        onchange={on_status}
                                        class={lead_status_select_class(lead.status)}
                                    >
                                        {for LeadStatus::ALL.iter().map(|s| html! {
                                            <option value={s.as_str()} selected={*s == lead.status}>
                                                {s.label()}
                                            </option>
                                        })}
                                    </select>
                                </td>
                                <td class="px-4 py-3 text-right whitespace-nowrap">
                                    <button
                                        onclick={on_view}
                                        class="text-neutral-700 hover:text-neutral-900 font-medium mr-4"
                                    >
                                        {"View"}
                                    </button>
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
