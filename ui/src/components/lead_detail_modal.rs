use payloads::Lead;
use yew::prelude::*;

use super::{LeadStatusBadge, Modal};
use crate::utils::format::short_date;

#[derive(Properties, PartialEq)]
pub struct LeadDetailModalProps {
    pub lead: Lead,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn LeadDetailModal(props: &LeadDetailModalProps) -> Html {
    let lead = &props.lead;
    let rows: [(&str, String); 8] = [
        ("Email", lead.email.clone()),
        ("Phone", lead.phone.clone()),
        ("Enquired for", lead.enquired_for.clone()),
        ("Space type", lead.space_type.clone()),
        ("Seats", lead.number_of_seats.to_string()),
        ("Location", lead.location.clone()),
        ("Received", short_date(lead.date)),
        ("Reference", lead.lead_id.clone()),
    ];

    html! {
        <Modal on_close={props.on_close.clone()} width="max-w-lg">
            <div class="flex items-start justify-between mb-4">
                <div>
                    <h2 class="text-lg font-semibold text-neutral-900">{&lead.name}</h2>
                    <p class="text-sm text-neutral-500">{&lead.lead_id}</p>
                </div>
                <LeadStatusBadge status={lead.status} />
            </div>

            <dl class="grid grid-cols-3 gap-x-4 gap-y-2 text-sm">
                {for rows.iter().map(|(label, value)| html! {
                    <>
                        <dt class="text-neutral-500">{*label}</dt>
                        <dd class="col-span-2 text-neutral-900 break-words">{value}</dd>
                    </>
                })}
            </dl>

            if let Some(message) = &lead.message {
                <div class="mt-4">
                    <p class="text-sm font-medium text-neutral-700 mb-1">{"Message"}</p>
                    <p class="text-sm text-neutral-700 whitespace-pre-wrap bg-neutral-50 \
                              rounded-md p-3 border border-neutral-200">
                        {message}
                    </p>
                </div>
            }

            <div class="mt-6 flex justify-end gap-2">
                <a
                    href={format!("mailto:{}", lead.email)}
                    class="px-4 py-2 text-sm font-medium rounded-md border \
                           border-neutral-300 text-neutral-700 hover:bg-neutral-50"
                >
                    {"Email lead"}
                </a>
                <button
                    onclick={props.on_close.reform(|_: MouseEvent| ())}
                    class="px-4 py-2 text-sm font-medium rounded-md text-white \
                           bg-neutral-900 hover:bg-neutral-800"
                >
                    {"Close"}
                </button>
            </div>
        </Modal>
    }
}
