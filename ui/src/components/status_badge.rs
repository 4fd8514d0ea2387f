use payloads::{LeadStatus, SpaceStatus};
use yew::prelude::*;

fn lead_colors(status: LeadStatus) -> &'static str {
    match status {
        LeadStatus::New => "bg-blue-100 text-blue-800",
        LeadStatus::Contacted => "bg-purple-100 text-purple-800",
        LeadStatus::Qualified => "bg-green-100 text-green-800",
        LeadStatus::Converted => "bg-teal-100 text-teal-800",
        LeadStatus::Lost => "bg-red-100 text-red-800",
    }
}

fn space_colors(status: SpaceStatus) -> &'static str {
    match status {
        SpaceStatus::Active => "bg-emerald-100 text-emerald-800",
        SpaceStatus::Inactive => "bg-neutral-100 text-neutral-700",
        SpaceStatus::Pending => "bg-amber-100 text-amber-800",
    }
}

pub fn lead_status_select_class(status: LeadStatus) -> String {
    format!(
        "text-xs font-medium rounded-full px-2 py-1 border-0 cursor-pointer {}",
        lead_colors(status)
    )
}

#[derive(Properties, PartialEq)]
struct BadgeProps {
    label: AttrValue,
    colors: AttrValue,
}

#[function_component]
fn Badge(props: &BadgeProps) -> Html {
    html! {
        <span class={format!(
            "inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium {}",
            props.colors
        )}>
            {&props.label}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadStatusBadgeProps {
    pub status: LeadStatus,
}

#[function_component]
pub fn LeadStatusBadge(props: &LeadStatusBadgeProps) -> Html {
    html! {
        <Badge label={props.status.label()} colors={lead_colors(props.status)} />
    }
}

#[derive(Properties, PartialEq)]
pub struct SpaceStatusBadgeProps {
    pub status: SpaceStatus,
}

#[function_component]
pub fn SpaceStatusBadge(props: &SpaceStatusBadgeProps) -> Html {
    html! {
        <Badge label={props.status.label()} colors={space_colors(props.status)} />
    }
}

#[derive(Properties, PartialEq)]
pub struct ActiveBadgeProps {
    pub is_active: bool,
}

#[function_component]
pub fn ActiveBadge(props: &ActiveBadgeProps) -> Html {
    let (label, colors) = match props.is_active {
        true => ("Active", "bg-emerald-100 text-emerald-800"),
        false => ("Inactive", "bg-neutral-100 text-neutral-700"),
    };
    html! { <Badge {label} {colors} /> }
}
