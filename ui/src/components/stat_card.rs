use yew::prelude::*;

use crate::utils::format::Trend;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    /// Signed change label such as `+12.5%`
    #[prop_or_default]
    pub change: Option<AttrValue>,
    #[prop_or(Trend::Flat)]
    pub trend: Trend,
    /// Text after the change, e.g. "vs last month"
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    /// Tailwind classes for the accent bar
    #[prop_or_else(|| AttrValue::from("bg-neutral-800"))]
    pub accent: AttrValue,
}

#[function_component]
pub fn StatCard(props: &StatCardProps) -> Html {
    html! {
        <div class="relative overflow-hidden bg-white rounded-lg border border-neutral-200 p-5">
            <div class={classes!("absolute", "inset-y-0", "left-0", "w-1", props.accent.to_string())}></div>
            <p class="text-sm font-medium text-neutral-500">{&props.title}</p>
            <p class="mt-2 text-2xl font-semibold text-neutral-900">{&props.value}</p>
            if props.change.is_some() || props.caption.is_some() {
                <p class="mt-1 text-xs">
                    if let Some(change) = &props.change {
                        <span class={classes!("font-medium", props.trend.text_class())}>
                            {format!("{} {change}", props.trend.arrow()).trim().to_string()}
                        </span>
                    }
                    if let Some(caption) = &props.caption {
                        <span class="ml-1 text-neutral-500">{caption}</span>
                    }
                </p>
            }
        </div>
    }
}
