use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: AttrValue,
}

#[function_component]
pub fn ErrorPanel(props: &ErrorPanelProps) -> Html {
    html! {
        <div class="p-4 rounded-md bg-red-50 border border-red-200">
            <p class="text-sm text-red-700">{&props.message}</p>
        </div>
    }
}

/// Centered message for a list with nothing in it.
#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn EmptyState(props: &EmptyStateProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-16 rounded-lg
                    border border-dashed border-neutral-300 bg-white">
            <p class="text-sm font-medium text-neutral-700">{&props.title}</p>
            if let Some(description) = &props.description {
                <p class="mt-1 text-sm text-neutral-500">{description}</p>
            }
            <div class="mt-4">{props.children.clone()}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component]
pub fn Spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-3">
            <span class="h-6 w-6 rounded-full border-2 border-neutral-300
                         border-t-neutral-700 animate-spin" />
            if let Some(label) = &props.label {
                <p class="text-sm text-neutral-500">{label}</p>
            }
        </div>
    }
}
