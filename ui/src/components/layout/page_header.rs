use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Buttons on the right
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn PageHeader(props: &PageHeaderProps) -> Html {
    html! {
        <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-6">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900">{&props.title}</h1>
                if let Some(description) = &props.description {
                    <p class="mt-1 text-sm text-neutral-600">{description}</p>
                }
            </div>
            <div class="flex items-center gap-2">
                {props.children.clone()}
            </div>
        </div>
    }
}
