use payloads::responses::Pagination;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationControlsProps {
    pub pagination: Pagination,
    /// Receives the 1-based page to load.
    pub on_page_change: Callback<u32>,
    #[prop_or_default]
    pub is_loading: bool,
    /// Plural noun for the summary, e.g. "leads".
    #[prop_or_else(|| AttrValue::from("results"))]
    pub noun: AttrValue,
}

/// Previous/next bar under a list. Renders nothing for an empty result.
#[function_component]
pub fn PaginationControls(props: &PaginationControlsProps) -> Html {
    let page_info = props.pagination;
    let Some((first, last)) = page_info.item_range() else {
        return html! {};
    };
    let go_to = |page: u32| props.on_page_change.reform(move |_: MouseEvent| page);

    html! {
        <nav class="mt-4 pt-4 flex items-center justify-between border-t border-neutral-200">
            <PageButton
                label="Previous"
                enabled={page_info.has_previous() && !props.is_loading}
                onclick={go_to(page_info.page.saturating_sub(1).max(1))}
            />
            <p class="text-sm text-neutral-600">
                {format!(
                    "{first}-{last} of {} {} · page {} of {}",
                    page_info.total, props.noun, page_info.page, page_info.total_pages,
                )}
            </p>
            <PageButton
                label="Next"
                enabled={page_info.has_next() && !props.is_loading}
                onclick={go_to(page_info.page + 1)}
            />
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct PageButtonProps {
    label: AttrValue,
    enabled: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component]
fn PageButton(props: &PageButtonProps) -> Html {
    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={!props.enabled}
            class="px-4 py-2 rounded-md border border-neutral-300 text-sm font-medium \
                   text-neutral-700 bg-white hover:bg-neutral-50 \
                   disabled:bg-neutral-100 disabled:text-neutral-400 disabled:cursor-not-allowed"
        >
            {&props.label}
        </button>
    }
}
