use yew::prelude::*;

use crate::contexts::toast::{Toast, ToastContext, Tone, use_toast};

/// Renders the notices raised through `use_toast`, newest at the bottom.
#[function_component]
pub fn ToastStack() -> Html {
    let Some(context) = use_context::<ToastContext>() else {
        return html! {};
    };

    html! {
        <div class="fixed top-4 right-4 z-50 w-full max-w-sm space-y-3 pointer-events-none">
            {for context.toasts.iter().map(|toast| html! {
                <ToastCard key={toast.id.to_string()} toast={toast.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastCardProps {
    toast: Toast,
}

#[function_component]
fn ToastCard(props: &ToastCardProps) -> Html {
    let handle = use_toast();
    let toast = &props.toast;
    let (palette, mark) = match toast.tone {
        Tone::Success => ("border-green-200 bg-green-50 text-green-800", "✓"),
        Tone::Error => ("border-red-200 bg-red-50 text-red-800", "!"),
    };
    let dismiss = {
        let id = toast.id;
        Callback::from(move |_: MouseEvent| handle.dismiss(id))
    };

    html! {
        <div
            role={if toast.tone == Tone::Error { "alert" } else { "status" }}
            class={classes!(
                "pointer-events-auto", "flex", "items-start", "gap-3", "p-4",
                "rounded-lg", "border", "shadow-lg", palette,
            )}
        >
            <span class="text-sm font-bold">{mark}</span>
            <p class="flex-1 text-sm font-medium">{&toast.message}</p>
            <button
                onclick={dismiss}
                class="text-lg leading-none opacity-60 hover:opacity-100"
                aria-label="Dismiss"
            >
                {"×"}
            </button>
        </div>
    }
}
