use yew::prelude::*;

use super::Modal;

/// Blocking prompt in front of an irreversible action. Nothing happens
/// unless the confirm button is pressed.
#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    pub title: AttrValue,
    /// Names the record that will be lost, e.g. `Delete "WorkHub Kochi"?`
    pub message: AttrValue,
    #[prop_or_else(|| AttrValue::from("Delete"))]
    pub confirm_text: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub is_busy: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component]
pub fn ConfirmationModal(props: &ConfirmationModalProps) -> Html {
    let confirm_label = if props.is_busy {
        AttrValue::from("Deleting...")
    } else {
        props.confirm_text.clone()
    };
    let button = "px-4 py-2 text-sm font-medium rounded-md transition-colors \
                  disabled:opacity-50 disabled:cursor-not-allowed";

    html! {
        <Modal on_close={props.on_cancel.clone()} dismissable={!props.is_busy}>
            <h3 class="text-lg font-semibold text-neutral-900">{&props.title}</h3>
            <p class="mt-3 text-sm text-neutral-600">
                {&props.message}
                {" This cannot be undone."}
            </p>
            if let Some(error) = &props.error {
                <p class="mt-3 text-sm text-red-600">{error}</p>
            }
            <div class="mt-6 flex justify-end gap-3">
                <button
                    class={classes!(button, "border", "border-neutral-300", "text-neutral-700", "hover:bg-neutral-50")}
                    disabled={props.is_busy}
                    onclick={props.on_cancel.reform(|_: MouseEvent| ())}
                >
                    {"Cancel"}
                </button>
                <button
                    class={classes!(button, "text-white", "bg-red-600", "hover:bg-red-700")}
                    disabled={props.is_busy}
                    onclick={props.on_confirm.reform(|_: MouseEvent| ())}
                >
                    {confirm_label}
                </button>
            </div>
        </Modal>
    }
}
