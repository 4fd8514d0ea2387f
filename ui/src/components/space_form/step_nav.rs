use payloads::space_form::FormStep;
use yew::prelude::*;

use super::FormAction;

#[derive(Properties, PartialEq)]
pub struct StepNavProps {
    pub step: FormStep,
    pub is_editing: bool,
    pub is_submitting: bool,
    pub dispatch: Callback<FormAction>,
    pub on_cancel: Callback<()>,
}

const SECONDARY: &str = "px-4 py-2 text-sm font-medium rounded-md border \
    border-neutral-300 text-neutral-700 bg-white hover:bg-neutral-50 \
    disabled:opacity-50 disabled:cursor-not-allowed transition-colors";
const PRIMARY: &str = "px-4 py-2 text-sm font-medium rounded-md text-white \
    bg-neutral-900 hover:bg-neutral-800 disabled:opacity-50 \
    disabled:cursor-not-allowed transition-colors";

#[function_component]
pub fn StepNav(props: &StepNavProps) -> Html {
    let dispatch = &props.dispatch;
    let submit_label = match (props.is_submitting, props.is_editing) {
        (true, _) => "Saving...",
        (false, true) => "Update Space",
        (false, false) => "Create Space",
    };

    html! {
        <div class="flex items-center justify-between px-6 py-4 border-t \
                    border-neutral-200 bg-neutral-50 rounded-b-lg">
            <div class="flex gap-2">
                <button
                    type="button"
                    onclick={props.on_cancel.reform(|_: MouseEvent| ())}
                    disabled={props.is_submitting}
                    class={SECONDARY}
                >
                    {"Cancel"}
                </button>
                // Drafts are not persisted anywhere yet.
                <button
                    type="button"
                    disabled=true
                    title="Drafts are not available yet"
                    class={SECONDARY}
                >
                    {"Save as Draft"}
                </button>
            </div>

            <div class="flex gap-2">
                <button
                    type="button"
                    onclick={dispatch.reform(|_: MouseEvent| FormAction::Previous)}
                    disabled={props.step.is_first() || props.is_submitting}
                    class={SECONDARY}
                >
                    {"Previous"}
                </button>
                if props.step.is_last() {
                    <button
                        type="button"
                        onclick={dispatch.reform(|_: MouseEvent| FormAction::Submit)}
                        disabled={props.is_submitting}
                        class={PRIMARY}
                    >
                        {submit_label}
                    </button>
                } else {
                    <button
                        type="button"
                        onclick={dispatch.reform(|_: MouseEvent| FormAction::Next)}
                        class={PRIMARY}
                    >
                        {"Next"}
                    </button>
                }
            </div>
        </div>
    }
}
