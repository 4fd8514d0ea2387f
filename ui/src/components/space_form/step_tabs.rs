use payloads::space_form::FormStep;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StepTabsProps {
    pub current: FormStep,
    /// Moving forward is validated by the form; backward is free.
    pub on_select: Callback<FormStep>,
}

#[function_component]
pub fn StepTabs(props: &StepTabsProps) -> Html {
    html! {
        <div class="border-b border-neutral-200 overflow-x-auto">
            <nav class="flex -mb-px">
                {for FormStep::ALL.iter().map(|&step| {
                    let state_class = if step == props.current {
                        "border-neutral-900 text-neutral-900"
                    } else if step < props.current {
                        "border-transparent text-emerald-700 hover:text-emerald-800"
                    } else {
                        "border-transparent text-neutral-500 hover:text-neutral-700"
                    };
                    let marker = if step < props.current {
                        "✓".to_string()
                    } else {
                        (step.index() + 1).to_string()
                    };

                    html! {
                        <button
                            key={step.key()}
                            type="button"
                            onclick={props.on_select.reform(move |_: MouseEvent| step)}
                            class={format!(
                                "flex items-center gap-2 px-4 py-3 border-b-2 \
                                 text-sm font-medium whitespace-nowrap {state_class}"
                            )}
                        >
                            <span class="inline-flex items-center justify-center w-5 h-5 \
                                         rounded-full bg-neutral-100 text-xs">
                                {marker}
                            </span>
                            {step.label()}
                        </button>
                    }
                })}
            </nav>
        </div>
    }
}
