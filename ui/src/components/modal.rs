use yew::prelude::*;

/// Dialog layered over a dimmed page.
///
/// The backdrop is its own element behind the panel, so only clicks that
/// land outside the panel reach it.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub children: Html,
    pub on_close: Callback<()>,
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub width: AttrValue,
    /// False while a request started from the dialog is still running.
    #[prop_or(true)]
    pub dismissable: bool,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        let dismissable = props.dismissable;
        Callback::from(move |_: MouseEvent| {
            if dismissable {
                on_close.emit(());
            }
        })
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4" role="dialog">
            <div class="absolute inset-0 bg-neutral-900/50" onclick={on_backdrop} />
            <div class={classes!(
                "relative", "w-full", "rounded-lg", "bg-white", "p-6", "shadow-xl",
                props.width.to_string(),
            )}>
                {props.children.clone()}
            </div>
        </div>
    }
}
