//! Transient success/error notices shown in the top-right corner.

use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

/// Older notices are dropped once this many are on screen.
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    /// Errors stay up longer so they can be read.
    fn lifetime_ms(self) -> u32 {
        match self {
            Tone::Success => 4_000,
            Tone::Error => 8_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub tone: Tone,
    pub message: AttrValue,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    /// Oldest first.
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Show(Toast),
    Dismiss(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        match action {
            ToastAction::Show(toast) => {
                let skip = (self.toasts.len() + 1).saturating_sub(MAX_VISIBLE);
                let toasts = self
                    .toasts
                    .iter()
                    .skip(skip)
                    .cloned()
                    .chain(std::iter::once(toast))
                    .collect();
                Rc::new(ToastState { toasts })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                let toasts =
                    self.toasts.iter().filter(|t| t.id != id).cloned().collect();
                Rc::new(ToastState { toasts })
            }
        }
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Html,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

/// Cheap handle for raising notices from callbacks and async tasks.
#[derive(Clone)]
pub struct ToastHandle {
    context: Option<ToastContext>,
}

impl ToastHandle {
    fn show(&self, tone: Tone, message: AttrValue) {
        let Some(context) = self.context.clone() else {
            tracing::warn!("no toast provider for: {message}");
            return;
        };
        let id = Uuid::new_v4();
        context.dispatch(ToastAction::Show(Toast { id, tone, message }));

        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(tone.lifetime_ms()).await;
            context.dispatch(ToastAction::Dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<AttrValue>) {
        self.show(Tone::Success, message.into());
    }

    pub fn error(&self, message: impl Into<AttrValue>) {
        self.show(Tone::Error, message.into());
    }

    pub fn dismiss(&self, id: Uuid) {
        if let Some(context) = &self.context {
            context.dispatch(ToastAction::Dismiss(id));
        }
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    ToastHandle {
        context: use_context::<ToastContext>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(message: &'static str) -> Toast {
        Toast {
            id: Uuid::new_v4(),
            tone: Tone::Success,
            message: message.into(),
        }
    }

    fn show_all(messages: &[&'static str]) -> Rc<ToastState> {
        messages.iter().fold(Rc::default(), |state, m| {
            state.reduce(ToastAction::Show(toast(m)))
        })
    }

    #[test]
    fn oldest_toast_is_dropped_past_the_limit() {
        let state = show_all(&["a", "b", "c", "d", "e"]);
        let messages: Vec<&str> =
            state.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["b", "c", "d", "e"]);
    }

    #[test]
    fn dismissing_an_unknown_toast_keeps_state() {
        let state = show_all(&["saved"]);
        let next = state.clone().reduce(ToastAction::Dismiss(Uuid::new_v4()));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let state = show_all(&["a", "b"]);
        let id = state.toasts[0].id;
        let state = state.reduce(ToastAction::Dismiss(id));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message.as_str(), "b");
    }
}
