use payloads::ClientError;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// Delete-with-confirmation for one row at a time.
///
/// `prompt` only remembers the row; nothing is sent until `confirm`. A
/// failed request leaves the prompt open with the error shown.
pub struct ConfirmedDelete<T> {
    /// Row awaiting confirmation. The prompt is open while this is set.
    pub target: Option<T>,
    pub is_deleting: bool,
    pub error: Option<AttrValue>,
    pub prompt: Callback<T>,
    pub cancel: Callback<()>,
    pub confirm: Callback<()>,
}

pub enum DeleteAction<T> {
    Prompt(T),
    Cancel,
    Started,
    Failed(String),
    Done,
}

#[derive(Clone)]
pub struct DeletePrompt<T> {
    target: Option<T>,
    is_deleting: bool,
    error: Option<AttrValue>,
}

impl<T> Default for DeletePrompt<T> {
    fn default() -> Self {
        Self {
            target: None,
            is_deleting: false,
            error: None,
        }
    }
}

impl<T: Clone> DeletePrompt<T> {
    /// The row a confirm should delete now, if any. `None` while nothing is
    /// prompted or a delete is already in flight.
    pub fn take_confirmed(&self) -> Option<T> {
        if self.is_deleting {
            None
        } else {
            self.target.clone()
        }
    }
}

impl<T: Clone> Reducible for DeletePrompt<T> {
    type Action = DeleteAction<T>;

    fn reduce(self: Rc<Self>, action: DeleteAction<T>) -> Rc<Self> {
        match action {
            DeleteAction::Prompt(target) if !self.is_deleting => {
                Rc::new(DeletePrompt {
                    target: Some(target),
                    is_deleting: false,
                    error: None,
                })
            }
            // The prompt stays up until an in-flight delete settles.
            DeleteAction::Cancel if !self.is_deleting => Rc::default(),
            DeleteAction::Started if self.target.is_some() => {
                Rc::new(DeletePrompt {
                    is_deleting: true,
                    error: None,
                    ..(*self).clone()
                })
            }
            DeleteAction::Failed(message) => Rc::new(DeletePrompt {
                is_deleting: false,
                error: Some(message.into()),
                ..(*self).clone()
            }),
            DeleteAction::Done => Rc::default(),
            _ => self,
        }
    }
}

/// `delete` issues the request for a confirmed row; `on_deleted` runs after
/// it succeeds, typically to refetch and announce.
#[hook]
pub fn use_confirmed_delete<T, F, Fut>(
    delete: F,
    on_deleted: Callback<T>,
) -> ConfirmedDelete<T>
where
    T: Clone + 'static,
    F: Fn(T) -> Fut + 'static,
    Fut: Future<Output = Result<(), ClientError>> + 'static,
{
    let state = use_reducer(DeletePrompt::<T>::default);

    let confirm = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let Some(target) = state.take_confirmed() else {
                return;
            };
            let dispatch = state.dispatcher();
            let on_deleted = on_deleted.clone();
            let request = delete(target.clone());

            dispatch.dispatch(DeleteAction::Started);
            yew::platform::spawn_local(async move {
                match request.await {
                    Ok(()) => {
                        dispatch.dispatch(DeleteAction::Done);
                        on_deleted.emit(target);
                    }
                    Err(e) => {
                        tracing::warn!("delete failed: {e}");
                        dispatch.dispatch(DeleteAction::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    ConfirmedDelete {
        target: state.target.clone(),
        is_deleting: state.is_deleting,
        error: state.error.clone(),
        prompt: {
            let dispatch = state.dispatcher();
            Callback::from(move |target| dispatch.dispatch(DeleteAction::Prompt(target)))
        },
        cancel: {
            let dispatch = state.dispatcher();
            Callback::from(move |_| dispatch.dispatch(DeleteAction::Cancel))
        },
        confirm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt_for(id: &str) -> Rc<DeletePrompt<String>> {
        Rc::new(DeletePrompt::default()).reduce(DeleteAction::Prompt(id.into()))
    }

    #[test]
    fn cancel_closes_the_prompt() {
        let state = prompt_for("space-1").reduce(DeleteAction::Cancel);
        assert!(state.target.is_none());
    }

    #[test]
    fn cancel_is_ignored_while_deleting() {
        let state = prompt_for("space-1")
            .reduce(DeleteAction::Started)
            .reduce(DeleteAction::Cancel);
        assert_eq!(state.target.as_deref(), Some("space-1"));
        assert!(state.is_deleting);
    }

    #[test]
    fn nothing_is_confirmed_without_a_prompt() {
        assert!(DeletePrompt::<String>::default().take_confirmed().is_none());
    }

    #[test]
    fn nothing_is_confirmed_after_cancel() {
        let state = prompt_for("space-1").reduce(DeleteAction::Cancel);
        assert!(state.take_confirmed().is_none());
    }

    #[test]
    fn a_second_confirm_while_deleting_sends_nothing() {
        let state = prompt_for("space-1");
        assert_eq!(state.take_confirmed().as_deref(), Some("space-1"));
        let state = state.reduce(DeleteAction::Started);
        assert!(state.take_confirmed().is_none());
    }

    #[test]
    fn a_failed_delete_can_be_confirmed_again() {
        let state = prompt_for("lead-7")
            .reduce(DeleteAction::Started)
            .reduce(DeleteAction::Failed("timeout".into()));
        assert_eq!(state.take_confirmed().as_deref(), Some("lead-7"));
    }

    #[test]
    fn start_without_a_target_does_nothing() {
        let idle = Rc::new(DeletePrompt::<String>::default());
        let state = idle.clone().reduce(DeleteAction::Started);
        assert!(Rc::ptr_eq(&idle, &state));
    }

    #[test]
    fn failure_keeps_the_prompt_open_with_the_message() {
        let state = prompt_for("lead-7")
            .reduce(DeleteAction::Started)
            .reduce(DeleteAction::Failed("Lead not found".into()));
        assert_eq!(state.target.as_deref(), Some("lead-7"));
        assert!(!state.is_deleting);
        assert_eq!(state.error.as_deref(), Some("Lead not found"));
    }

    #[test]
    fn reopening_clears_the_previous_error() {
        let state = prompt_for("lead-7")
            .reduce(DeleteAction::Failed("nope".into()))
            .reduce(DeleteAction::Cancel)
            .reduce(DeleteAction::Prompt("lead-8".into()));
        assert!(state.error.is_none());
        assert_eq!(state.target.as_deref(), Some("lead-8"));
    }
}
