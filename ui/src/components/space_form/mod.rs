//! The seven-step space editor. [`EditorState`] wraps the form state
//! machine from `payloads::space_form` so components can drive it with
//! plain actions; a successful submit parks the request in `pending` for
//! the page to send.

mod step_nav;
mod step_tabs;
mod steps;

use payloads::space_form::{
    FormStep, SpaceField, SpaceForm, SubmitError, Submission,
};
use payloads::{Location, Space};
use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::FetchState;
use step_nav::StepNav;
use step_tabs::StepTabs;

pub enum FormAction {
    Load(Box<Space>),
    SetText(SpaceField, String),
    Blur(SpaceField),
    ToggleAmenity(String),
    AddImage(String),
    RemoveImage(usize),
    Next,
    Previous,
    GoTo(FormStep),
    Submit,
    SubmitFailed(String),
    SubmitSucceeded,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    pub form: SpaceForm,
    /// A validated request waiting to be sent.
    pub pending: Option<Submission>,
    /// Why the last Next or Submit did nothing.
    pub notice: Option<String>,
}

impl Reducible for EditorState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.notice = None;
        let form = &mut next.form;

        match action {
            FormAction::Load(space) => {
                return Rc::new(EditorState {
                    form: SpaceForm::edit(&space),
                    ..EditorState::default()
                });
            }
            FormAction::SetText(field, value) => form.set_text(field, value),
            FormAction::Blur(field) => form.blur(field),
            FormAction::ToggleAmenity(amenity) => form.toggle_amenity(&amenity),
            FormAction::AddImage(url) => form.add_image(&url),
            FormAction::RemoveImage(index) => form.remove_image(index),
            FormAction::Next => {
                if !form.next() && !form.errors().is_empty() {
                    next.notice = Some(
                        SubmitError::Invalid { step: form.step() }.to_string(),
                    );
                }
            }
            FormAction::Previous => {
                form.previous();
            }
            FormAction::GoTo(step) => {
                if form.go_to(step) != step {
                    next.notice = Some(
                        SubmitError::Invalid { step: form.step() }.to_string(),
                    );
                }
            }
            FormAction::Submit => match form.submit() {
                Ok(submission) => next.pending = Some(submission),
                Err(SubmitError::InProgress) => {}
                Err(e) => next.notice = Some(e.to_string()),
            },
            FormAction::SubmitFailed(message) => {
                form.submit_failed(message);
                next.pending = None;
            }
            FormAction::SubmitSucceeded => {
                form.submit_succeeded();
                next.pending = None;
            }
        }
        Rc::new(next)
    }
}

/// What the step views need to render and edit the draft.
#[derive(Properties, PartialEq, Clone)]
pub struct StepProps {
    pub form: SpaceForm,
    pub dispatch: Callback<FormAction>,
    pub locations: FetchState<Vec<Location>>,
    #[prop_or_default]
    pub locations_error: Option<AttrValue>,
}

#[derive(Properties, PartialEq)]
pub struct SpaceFormViewProps {
    pub state: EditorState,
    pub dispatch: Callback<FormAction>,
    pub locations: FetchState<Vec<Location>>,
    #[prop_or_default]
    pub locations_error: Option<AttrValue>,
    pub on_cancel: Callback<()>,
}

#[function_component]
pub fn SpaceFormView(props: &SpaceFormViewProps) -> Html {
    let form = &props.state.form;
    let step_props = StepProps {
        form: form.clone(),
        dispatch: props.dispatch.clone(),
        locations: props.locations.clone(),
        locations_error: props.locations_error.clone(),
    };

    html! {
        <div class="bg-white rounded-lg border border-neutral-200">
            <StepTabs
                current={form.step()}
                on_select={props.dispatch.reform(FormAction::GoTo)}
            />

            <div class="p-6 space-y-6">
                <div>
                    <h2 class="text-lg font-semibold text-neutral-900">
                        {form.step().label()}
                    </h2>
                    <p class="text-sm text-neutral-500">
                        {format!(
                            "Step {} of {}",
                            form.step().index() + 1,
                            FormStep::ALL.len()
                        )}
                    </p>
                </div>

                if let Some(notice) = &props.state.notice {
                    <div class="p-3 rounded-md bg-amber-50 border border-amber-200 \
                                text-sm text-amber-800">
                        {notice}
                    </div>
                }
                if let Some(error) = form.submit_error() {
                    <div class="p-3 rounded-md bg-red-50 border border-red-200 \
                                text-sm text-red-700">
                        {error}
                    </div>
                }

                {steps::render_step(&step_props)}
            </div>

            <StepNav
                step={form.step()}
                is_editing={form.is_editing()}
                is_submitting={form.is_submitting()}
                dispatch={props.dispatch.clone()}
                on_cancel={props.on_cancel.clone()}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<EditorState>, action: FormAction) -> Rc<EditorState> {
        state.reduce(action)
    }

    #[test]
    fn blocked_next_explains_itself() {
        let state = apply(Rc::new(EditorState::default()), FormAction::Next);
        assert_eq!(state.form.step(), FormStep::BasicInfo);
        assert_eq!(
            state.notice.as_deref(),
            Some("Please fix the highlighted fields")
        );

        let state = apply(
            state,
            FormAction::SetText(SpaceField::SpaceName, "WorkHub".into()),
        );
        assert_eq!(state.notice, None);
    }

    #[test]
    fn submit_before_last_step_sends_nothing() {
        let state = apply(Rc::new(EditorState::default()), FormAction::Submit);
        assert_eq!(state.pending, None);
        assert_eq!(
            state.notice.as_deref(),
            Some("Complete the remaining steps before publishing")
        );
    }

    #[test]
    fn failed_submit_keeps_the_draft() {
        let state = apply(
            Rc::new(EditorState::default()),
            FormAction::SetText(SpaceField::SpaceName, "WorkHub Kochi".into()),
        );
        let state = apply(
            state,
            FormAction::SubmitFailed("Space name already taken".into()),
        );
        assert_eq!(state.pending, None);
        assert_eq!(
            state.form.submit_error(),
            Some("Space name already taken")
        );
        assert_eq!(state.form.draft().space_name, "WorkHub Kochi");
    }
}
