use payloads::space_form::Submission;
use payloads::{Space, SpaceId};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::layout::PageHeader;
use crate::components::{EditorState, FormAction, SpaceFormView};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_fetch, use_locations, use_push_route, use_title};
use crate::{Route, State, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Editing an existing space; None creates a new one.
    #[prop_or_default]
    pub space_id: Option<SpaceId>,
}

#[function_component]
pub fn SpaceEditorPage(props: &Props) -> Html {
    match &props.space_id {
        None => html! { <SpaceEditor /> },
        Some(space_id) => html! { <LoadSpace space_id={space_id.clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
struct LoadSpaceProps {
    space_id: SpaceId,
}

/// Fetch the space, then hand it to the editor.
#[function_component]
fn LoadSpace(props: &LoadSpaceProps) -> Html {
    let space_hook = use_fetch(props.space_id.clone(), |space_id| {
        let space_id = space_id.clone();
        async move { get_api_client().get_space(&space_id).await }
    });

    space_hook.render("space", |space, _, _| {
        html! { <SpaceEditor space={space.clone()} /> }
    })
}

#[derive(Properties, PartialEq)]
struct SpaceEditorProps {
    #[prop_or_default]
    space: Option<Space>,
}

#[function_component]
fn SpaceEditor(props: &SpaceEditorProps) -> Html {
    let title = match &props.space {
        Some(space) => format!("Edit {}", space.space_name),
        None => "Add Space".to_string(),
    };
    use_title(&title);

    let state = use_reducer(EditorState::default);
    let (_, store) = use_store::<State>();
    let locations_hook = use_locations();
    let toast = use_toast();
    let push_route = use_push_route();

    // Seed the form once per loaded space.
    {
        let state = state.clone();
        use_effect_with(props.space.clone(), move |space| {
            if let Some(space) = space {
                state.dispatch(FormAction::Load(Box::new(space.clone())));
            }
        });
    }

    // A validated submission is sent exactly once, then cleared.
    {
        let state = state.clone();
        let push_route = push_route.clone();
        use_effect_with(state.pending.clone(), move |pending| {
            if let Some(submission) = pending.clone() {
                yew::platform::spawn_local(async move {
                    match get_api_client().submit_space(&submission).await {
                        Ok(space) => {
                            let verb = match submission {
                                Submission::Create(_) => "Created",
                                Submission::Update(..) => "Updated",
                            };
                            tracing::info!("{verb} space {}", space.id);
                            state.dispatch(FormAction::SubmitSucceeded);
                            store.reduce_mut(|s| s.spaces_changed());
                            toast.success(format!("{verb} {}", space.space_name));
                            push_route.emit(Route::Spaces);
                        }
                        Err(e) => {
                            state.dispatch(FormAction::SubmitFailed(e.to_string()));
                        }
                    }
                });
            }
        });
    }

    let dispatch = {
        let state = state.clone();
        Callback::from(move |action| state.dispatch(action))
    };
    let on_cancel = push_route.reform(|_| Route::Spaces);

    html! {
        <div>
            <PageHeader
                title={title.clone()}
                description="Fill in each step, then publish from the last one"
            />
            <SpaceFormView
                state={(*state).clone()}
                {dispatch}
                locations={locations_hook.data.clone()}
                locations_error={locations_hook.error.clone().map(AttrValue::from)}
                {on_cancel}
            />
        </div>
    }
}
