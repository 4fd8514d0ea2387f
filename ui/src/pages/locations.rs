use payloads::Location;
use payloads::requests::CreateLocation;
use payloads::space_form::is_http_url;
use payloads::validation::LOCATION_NAME;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::layout::PageHeader;
use crate::components::{
    ActiveBadge, ConfirmationModal, EmptyState, TextAreaField, TextField,
};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_confirmed_delete, use_locations, use_title};
use crate::{State, get_api_client};

#[function_component]
pub fn LocationsPage() -> Html {
    use_title("Locations");
    let (_, dispatch) = use_store::<State>();
    let locations_hook = use_locations();
    let toast = use_toast();

    let on_created = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| dispatch.reduce_mut(|s| s.clear_locations()))
    };

    let deletion = use_confirmed_delete(
        |location: Location| async move {
            get_api_client().delete_location(&location.id).await
        },
        Callback::from(move |location: Location| {
            dispatch.reduce_mut(|s| s.clear_locations());
            toast.success(format!("Deleted {}", location.name));
        }),
    );

    html! {
        <div>
            <PageHeader
                title="Locations"
                description="Cities and areas that spaces belong to"
            />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-1">
                    <CreateLocationForm on_created={on_created} />
                </div>
                <div class="lg:col-span-2">
                    {locations_hook.render("locations", |locations, _, error| html! {
                        <>
                            if let Some(error) = error {
                                <p class="mb-2 text-sm text-red-600">{error}</p>
                            }
                            if locations.is_empty() {
                                <EmptyState
                                    title="No locations available"
                                    description="Add the first city using the form."
                                />
                            } else {
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                    {for locations.iter().map(|location| html! {
                                        <LocationCard
                                            key={location.id.0.clone()}
                                            location={location.clone()}
                                            on_delete={deletion.prompt.clone()}
                                        />
                                    })}
                                </div>
                            }
                        </>
                    })}
                </div>
            </div>

            if let Some(location) = &deletion.target {
                <ConfirmationModal
                    title="Delete Location"
                    message={format!("Delete {}?", location.name)}
                    on_confirm={deletion.confirm.clone()}
                    on_cancel={deletion.cancel.clone()}
                    is_busy={deletion.is_deleting}
                    error={deletion.error.clone()}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LocationCardProps {
    location: Location,
    on_delete: Callback<Location>,
}

#[function_component]
fn LocationCard(props: &LocationCardProps) -> Html {
    let location = &props.location;
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let location = location.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(location.clone()))
    };

    html! {
        <div class="bg-white rounded-lg border border-neutral-200 overflow-hidden">
            if let Some(image) = &location.image {
                <img src={image.clone()} alt={location.name.clone()} class="w-full h-32 object-cover" />
            } else {
                <div class="w-full h-32 bg-neutral-100 flex items-center justify-center \
                            text-3xl font-bold text-neutral-300">
                    {location.name.chars().next().map(String::from).unwrap_or_default()}
                </div>
            }
            <div class="p-4">
                <div class="flex items-center justify-between">
                    <h3 class="font-semibold text-neutral-900">{&location.name}</h3>
                    <ActiveBadge is_active={location.is_active} />
                </div>
                if let Some(description) = &location.description {
                    <p class="mt-1 text-sm text-neutral-600">{description}</p>
                }
                <div class="mt-3 text-right">
                    <button
                        onclick={on_delete}
                        class="text-sm text-red-600 hover:text-red-800 font-medium"
                    >
                        {"Delete"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CreateLocationFormProps {
    on_created: Callback<Location>,
}

#[function_component]
fn CreateLocationForm(props: &CreateLocationFormProps) -> Html {
    let toast = use_toast();
    let name = use_state(String::new);
    let image = use_state(String::new);
    let description = use_state(String::new);
    let is_active = use_state(|| true);
    let name_error = use_state(|| None::<String>);
    let image_error = use_state(|| None::<String>);
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let image = image.clone();
        let description = description.clone();
        let is_active = is_active.clone();
        let name_error = name_error.clone();
        let image_error = image_error.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_saving {
                return;
            }

            name_error.set(LOCATION_NAME.check(&name).err());
            let image_url = image.trim().to_string();
            let bad_image = !image_url.is_empty() && !is_http_url(&image_url);
            image_error.set(
                bad_image.then(|| "Image must be an http(s) URL".to_string()),
            );
            if LOCATION_NAME.check(&name).is_err() || bad_image {
                return;
            }

            let details = CreateLocation {
                name: name.trim().to_string(),
                is_active: *is_active,
                image: (!image_url.is_empty()).then_some(image_url),
                description: Some(description.trim().to_string())
                    .filter(|d| !d.is_empty()),
            };
            let name = name.clone();
            let image = image.clone();
            let description = description.clone();
            let error_message = error_message.clone();
            let is_saving = is_saving.clone();
            let on_created = on_created.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_saving.set(true);
                error_message.set(None);
                match get_api_client().create_location(&details).await {
                    Ok(location) => {
                        toast.success(format!("Added {}", location.name));
                        name.set(String::new());
                        image.set(String::new());
                        description.set(String::new());
                        on_created.emit(location);
                    }
                    Err(e) => error_message.set(Some(e.to_string())),
                }
                is_saving.set(false);
            });
        })
    };

    let setter = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |value: String| handle.set(value))
    };
    let on_toggle_active = {
        let is_active = is_active.clone();
        Callback::from(move |_: Event| is_active.set(!*is_active))
    };

    html! {
        <form
            onsubmit={on_submit}
            novalidate=true
            class="bg-white rounded-lg border border-neutral-200 p-5 space-y-4"
        >
            <h2 class="text-base font-semibold text-neutral-900">{"Add Location"}</h2>
            if let Some(error) = &*error_message {
                <div class="p-3 rounded-md bg-red-50 border border-red-200 text-sm text-red-700">
                    {error}
                </div>
            }
            <TextField
                id="location-name"
                label="Name"
                required=true
                placeholder="e.g. Kochi"
                value={(*name).clone()}
                on_change={setter(&name)}
                error={(*name_error).clone().map(AttrValue::from)}
            />
            <TextField
                id="location-image"
                label="Image URL"
                input_type="url"
                placeholder="https://..."
                value={(*image).clone()}
                on_change={setter(&image)}
                error={(*image_error).clone().map(AttrValue::from)}
            />
            <TextAreaField
                id="location-description"
                label="Description"
                rows={2}
                value={(*description).clone()}
                on_change={setter(&description)}
            />
            <label class="flex items-center gap-2 text-sm text-neutral-700">
                <input type="checkbox" checked={*is_active} onchange={on_toggle_active} />
                {"Active"}
            </label>
            <button
                type="submit"
                disabled={*is_saving}
                class="w-full py-2 px-4 text-sm font-medium rounded-md text-white \
                       bg-neutral-900 hover:bg-neutral-800 disabled:opacity-50"
            >
                {if *is_saving { "Saving..." } else { "Add Location" }}
            </button>
        </form>
    }
}
