use payloads::space_form::{FormStep, MAX_IMAGES, SpaceField};
use payloads::{AMENITY_OPTIONS, SpaceCategory, SpaceStatus, SpaceType};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{FormAction, StepProps};
use crate::components::{SelectField, TextAreaField, TextField};
use crate::hooks::FetchState;

pub fn render_step(props: &StepProps) -> Html {
    match props.form.step() {
        FormStep::BasicInfo => html! { <BasicInfoStep ..props.clone() /> },
        FormStep::Amenities => html! { <AmenitiesStep ..props.clone() /> },
        FormStep::Pricing => html! { <PricingStep ..props.clone() /> },
        FormStep::Media => html! { <MediaStep ..props.clone() /> },
        FormStep::Location => html! { <LocationStep ..props.clone() /> },
        FormStep::Contact => html! { <ContactStep ..props.clone() /> },
        FormStep::Additional => html! { <AdditionalStep ..props.clone() /> },
    }
}

fn field_id(field: SpaceField) -> AttrValue {
    AttrValue::from(format!("space-{}", field.key().replace('.', "-")))
}

/// Value, error and callbacks of one text field.
struct Binding {
    id: AttrValue,
    value: AttrValue,
    error: Option<AttrValue>,
    on_change: Callback<String>,
    on_blur: Callback<()>,
}

fn bind(props: &StepProps, field: SpaceField) -> Binding {
    Binding {
        id: field_id(field),
        value: AttrValue::from(
            props.form.draft().text(field).unwrap_or_default().to_string(),
        ),
        error: props.form.error(field).map(|e| AttrValue::from(e.to_string())),
        on_change: props
            .dispatch
            .reform(move |value| FormAction::SetText(field, value)),
        on_blur: props.dispatch.reform(move |_| FormAction::Blur(field)),
    }
}

fn text_input(
    props: &StepProps,
    field: SpaceField,
    label: &'static str,
    placeholder: &'static str,
    required: bool,
) -> Html {
    typed_input(props, field, label, placeholder, required, "text")
}

fn typed_input(
    props: &StepProps,
    field: SpaceField,
    label: &'static str,
    placeholder: &'static str,
    required: bool,
    input_type: &'static str,
) -> Html {
    let b = bind(props, field);
    html! {
        <TextField
            id={b.id}
            {label}
            {placeholder}
            {required}
            {input_type}
            value={b.value}
            error={b.error}
            on_change={b.on_change}
            on_blur={b.on_blur}
        />
    }
}

fn options<T: Copy>(
    all: &[T],
    value: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> Vec<(AttrValue, AttrValue)> {
    all.iter()
        .map(|&o| (AttrValue::from(value(o)), AttrValue::from(label(o))))
        .collect()
}

fn select_input(
    props: &StepProps,
    field: SpaceField,
    label: &'static str,
    choices: Vec<(AttrValue, AttrValue)>,
    placeholder: Option<&'static str>,
) -> Html {
    let b = bind(props, field);
    html! {
        <SelectField
            id={b.id}
            {label}
            required=true
            options={choices}
            placeholder={placeholder.map(AttrValue::from)}
            value={b.value}
            error={b.error}
            on_change={b.on_change}
            on_blur={b.on_blur}
        />
    }
}

#[function_component]
fn BasicInfoStep(props: &StepProps) -> Html {
    let short = bind(props, SpaceField::ShortDescription);
    let long = bind(props, SpaceField::LongDescription);

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <div class="md:col-span-2">
                {text_input(props, SpaceField::SpaceName, "Space name", "e.g. WorkHub Kochi", true)}
            </div>
            {select_input(
                props,
                SpaceField::SpaceType,
                "Space type",
                options(SpaceType::ALL, |t| t.as_str(), |t| t.label()),
                Some("Select a type"),
            )}
            <CitySelect ..props.clone() />
            {select_input(
                props,
                SpaceField::SpaceCategory,
                "Category",
                options(SpaceCategory::ALL, |c| c.as_str(), |c| c.label()),
                Some("Select a category"),
            )}
            <div class="md:col-span-2">
                <TextAreaField
                    id={short.id}
                    label="Short description"
                    required=true
                    rows={2}
                    max_len={200_usize}
                    value={short.value}
                    error={short.error}
                    on_change={short.on_change}
                    on_blur={short.on_blur}
                />
            </div>
            <div class="md:col-span-2">
                <TextAreaField
                    id={long.id}
                    label="Long description"
                    required=true
                    rows={6}
                    max_len={1000_usize}
                    value={long.value}
                    error={long.error}
                    on_change={long.on_change}
                    on_blur={long.on_blur}
                />
            </div>
        </div>
    }
}

/// City options come from the locations API.
#[function_component]
fn CitySelect(props: &StepProps) -> Html {
    let b = bind(props, SpaceField::City);

    let (choices, placeholder, hint) = match &props.locations {
        FetchState::NotFetched => match &props.locations_error {
            Some(error) => (Vec::new(), "Locations unavailable", Some(error.clone())),
            None => (Vec::new(), "Loading locations...", None),
        },
        FetchState::Fetched(locations) if locations.is_empty() => (
            Vec::new(),
            "No locations available",
            Some(AttrValue::from("Add a location before creating spaces")),
        ),
        FetchState::Fetched(locations) => (
            locations
                .iter()
                .map(|l| {
                    let label = match l.is_active {
                        true => l.name.clone(),
                        false => format!("{} (inactive)", l.name),
                    };
                    (AttrValue::from(l.id.0.clone()), AttrValue::from(label))
                })
                .collect(),
            "Select a city",
            None,
        ),
    };
    let disabled = choices.is_empty();

    html! {
        <div>
            <SelectField
                id={b.id}
                label="City"
                required=true
                {disabled}
                options={choices}
                placeholder={Some(AttrValue::from(placeholder))}
                value={b.value}
                error={b.error}
                on_change={b.on_change}
                on_blur={b.on_blur}
            />
            if let Some(hint) = hint {
                <p class="mt-1 text-xs text-neutral-500">{hint}</p>
            }
        </div>
    }
}

#[function_component]
fn AmenitiesStep(props: &StepProps) -> Html {
    let selected = &props.form.draft().amenities;
    let error = props.form.error(SpaceField::Amenities);

    html! {
        <div>
            <p class="text-sm text-neutral-600 mb-4">
                {format!("{} selected", selected.len())}
            </p>
            <div class="grid grid-cols-2 md:grid-cols-3 gap-3">
                {for AMENITY_OPTIONS.iter().map(|&amenity| {
                    let checked = selected.iter().any(|a| a == amenity);
                    let onchange = props.dispatch.reform(move |_: Event| {
                        FormAction::ToggleAmenity(amenity.to_string())
                    });
                    html! {
                        <label
                            key={amenity}
                            class={classes!(
                                "flex", "items-center", "gap-2", "p-3", "rounded-md",
                                "border", "cursor-pointer", "text-sm",
                                if checked { "border-neutral-900 bg-neutral-50" } else { "border-neutral-200" }
                            )}
                        >
                            <input type="checkbox" {checked} {onchange} />
                            {amenity}
                        </label>
                    }
                })}
            </div>
            if let Some(error) = error {
                <p class="mt-2 text-xs text-red-600">{error}</p>
            }
        </div>
    }
}

#[function_component]
fn PricingStep(props: &StepProps) -> Html {
    let coworking = props.form.draft().is_coworking();
    let price = |field, label| {
        typed_input(props, field, label, "₹", false, "number")
    };

    html! {
        <div class="space-y-4">
            <p class="text-sm text-neutral-600">
                {"Monthly prices in rupees unless noted. Leave blank if not offered."}
            </p>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {typed_input(props, SpaceField::HotDesk, "Hot desk / month", "₹", coworking, "number")}
                {price(SpaceField::DedicatedDesk, "Dedicated desk / month")}
                {price(SpaceField::CabinSeat, "Cabin seat / month")}
                {typed_input(props, SpaceField::TotalCapacity, "Total capacity (seats)", "e.g. 50", coworking, "number")}
                {price(SpaceField::DayPass, "Day pass / day")}
                {price(SpaceField::MeetingRoom, "Meeting room / hour")}
                {price(SpaceField::PrivateOffice, "Private office / month")}
            </div>
        </div>
    }
}

#[function_component]
fn MediaStep(props: &StepProps) -> Html {
    let url_ref = use_node_ref();
    let images = &props.form.draft().images;
    let error = props.form.error(SpaceField::Images);
    let full = images.len() >= MAX_IMAGES;

    let on_add = {
        let url_ref = url_ref.clone();
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = url_ref.cast::<HtmlInputElement>() {
                dispatch.emit(FormAction::AddImage(input.value()));
                input.set_value("");
            }
        })
    };

    html! {
        <div class="space-y-4">
            <div class="flex gap-2">
                <input
                    ref={url_ref}
                    type="url"
                    placeholder="https://..."
                    disabled={full}
                    class="flex-1 px-3 py-2 border border-neutral-300 rounded-md \
                           shadow-sm focus:outline-none focus:ring-2 focus:ring-neutral-500"
                />
                <button
                    type="button"
                    onclick={on_add}
                    disabled={full}
                    class="px-4 py-2 text-sm font-medium rounded-md text-white \
                           bg-neutral-900 hover:bg-neutral-800 disabled:opacity-50"
                >
                    {"Add image"}
                </button>
            </div>
            <p class="text-xs text-neutral-500">
                {format!("{} / {MAX_IMAGES} images", images.len())}
            </p>
            if let Some(error) = error {
                <p class="text-xs text-red-600">{error}</p>
            }

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {for images.iter().enumerate().map(|(i, url)| {
                    let on_remove = props
                        .dispatch
                        .reform(move |_: MouseEvent| FormAction::RemoveImage(i));
                    html! {
                        <div key={format!("{i}-{url}")} class="relative group">
                            <img
                                src={url.clone()}
                                alt={format!("Image {}", i + 1)}
                                class="w-full h-28 object-cover rounded-md border border-neutral-200"
                            />
                            <button
                                type="button"
                                onclick={on_remove}
                                class="absolute top-1 right-1 px-2 py-0.5 text-xs rounded \
                                       bg-white/90 text-red-600 hover:bg-white"
                            >
                                {"Remove"}
                            </button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[function_component]
fn LocationStep(props: &StepProps) -> Html {
    let address = bind(props, SpaceField::Address);

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <div class="md:col-span-2">
                <TextAreaField
                    id={address.id}
                    label="Address"
                    required=true
                    rows={2}
                    value={address.value}
                    error={address.error}
                    on_change={address.on_change}
                    on_blur={address.on_blur}
                />
            </div>
            {text_input(props, SpaceField::Pincode, "Pincode", "6 digits", true)}
            <div></div>
            {typed_input(props, SpaceField::Latitude, "Latitude", "e.g. 9.9816", false, "number")}
            {typed_input(props, SpaceField::Longitude, "Longitude", "e.g. 76.2999", false, "number")}
        </div>
    }
}

#[function_component]
fn ContactStep(props: &StepProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <div class="md:col-span-2">
                {text_input(props, SpaceField::ContactName, "Contact name", "Who handles enquiries", true)}
            </div>
            {typed_input(props, SpaceField::ContactEmail, "Email", "name@example.com", true, "email")}
            {typed_input(props, SpaceField::ContactPhone, "Phone", "+91 98765 43210", true, "tel")}
        </div>
    }
}

#[function_component]
fn AdditionalStep(props: &StepProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {text_input(props, SpaceField::OperatingHours, "Operating hours", "e.g. Mon-Sat 9am-9pm", false)}
            {select_input(
                props,
                SpaceField::Status,
                "Status",
                options(SpaceStatus::ALL, |s| s.as_str(), |s| s.label()),
                None,
            )}
        </div>
    }
}
