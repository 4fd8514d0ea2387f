//! Labelled inputs that report their text on every keystroke and show a
//! field error underneath.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const INPUT_CLASS: &str = "w-full px-3 py-2 border rounded-md shadow-sm bg-white \
                           text-neutral-900 focus:outline-none focus:ring-2 \
                           focus:ring-neutral-500 disabled:opacity-50";

fn input_class(error: &Option<AttrValue>) -> String {
    let border = match error {
        Some(_) => "border-red-400",
        None => "border-neutral-300",
    };
    format!("{INPUT_CLASS} {border}")
}

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub on_blur: Callback<()>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_else(|| AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[derive(Properties, PartialEq)]
struct FieldShellProps {
    id: AttrValue,
    label: AttrValue,
    required: bool,
    error: Option<AttrValue>,
    hint: Option<AttrValue>,
    children: Html,
}

#[function_component]
fn FieldShell(props: &FieldShellProps) -> Html {
    html! {
        <div>
            <label for={props.id.clone()} class="block text-sm font-medium text-neutral-700 mb-1">
                {&props.label}
                if props.required {
                    <span class="text-red-500">{" *"}</span>
                }
            </label>
            {props.children.clone()}
            if let Some(error) = &props.error {
                <p class="mt-1 text-xs text-red-600">{error}</p>
            } else if let Some(hint) = &props.hint {
                <p class="mt-1 text-xs text-neutral-500">{hint}</p>
            }
        </div>
    }
}

#[function_component]
pub fn TextField(props: &FieldProps) -> Html {
    let oninput = props.on_change.reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlInputElement>().value()
    });
    let onblur = props.on_blur.reform(|_: FocusEvent| ());

    html! {
        <FieldShell
            id={props.id.clone()}
            label={props.label.clone()}
            required={props.required}
            error={props.error.clone()}
            hint={props.hint.clone()}
        >
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {oninput}
                {onblur}
                class={input_class(&props.error)}
            />
        </FieldShell>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub on_blur: Callback<()>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or(3)]
    pub rows: u32,
    /// Shown as `n / max` under the field.
    #[prop_or_default]
    pub max_len: Option<usize>,
}

#[function_component]
pub fn TextAreaField(props: &TextAreaProps) -> Html {
    let oninput = props.on_change.reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlTextAreaElement>().value()
    });
    let onblur = props.on_blur.reform(|_: FocusEvent| ());
    let counter = props.max_len.map(|max| {
        AttrValue::from(format!("{} / {max}", props.value.chars().count()))
    });

    html! {
        <FieldShell
            id={props.id.clone()}
            label={props.label.clone()}
            required={props.required}
            error={props.error.clone()}
            hint={counter}
        >
            <textarea
                id={props.id.clone()}
                rows={props.rows.to_string()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
                {onblur}
                class={input_class(&props.error)}
            />
        </FieldShell>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    /// `(value, label)` pairs
    pub options: Vec<(AttrValue, AttrValue)>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub on_blur: Callback<()>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// First, empty option. None means no empty option.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn SelectField(props: &SelectProps) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        e.target_unchecked_into::<HtmlSelectElement>().value()
    });
    let onblur = props.on_blur.reform(|_: FocusEvent| ());

    html! {
        <FieldShell
            id={props.id.clone()}
            label={props.label.clone()}
            required={props.required}
            error={props.error.clone()}
            hint={None::<AttrValue>}
        >
            <select
                id={props.id.clone()}
                disabled={props.disabled}
                {onchange}
                {onblur}
                class={input_class(&props.error)}
            >
                if let Some(placeholder) = &props.placeholder {
                    <option value="" selected={props.value.is_empty()}>
                        {placeholder}
                    </option>
                }
                {for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value}>
                        {label}
                    </option>
                })}
            </select>
        </FieldShell>
    }
}
