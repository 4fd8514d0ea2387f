use payloads::requests::ChangePassword;
use payloads::validation::{
    FieldErrors, PasswordField, validate_change_password,
};
use yew::prelude::*;

use crate::components::TextField;
use crate::components::layout::PageHeader;
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::{use_session, use_title};

#[function_component]
pub fn SettingsPage() -> Html {
    use_title("Settings");
    let session = use_session();

    html! {
        <div>
            <PageHeader title="Settings" description="Your account" />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                if let Some(session) = session {
                    <div class="bg-white rounded-lg border border-neutral-200 p-5">
                        <h2 class="text-base font-semibold text-neutral-900 mb-4">{"Profile"}</h2>
                        <dl class="grid grid-cols-3 gap-y-2 text-sm">
                            <dt class="text-neutral-500">{"Name"}</dt>
                            <dd class="col-span-2">{&session.name}</dd>
                            <dt class="text-neutral-500">{"Email"}</dt>
                            <dd class="col-span-2">{&session.email}</dd>
                            <dt class="text-neutral-500">{"Role"}</dt>
                            <dd class="col-span-2">{session.role.label()}</dd>
                        </dl>
                    </div>
                }
                <ChangePasswordForm />
            </div>
        </div>
    }
}

#[function_component]
fn ChangePasswordForm() -> Html {
    let toast = use_toast();
    let current = use_state(String::new);
    let new = use_state(String::new);
    let confirm = use_state(String::new);
    let show_passwords = use_state(|| false);
    let errors = use_state(FieldErrors::<PasswordField>::new);
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    let on_submit = {
        let current = current.clone();
        let new = new.clone();
        let confirm = confirm.clone();
        let errors = errors.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_saving {
                return;
            }

            let field_errors = validate_change_password(&current, &new, &confirm);
            let invalid = !field_errors.is_empty();
            errors.set(field_errors);
            if invalid {
                return;
            }

            let details = ChangePassword {
                current_password: (*current).clone(),
                new_password: (*new).clone(),
            };
            let current = current.clone();
            let new = new.clone();
            let confirm = confirm.clone();
            let error_message = error_message.clone();
            let is_saving = is_saving.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_saving.set(true);
                error_message.set(None);
                match get_api_client().change_password(&details).await {
                    Ok(()) => {
                        current.set(String::new());
                        new.set(String::new());
                        confirm.set(String::new());
                        toast.success("Password changed");
                    }
                    Err(e) => error_message.set(Some(e.to_string())),
                }
                is_saving.set(false);
            });
        })
    };

    let input_type = if *show_passwords { "text" } else { "password" };
    let field = |id: &'static str,
                 label: &'static str,
                 handle: &UseStateHandle<String>,
                 which: PasswordField| {
        let on_change = {
            let handle = handle.clone();
            Callback::from(move |value: String| handle.set(value))
        };
        html! {
            <TextField
                {id}
                {label}
                {input_type}
                required=true
                value={(**handle).clone()}
                {on_change}
                error={errors.get(&which).map(|m| AttrValue::from(m.clone()))}
                disabled={*is_saving}
            />
        }
    };
    let on_toggle_show = {
        let show_passwords = show_passwords.clone();
        Callback::from(move |_: MouseEvent| show_passwords.set(!*show_passwords))
    };

    html! {
        <form
            onsubmit={on_submit}
            novalidate=true
            class="bg-white rounded-lg border border-neutral-200 p-5 space-y-4"
        >
            <div class="flex items-center justify-between">
                <h2 class="text-base font-semibold text-neutral-900">{"Change Password"}</h2>
                <button
                    type="button"
                    onclick={on_toggle_show}
                    class="text-sm text-neutral-600 hover:text-neutral-900"
                >
                    {if *show_passwords { "Hide passwords" } else { "Show passwords" }}
                </button>
            </div>
            if let Some(error) = &*error_message {
                <div class="p-3 rounded-md bg-red-50 border border-red-200 text-sm text-red-700">
                    {error}
                </div>
            }
            {field("current-password", "Current password", &current, PasswordField::Current)}
            {field("new-password", "New password", &new, PasswordField::New)}
            <p class="text-xs text-neutral-500 -mt-2">
                {"At least 8 characters with upper and lower case letters, a number and one of @$!%*?&"}
            </p>
            {field("confirm-password", "Confirm new password", &confirm, PasswordField::Confirm)}
            <button
                type="submit"
                disabled={*is_saving}
                class="w-full py-2 px-4 text-sm font-medium rounded-md text-white \
                       bg-neutral-900 hover:bg-neutral-800 disabled:opacity-50"
            >
                {if *is_saving { "Saving..." } else { "Update Password" }}
            </button>
        </form>
    }
}
