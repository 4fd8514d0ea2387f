use payloads::requests::LoginCredentials;
use payloads::validation::{
    FieldErrors, LoginField, validate_login, validate_login_field,
};
use std::collections::BTreeSet;
use yew::prelude::*;
use yewdux::prelude::*;

use super::{ErrorPanel, TextField};
use crate::{AuthState, State, get_api_client};

/// Seeded by the local mock API.
const DEV_EMAIL: &str = "admin@cowork.test";
const DEV_PASSWORD: &str = "Admin@123";

#[derive(Clone, Default, PartialEq)]
struct Draft {
    email: String,
    password: String,
}

impl Draft {
    fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    #[prop_or_default]
    pub show_dev_credentials: bool,
}

/// Email/password sign-in. A successful login only updates the global auth
/// state; the login page reacts to that and leaves.
#[function_component]
pub fn LoginForm(props: &LoginFormProps) -> Html {
    let (_, dispatch) = use_store::<State>();
    let draft = use_state(Draft::default);
    let touched = use_state(BTreeSet::<LoginField>::new);
    let errors = use_state(FieldErrors::<LoginField>::new);
    let server_error = use_state(|| None::<String>);
    let signing_in = use_state(|| false);

    // Touched fields re-validate on every edit, untouched ones wait for blur.
    let revalidate = {
        let errors = errors.clone();
        move |field: LoginField, value: &str| {
            let mut next = (*errors).clone();
            match validate_login_field(field, value) {
                Some(message) => next.insert(field, message),
                None => next.remove(&field),
            };
            errors.set(next);
        }
    };

    let on_edit = |field: LoginField| {
        let draft = draft.clone();
        let touched = touched.clone();
        let revalidate = revalidate.clone();
        Callback::from(move |value: String| {
            if touched.contains(&field) {
                revalidate(field, &value);
            }
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
        })
    };

    let on_blur = |field: LoginField| {
        let draft = draft.clone();
        let touched = touched.clone();
        let revalidate = revalidate.clone();
        Callback::from(move |_| {
            let mut next = (*touched).clone();
            next.insert(field);
            touched.set(next);
            revalidate(field, draft.get(field));
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let touched = touched.clone();
        let errors = errors.clone();
        let server_error = server_error.clone();
        let signing_in = signing_in.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *signing_in {
                return;
            }
            let found = validate_login(&draft.email, &draft.password);
            touched.set([LoginField::Email, LoginField::Password].into());
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());

            let credentials = LoginCredentials {
                email: draft.email.trim().to_string(),
                password: draft.password.clone(),
            };
            let dispatch = dispatch.clone();
            let server_error = server_error.clone();
            let signing_in = signing_in.clone();

            signing_in.set(true);
            server_error.set(None);
            yew::platform::spawn_local(async move {
                match get_api_client().login(&credentials).await {
                    Ok(session) => {
                        tracing::info!("signed in as {}", session.email);
                        dispatch.reduce_mut(|s| {
                            s.auth_state = AuthState::LoggedIn(session)
                        });
                    }
                    Err(e) => {
                        tracing::debug!("login rejected: {e}");
                        server_error.set(Some(e.to_string()));
                    }
                }
                signing_in.set(false);
            });
        })
    };

    let use_dev_credentials = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(Draft {
                email: DEV_EMAIL.into(),
                password: DEV_PASSWORD.into(),
            })
        })
    };

    let error_for =
        |field: LoginField| errors.get(&field).cloned().map(AttrValue::from);

    html! {
        <div class="w-full max-w-md rounded-lg bg-white p-8 shadow-md">
            <h1 class="text-2xl font-bold text-center text-neutral-900">{"CoWork Kerala"}</h1>
            <p class="mt-1 mb-8 text-center text-neutral-600">{"Sign in to the admin panel"}</p>

            <form onsubmit={on_submit} class="space-y-5" novalidate=true>
                if let Some(error) = &*server_error {
                    <ErrorPanel message={error.clone()} />
                }
                <TextField
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="admin@example.com"
                    value={draft.email.clone()}
                    on_change={on_edit(LoginField::Email)}
                    on_blur={on_blur(LoginField::Email)}
                    error={error_for(LoginField::Email)}
                    disabled={*signing_in}
                />
                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    value={draft.password.clone()}
                    on_change={on_edit(LoginField::Password)}
                    on_blur={on_blur(LoginField::Password)}
                    error={error_for(LoginField::Password)}
                    disabled={*signing_in}
                />
                <button
                    type="submit"
                    disabled={*signing_in}
                    class="w-full py-2 rounded-md text-sm font-medium text-white \
                           bg-neutral-900 hover:bg-neutral-800 disabled:opacity-50"
                >
                    {if *signing_in { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            if props.show_dev_credentials {
                <div class="mt-6 rounded-md bg-neutral-50 p-3 text-center text-sm text-neutral-600">
                    <p>{format!("Development credentials: {DEV_EMAIL} / {DEV_PASSWORD}")}</p>
                    <button
                        type="button"
                        onclick={use_dev_credentials}
                        class="mt-1 font-medium text-neutral-900 underline"
                    >
                        {"Fill in"}
                    </button>
                </div>
            }
        </div>
    }
}
