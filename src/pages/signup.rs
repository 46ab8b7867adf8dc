//! Staff account registration page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ConsoleConfig;
use crate::error::AuthError;
use crate::net::api::{CredentialService, HttpCredentialService};
use crate::net::types::{SIGN_UP_ROLE, SignUpRequest};
use crate::pages::login::{email_error, password_error};
use crate::routes::LOGIN_PATH;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpFormErrors {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

/// Raw sign-up form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn validate_sign_up_input(form: &SignUpForm) -> Result<SignUpRequest, SignUpFormErrors> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    let confirm_password = if form.confirm_password.is_empty() {
        Some("Please confirm your password")
    } else if form.confirm_password != form.password {
        Some("Passwords do not match")
    } else {
        None
    };
    let errors = SignUpFormErrors {
        first_name: first_name.is_empty().then_some("First Name is required"),
        last_name: last_name.is_empty().then_some("Last Name is required"),
        email: email_error(email),
        password: password_error(&form.password),
        confirm_password,
    };
    if errors != SignUpFormErrors::default() {
        return Err(errors);
    }
    Ok(SignUpRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        role: SIGN_UP_ROLE.to_owned(),
    })
}

/// Message shown when registration fails. A message from the server, such
/// as a duplicate email, is shown as-is.
pub fn sign_up_failure_message(error: &AuthError) -> String {
    match error {
        AuthError::Rejected(message) => format!("Error: {message}"),
        AuthError::Network(_) => error.user_message().to_owned(),
        _ => "Signup failed. Please try again.".to_owned(),
    }
}

#[component]
pub fn SignUpPage(config: ConsoleConfig) -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(SignUpForm::default());
    let errors = RwSignal::new(SignUpFormErrors::default());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_sign_up_input(&form.get_untracked()) {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(SignUpFormErrors::default());
        message.set(None);
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let service = HttpCredentialService::new(config);
            match service.sign_up(&request).await {
                Ok(account) => {
                    log::info!("signup: account {} created", account.id);
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("signup: failed: {e}");
                    let _ = message.try_set(Some(sign_up_failure_message(&e)));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let field = move |placeholder: &'static str,
                      kind: &'static str,
                      read: fn(&SignUpForm) -> String,
                      write: fn(&mut SignUpForm, String),
                      error: fn(&SignUpFormErrors) -> Option<&'static str>| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(read)
                on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            />
            {move || errors.with(error).map(|m| view! { <p class="form-error">{m}</p> })}
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {field("First name", "text", |f| f.first_name.clone(), |f, v| f.first_name = v, |e| e.first_name)}
                    {field("Last name", "text", |f| f.last_name.clone(), |f, v| f.last_name = v, |e| e.last_name)}
                    {field("Email", "email", |f| f.email.clone(), |f, v| f.email = v, |e| e.email)}
                    {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v, |e| e.password)}
                    {field(
                        "Confirm password",
                        "password",
                        |f| f.confirm_password.clone(),
                        |f, v| f.confirm_password = v,
                        |e| e.confirm_password,
                    )}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || message.get().is_some()>
                    <p class="login-message">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
