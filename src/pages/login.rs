//! Staff login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only screen that starts a session. Validation happens locally before
//! the identity endpoint is contacted; the session is written before the
//! redirect to the dashboard so the guard lets the navigation through.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::sign_in;
use crate::config::ConsoleConfig;
use crate::net::api::HttpCredentialService;
use crate::net::types::Credentials;
use crate::routes::DASHBOARD_PATH;
use crate::state::session::SessionHandle;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub(crate) fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub(crate) fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !looks_like_email(email) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

pub(crate) fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

/// Validate the login form. The email is trimmed; the password is taken as typed.
pub fn validate_login_input(email: &str, password: &str) -> Result<Credentials, LoginFormErrors> {
    let email = email.trim();
    let errors = LoginFormErrors { email: email_error(email), password: password_error(password) };
    if errors == LoginFormErrors::default() {
        Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

#[component]
pub fn LoginPage(session: SessionHandle, config: ConsoleConfig) -> impl IntoView {
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginFormErrors::default());
    let message = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(LoginFormErrors::default());
        message.set(None);
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let service = HttpCredentialService::new(config);
            match sign_in(&service, &credentials, move |token| session.login(token)).await {
                Ok(()) => navigate(DASHBOARD_PATH, NavigateOptions::default()),
                Err(e) => {
                    let _ = message.try_set(Some(e.user_message()));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Literary Haven"</h1>
                <p class="login-card__subtitle">"Staff sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="john.doe@bookclub.lk"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            errors.update(|e| e.email = None);
                        }
                    />
                    {move || errors.get().email.map(|m| view! { <p class="form-error">{m}</p> })}
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            errors.update(|e| e.password = None);
                        }
                    />
                    {move || errors.get().password.map(|m| view! { <p class="form-error">{m}</p> })}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || message.get().is_some()>
                    <p class="login-message">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__footer">
                    "Don't have an account? "
                    <a href="/signup">"Create new account"</a>
                </p>
            </div>
        </div>
    }
}
