//! Top navigation bar with session-aware actions.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{AppRoute, DASHBOARD_PATH, LOGIN_PATH};
use crate::state::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Login,
    Dashboard,
    Logout,
}

/// Buttons shown for `path`. The login and sign-up screens show none, and
/// nothing is offered until the session has been restored.
pub fn navbar_actions(path: &str, session: &Session) -> Vec<NavAction> {
    let on_auth_screen = matches!(AppRoute::from_path(path), Some(AppRoute::Login | AppRoute::SignUp));
    if on_auth_screen || session.is_authenticating() {
        return Vec::new();
    }
    if session.is_logged_in() {
        vec![NavAction::Dashboard, NavAction::Logout]
    } else {
        vec![NavAction::Login]
    }
}

#[component]
pub fn Navbar(session: Signal<Session>, on_logout: Callback<()>) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let logout = move |_| {
        on_logout.run(());
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Library Management"</span>
            <div class="navbar__actions">
                {move || {
                    navbar_actions(&location.pathname.get(), &session.get())
                        .into_iter()
                        .map(|action| match action {
                            NavAction::Login => {
                                view! { <a class="btn btn--primary" href=LOGIN_PATH>"Login"</a> }.into_any()
                            }
                            NavAction::Dashboard => {
                                view! { <a class="btn" href=DASHBOARD_PATH>"Dashboard"</a> }.into_any()
                            }
                            NavAction::Logout => {
                                let logout = logout.clone();
                                view! { <button class="btn" on:click=logout>"Logout"</button> }.into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </nav>
    }
}
