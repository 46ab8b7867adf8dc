//! Root application component with routing and the session handle.
//!
//! DESIGN
//! ======
//! The session is created here and handed down as props: writers get the
//! `SessionHandle`, the navbar and guards get a read-only `Signal<Session>`.
//! Every route is wrapped in a `RouteGuard`, including the fallback, which is
//! treated as protected.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::revoke;
use crate::components::navbar::Navbar;
use crate::components::route_guard::RouteGuard;
use crate::components::sidebar::Sidebar;
use crate::config::ConsoleConfig;
use crate::net::api::HttpCredentialService;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, section::SectionPage, signup::SignUpPage};
use crate::routes::{AppRoute, RouteAccess};
use crate::state::session::{Session, SessionHandle};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ConsoleConfig::from_build_env();
    let session = SessionHandle::new(&config);
    let reader = session.reader();

    // Restore after the first render so the initial frame shows the loading state.
    Effect::new(move |_| session.initialize());

    let on_logout = Callback::new(move |()| {
        let previous = session.logout();
        leptos::task::spawn_local(async move {
            revoke(&HttpCredentialService::new(config), previous).await;
        });
    });

    view! {
        <Title text="Library Management"/>

        <Router>
            <Navbar session=reader on_logout/>
            <main class="app-main">
                <Routes fallback=move || {
                    view! {
                        <RouteGuard session=reader access=RouteAccess::Protected>
                            <p class="not-found">"Page not found."</p>
                        </RouteGuard>
                    }
                }>
                    <Route
                        path=StaticSegment("")
                        view=move || {
                            view! {
                                <RouteGuard session=reader access={AppRoute::Home.access()}>
                                    <LoginPage session config/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=move || {
                            view! {
                                <RouteGuard session=reader access={AppRoute::Login.access()}>
                                    <LoginPage session config/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=move || {
                            view! {
                                <RouteGuard session=reader access={AppRoute::SignUp.access()}>
                                    <SignUpPage config/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=move || {
                            view! {
                                <ProtectedScreen session=reader>
                                    <DashboardPage session config/>
                                </ProtectedScreen>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("book"))
                        view=move || section(reader, AppRoute::Books)
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("reader"))
                        view=move || section(reader, AppRoute::Readers)
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("issuebook"))
                        view=move || section(reader, AppRoute::IssueBook)
                    />
                </Routes>
            </main>
        </Router>
    }
}

fn section(session: Signal<Session>, route: AppRoute) -> impl IntoView {
    view! {
        <ProtectedScreen session>
            <SectionPage route/>
        </ProtectedScreen>
    }
}

/// Admin layout behind the protected guard: sidebar plus page content.
#[component]
fn ProtectedScreen(session: Signal<Session>, children: ChildrenFn) -> impl IntoView {
    view! {
        <RouteGuard session access=RouteAccess::Protected>
            <div class="admin-layout">
                <Sidebar/>
                <section class="admin-layout__content">{children()}</section>
            </div>
        </RouteGuard>
    }
}
