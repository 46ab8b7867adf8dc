//! Route guard wrapper for page content.
//!
//! Children are only constructed once the guard allows the route, so a
//! protected page never mounts or starts fetching for a signed-out visitor.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::routes::RouteAccess;
use crate::state::session::Session;
use crate::util::guard::{GuardDecision, decide};

#[component]
pub fn RouteGuard(session: Signal<Session>, access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let decision = Memo::new(move |_| decide(access, &session.get()));

    move || match decision.get() {
        GuardDecision::Loading => view! { <div class="route-guard__loading">"Loading..."</div> }.into_any(),
        GuardDecision::Redirect(target) => {
            log::debug!("guard: redirecting to {target}");
            view! { <Redirect path=target/> }.into_any()
        }
        GuardDecision::Allow => children().into_any(),
    }
}
