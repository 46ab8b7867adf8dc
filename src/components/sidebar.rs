//! Side navigation for the protected screens.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::AppRoute;

pub const SIDEBAR_ITEMS: [AppRoute; 4] = [AppRoute::Dashboard, AppRoute::Books, AppRoute::Readers, AppRoute::IssueBook];

/// Sidebar entry matching `path`, if any.
pub fn active_item(path: &str) -> Option<AppRoute> {
    AppRoute::from_path(path).filter(|route| SIDEBAR_ITEMS.contains(route))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let active = Memo::new(move |_| active_item(&location.pathname.get()));

    view! {
        <aside class="sidebar">
            <h2 class="sidebar__title">"Literary Haven"</h2>
            <ul class="sidebar__items">
                {SIDEBAR_ITEMS
                    .into_iter()
                    .map(|route| {
                        view! {
                            <li>
                                <a
                                    class=move || {
                                        if active.get() == Some(route) {
                                            "sidebar__item sidebar__item--active"
                                        } else {
                                            "sidebar__item"
                                        }
                                    }
                                    href=route.path()
                                >
                                    {route.title()}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </aside>
    }
}
