//! Placeholder screens for the book, reader and issue-book sections.

use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn SectionPage(route: AppRoute) -> impl IntoView {
    view! {
        <div class="section-page">
            <h1>{route.title()}</h1>
            <p class="section-page__path">{route.path()}</p>
        </div>
    }
}
