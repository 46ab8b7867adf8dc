//! Dashboard page: library counts, pending returns, and a month calendar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only mounted behind the route guard, so a token is present when the data
//! fetch starts.

use chrono::{Local, Utc};
use leptos::prelude::*;

use crate::components::month_calendar::MonthCalendar;
use crate::config::ConsoleConfig;
use crate::error::ApiError;
use crate::net::api::fetch_dashboard;
use crate::state::dashboard::{DashboardStats, DueEntry, due_entries};
use crate::state::session::SessionHandle;

#[component]
pub fn DashboardPage(session: SessionHandle, config: ConsoleConfig) -> impl IntoView {
    let data = LocalResource::new(move || {
        let token = session.token_untracked();
        async move {
            match token {
                Some(token) => fetch_dashboard(config, &token).await,
                None => Err(ApiError::Status(401)),
            }
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Literary Haven"</h1>
                <p>"Discover your next great adventure"</p>
            </header>
            <div class="dashboard-page__grid">
                <Suspense fallback=move || view! { <p>"Loading Literary Haven..."</p> }>
                    {move || {
                        data.get()
                            .map(|result| match result {
                                Ok(data) => {
                                    let now = Local::now();
                                    let stats = DashboardStats::compute(&data, now.with_timezone(&Utc));
                                    let entries = due_entries(&data, now);
                                    view! {
                                        <StatsPanel stats/>
                                        <DueDatesList entries/>
                                    }
                                        .into_any()
                                }
                                Err(e) => {
                                    log::warn!("dashboard: fetch failed: {e}");
                                    view! {
                                        <div class="dashboard-page__error">"Failed to fetch data from API"</div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
                <MonthCalendar/>
            </div>
        </div>
    }
}

#[component]
fn StatsPanel(stats: DashboardStats) -> impl IntoView {
    let cards = [
        ("Total Books", stats.total_books),
        ("Total Readers", stats.total_readers),
        ("Books Issued", stats.total_issued),
        ("Overdue", stats.overdue),
    ];
    view! {
        <section class="stats">
            {cards
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="stats__card">
                            <span class="stats__value">{value}</span>
                            <span class="stats__label">{label}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}

#[component]
fn DueDatesList(entries: Vec<DueEntry>) -> impl IntoView {
    let empty = entries.is_empty();
    view! {
        <section class="due-dates">
            <h4>"Due Dates"</h4>
            <Show when=move || !empty fallback=|| view! { <p class="due-dates__empty">"No pending returns"</p> }>
                <ul class="due-dates__list">
                    {entries
                        .iter()
                        .map(|entry| {
                            let class = if entry.overdue { "due-dates__item due-dates__item--overdue" } else { "due-dates__item" };
                            view! { <li class=class>{format!("{} - {}", entry.title, entry.due)}</li> }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </section>
    }
}
