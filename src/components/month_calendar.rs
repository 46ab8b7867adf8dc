//! Dashboard month calendar with previous/next navigation.

use chrono::{Local, Utc};
use leptos::prelude::*;

use crate::util::calendar::{CalendarMonth, WEEKDAY_LABELS, today_in};

#[component]
pub fn MonthCalendar() -> impl IntoView {
    let today = today_in(Utc::now(), &Local);
    let month = RwSignal::new(CalendarMonth::containing(today));

    view! {
        <section class="calendar">
            <header class="calendar__header">
                <button class="btn" on:click=move |_| month.update(|m| *m = m.shifted(-1))>"<"</button>
                <h3 class="calendar__title">{move || month.get().title()}</h3>
                <button class="btn" on:click=move |_| month.update(|m| *m = m.shifted(1))>">"</button>
            </header>
            <div class="calendar__grid">
                {WEEKDAY_LABELS
                    .into_iter()
                    .map(|label| view! { <span class="calendar__weekday">{label}</span> })
                    .collect::<Vec<_>>()}
                {move || {
                    let current = month.get();
                    current
                        .grid()
                        .into_iter()
                        .map(|cell| match cell {
                            Some(day) if current.is_today(day, today) => {
                                view! { <span class="calendar__day calendar__day--today">{day}</span> }.into_any()
                            }
                            Some(day) => view! { <span class="calendar__day">{day}</span> }.into_any(),
                            None => view! { <span class="calendar__day calendar__day--empty"></span> }.into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
