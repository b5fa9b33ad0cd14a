use crate::app;
use crate::bridge;
use crate::dto::CalendarDay;
use chrono::Datelike;
use leptos::*;
use leptos_router::A;
use std::collections::HashMap;
use verdicts_core::calendar::{self, MonthGrid};
use verdicts_core::roles::Role;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn AdminCalendarPage() -> impl IntoView {
    app::require_role(Role::Admin);

    let today = chrono::Utc::now().date_naive();
    let year = create_rw_signal(today.year());
    let month = create_rw_signal(today.month());
    let days = create_rw_signal(HashMap::<String, CalendarDay>::new());

    let load_month = move || {
        let (y, m) = (year.get_untracked(), month.get_untracked());
        spawn_local(async move {
            match bridge::admin_cases_by_date(y, m).await {
                Ok(list) => {
                    days.set(list.into_iter().map(|d| (d.date.clone(), d)).collect());
                }
                Err(err) => {
                    logging::error!("cases by date {y}-{m}: {err}");
                    days.set(HashMap::new());
                }
            }
        });
    };
    load_month();

    let go_prev = move |_| {
        let (y, m) = calendar::prev_month(year.get_untracked(), month.get_untracked());
        year.set(y);
        month.set(m);
        load_month();
    };
    let go_next = move |_| {
        let (y, m) = calendar::next_month(year.get_untracked(), month.get_untracked());
        year.set(y);
        month.set(m);
        load_month();
    };

    let grid = move || calendar::month_grid(year.get(), month.get());

    let day_cell = move |day: Option<u32>| {
        let Some(day) = day else {
            return view! { <td class="calendar-cell empty"></td> }.into_view();
        };
        let key = calendar::date_key(year.get_untracked(), month.get_untracked(), day);
        view! {
          <td class="calendar-cell">
            <span class="calendar-day">{day}</span>
            {move || {
                days.with(|map| {
                    map.get(&key).map(|entry| {
                        view! {
                          <ul class="calendar-cases">
                            {entry
                                .cases
                                .iter()
                                .map(|case| view! { <li>{case.title.clone()}</li> })
                                .collect_view()}
                          </ul>
                        }
                    })
                })
            }}
          </td>
        }
        .into_view()
    };

    view! {
      <section class="panel">
        <header class="dashboard-header">
          <h2>"Trial calendar"</h2>
          <A href="/admin">"Back to dashboard"</A>
        </header>

        <div class="row calendar-nav">
          <button on:click=go_prev>"Previous"</button>
          <b>{move || format!("{} {}", calendar::month_name(month.get()), year.get())}</b>
          <button on:click=go_next>"Next"</button>
        </div>

        <table class="calendar">
          <thead>
            <tr>
              <th>"Sun"</th><th>"Mon"</th><th>"Tue"</th><th>"Wed"</th>
              <th>"Thu"</th><th>"Fri"</th><th>"Sat"</th>
            </tr>
          </thead>
          <tbody>
            {move || {
                grid()
                    .map(|MonthGrid { weeks, .. }| {
                        weeks
                            .into_iter()
                            .map(|week| {
                                view! {
                                  <tr>
                                    {week.into_iter().map(day_cell).collect_view()}
                                  </tr>
                                }
                            })
                            .collect_view()
                    })
            }}
          </tbody>
        </table>
      </section>
    }
}
