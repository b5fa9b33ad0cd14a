use crate::app;
use crate::bridge;
use crate::components::bell::NotificationBell;
use crate::components::field::TextField;
use crate::components::pager::Pager;
use crate::dom;
use crate::dto::{Application, Case, Juror};
use crate::session;
use futures::join;
use leptos::*;
use std::time::Duration;
use verdicts_core::listing;
use verdicts_core::roles::{Role, VerificationStatus};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum JurorTab {
    AvailableCases,
    Applications,
    Profile,
}

fn application_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "accepted" | "seated" => "ok",
        "declined" | "withdrawn" => "warn",
        _ => "",
    }
}

#[component]
pub fn JurorDashboardPage() -> impl IntoView {
    app::require_role(Role::Juror);

    let tab = create_rw_signal(JurorTab::AvailableCases);
    let verification = create_rw_signal(VerificationStatus::Pending);
    let available = create_rw_signal(Vec::<Case>::new());
    let applications = create_rw_signal(Vec::<Application>::new());
    let profile = create_rw_signal(Juror::default());

    let load_all = move || {
        spawn_local(async move {
            let (status_res, available_res, applications_res, profile_res) = join!(
                bridge::verification_status(Role::Juror),
                bridge::juror_available_cases(),
                bridge::juror_applications(),
                bridge::juror_profile(),
            );
            match status_res {
                Ok(status) => verification.set(status),
                Err(err) => logging::error!("juror verification status: {err}"),
            }
            match available_res {
                Ok(rows) => available.set(rows),
                Err(err) => logging::error!("available cases: {err}"),
            }
            match applications_res {
                Ok(rows) => applications.set(rows),
                Err(err) => logging::error!("juror applications: {err}"),
            }
            match profile_res {
                Ok(record) => profile.set(record),
                Err(err) => logging::error!("juror profile: {err}"),
            }
        });
    };
    load_all();

    let poll_status = move || {
        spawn_local(async move {
            match bridge::verification_status(Role::Juror).await {
                Ok(status) => verification.set(status),
                Err(err) => logging::error!("juror verification poll: {err}"),
            }
        });
    };
    if let Ok(handle) = set_interval_with_handle(poll_status, Duration::from_secs(30)) {
        on_cleanup(move || handle.clear());
    }

    let nav_listener = dom::on_navigate_to_cases(move || tab.set(JurorTab::AvailableCases));
    on_cleanup(move || nav_listener.remove());

    let case_query = create_rw_signal(String::new());
    let case_page = create_rw_signal(0usize);
    let filtered_cases = create_memo(move |_| {
        let query = case_query.get();
        available
            .get()
            .into_iter()
            .filter(|c| listing::matches_query(&[&c.title, &c.case_type, &c.county], &query))
            .collect::<Vec<Case>>()
    });
    create_effect(move |_| {
        let len = filtered_cases.with(Vec::len);
        case_page.update(|p| *p = listing::clamp_page(*p, len));
    });

    let applied_case_ids = create_memo(move |_| {
        applications.with(|rows| rows.iter().map(|a| a.case_id).collect::<Vec<i64>>())
    });

    let apply = move |case: Case| {
        // Optimistic: the case leaves the available list right away.
        available.update(|rows| rows.retain(|c| c.id != case.id));
        spawn_local(async move {
            match bridge::juror_apply(case.id).await {
                Ok(application) => {
                    applications.update(|rows| rows.insert(0, application));
                }
                Err(err) => {
                    logging::error!("apply to case {}: {err}", case.id);
                    dom::alert(&format!("Application failed: {err}"));
                }
            }
            let (available_res, applications_res) =
                join!(bridge::juror_available_cases(), bridge::juror_applications());
            if let Ok(rows) = available_res {
                available.set(rows);
            }
            if let Ok(rows) = applications_res {
                applications.set(rows);
            }
        });
    };

    let save_profile = move |_| {
        let record = profile.get_untracked();
        spawn_local(async move {
            match bridge::update_juror_profile(&record).await {
                Ok(saved) => {
                    profile.set(saved);
                    dom::alert("Profile saved.");
                }
                Err(err) => {
                    logging::error!("juror profile save: {err}");
                    dom::alert(&format!("Could not save your profile: {err}"));
                }
            }
        });
    };

    let logout = move |_| {
        session::clear_session();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    };

    let tab_button = move |target: JurorTab, label: &'static str| {
        view! {
          <button class="tab" class:active=move || tab.get() == target on:click=move |_| tab.set(target)>
            {label}
          </button>
        }
    };

    let available_view = move || {
        if !verification.get().is_verified() {
            return view! {
              <p class="meta">"Available cases unlock once an administrator verifies your account."</p>
            }
            .into_view();
        }
        view! {
          <input
            placeholder="Search cases"
            prop:value=move || case_query.get()
            on:input=move |ev| case_query.set(event_target_value(&ev))
          />
          <ul class="table">
            <For
              each=move || {
                  let rows = filtered_cases.get();
                  listing::paginate(&rows, case_page.get())
              }
              key=|c| c.id
              children=move |c| {
                  let id = c.id;
                  let for_apply = c.clone();
                  let already_applied = move || applied_case_ids.with(|ids| ids.contains(&id));
                  view! {
                    <li class="table-row">
                      <div>
                        <b>{c.title.clone()}</b>
                        <span class="meta">
                          {format!(" {} · {} County · trial {}", c.case_type, c.county, c.trial_date)}
                        </span>
                      </div>
                      <Show
                        when=already_applied
                        fallback=move || {
                            let for_apply = for_apply.clone();
                            view! {
                              <button class="primary" on:click=move |_| apply(for_apply.clone())>
                                "Apply"
                              </button>
                            }
                        }
                      >
                        <span class="badge ok">"Applied"</span>
                      </Show>
                    </li>
                  }
              }
            />
          </ul>
          <Pager page=case_page len=Signal::derive(move || filtered_cases.with(Vec::len)) />
        }
        .into_view()
    };

    let applications_view = move || {
        view! {
          <ul class="table">
            <For
              each=move || applications.get()
              key=|a| a.id
              children=move |a| {
                  let class = format!("badge {}", application_class(&a.status));
                  view! {
                    <li class="table-row">
                      <div>
                        <b>{a.case_title}</b>
                        <span class="meta">{format!(" submitted {}", a.submitted_at)}</span>
                      </div>
                      <span class=class>{a.status}</span>
                    </li>
                  }
              }
            />
          </ul>
          <Show when=move || applications.with(Vec::is_empty) fallback=|| ()>
            <p class="meta">"You have not applied to any cases yet."</p>
          </Show>
        }
    };

    let profile_view = move || {
        view! {
          <TextField
            label="Phone"
            value=Signal::derive(move || profile.with(|p| p.phone.clone()))
            on_input=move |v: String| profile.update(|p| p.phone = v)
            input_type="tel"
          />
          <TextField
            label="County of residency"
            value=Signal::derive(move || profile.with(|p| p.residency_county.clone()))
            on_input=move |v: String| profile.update(|p| p.residency_county = v)
          />
          <p class="meta">{move || profile.with(|p| p.email.clone())}</p>
          <button class="primary" on:click=save_profile>"Save profile"</button>
        }
    };

    let body = move || match tab.get() {
        JurorTab::AvailableCases => available_view().into_view(),
        JurorTab::Applications => applications_view().into_view(),
        JurorTab::Profile => profile_view().into_view(),
    };

    view! {
      <section class="panel dashboard">
        <header class="dashboard-header">
          <h2>{move || profile.with(|p| {
              if p.first_name.is_empty() {
                  "Juror dashboard".to_string()
              } else {
                  format!("Welcome, {}", p.full_name())
              }
          })}</h2>
          <nav class="row">
            <NotificationBell/>
            <button on:click=logout>"Sign out"</button>
          </nav>
        </header>

        <Show when=move || !verification.get().is_verified() fallback=|| ()>
          <div class="banner">
            {move || match verification.get() {
                VerificationStatus::Rejected => {
                    "Your account was declined. Contact support for details."
                }
                _ => "Your account is awaiting administrator verification.",
            }}
          </div>
        </Show>

        <div class="tabs">
          {tab_button(JurorTab::AvailableCases, "Available cases")}
          {tab_button(JurorTab::Applications, "My applications")}
          {tab_button(JurorTab::Profile, "Profile")}
        </div>

        <div class="tab-body">{body}</div>
      </section>
    }
}
