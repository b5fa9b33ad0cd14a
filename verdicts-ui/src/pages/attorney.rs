use crate::app;
use crate::bridge;
use crate::components::bell::NotificationBell;
use crate::components::field::TextField;
use crate::components::pager::Pager;
use crate::dom;
use crate::dto::{Attorney, Case, JuryQuestion, WitnessCase};
use crate::session;
use futures::join;
use leptos::*;
use std::time::Duration;
use verdicts_core::listing;
use verdicts_core::roles::{Role, VerificationStatus};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AttorneyTab {
    Cases,
    WarRoom,
    Profile,
}

#[component]
pub fn AttorneyDashboardPage() -> impl IntoView {
    app::require_role(Role::Attorney);

    let tab = create_rw_signal(AttorneyTab::Cases);
    let verification = create_rw_signal(VerificationStatus::Pending);
    let cases = create_rw_signal(Vec::<Case>::new());
    let profile = create_rw_signal(Attorney::default());

    let load_all = move || {
        spawn_local(async move {
            let (status_res, cases_res, profile_res) = join!(
                bridge::verification_status(Role::Attorney),
                bridge::attorney_cases(),
                bridge::attorney_profile(),
            );
            match status_res {
                Ok(status) => verification.set(status),
                Err(err) => logging::error!("attorney verification status: {err}"),
            }
            match cases_res {
                Ok(rows) => cases.set(rows),
                Err(err) => logging::error!("attorney cases: {err}"),
            }
            match profile_res {
                Ok(record) => profile.set(record),
                Err(err) => logging::error!("attorney profile: {err}"),
            }
        });
    };
    load_all();

    // Verification is admin-gated; poll so the banner clears without a reload.
    let poll_status = move || {
        spawn_local(async move {
            match bridge::verification_status(Role::Attorney).await {
                Ok(status) => verification.set(status),
                Err(err) => logging::error!("attorney verification poll: {err}"),
            }
        });
    };
    if let Ok(handle) = set_interval_with_handle(poll_status, Duration::from_secs(30)) {
        on_cleanup(move || handle.clear());
    }

    let nav_listener = dom::on_navigate_to_cases(move || tab.set(AttorneyTab::Cases));
    on_cleanup(move || nav_listener.remove());

    let case_query = create_rw_signal(String::new());
    let case_page = create_rw_signal(0usize);
    let filtered_cases = create_memo(move |_| {
        let query = case_query.get();
        cases
            .get()
            .into_iter()
            .filter(|c| listing::matches_query(&[&c.title, &c.case_type, &c.county], &query))
            .collect::<Vec<Case>>()
    });
    create_effect(move |_| {
        let len = filtered_cases.with(Vec::len);
        case_page.update(|p| *p = listing::clamp_page(*p, len));
    });

    // War room: roster and jury charge for the selected case.
    let war_room_case = create_rw_signal(None::<Case>);
    let witnesses = create_rw_signal(Vec::<WitnessCase>::new());
    let questions = create_rw_signal(Vec::<JuryQuestion>::new());
    let open_war_room = move |case: Case| {
        let case_id = case.id;
        war_room_case.set(Some(case));
        witnesses.set(Vec::new());
        questions.set(Vec::new());
        tab.set(AttorneyTab::WarRoom);
        spawn_local(async move {
            let (witnesses_res, questions_res) = join!(
                bridge::case_witnesses(case_id),
                bridge::case_jury_questions(case_id),
            );
            match witnesses_res {
                Ok(rows) => witnesses.set(rows),
                Err(err) => logging::error!("case witnesses {case_id}: {err}"),
            }
            match questions_res {
                Ok(rows) => questions.set(rows),
                Err(err) => logging::error!("jury questions {case_id}: {err}"),
            }
        });
    };

    let export_witnesses = move |case_id: i64| {
        spawn_local(async move {
            match bridge::export_witness_list(case_id).await {
                Ok(text) => dom::download_text(
                    &format!("case-{case_id}-witnesses.txt"),
                    "text/plain",
                    &text,
                ),
                Err(err) => {
                    logging::error!("witness export {case_id}: {err}");
                    dom::alert(&format!("Witness export failed: {err}"));
                }
            }
        });
    };

    let save_profile = move |_| {
        let record = profile.get_untracked();
        spawn_local(async move {
            match bridge::update_attorney_profile(&record).await {
                Ok(saved) => {
                    profile.set(saved);
                    dom::alert("Profile saved.");
                }
                Err(err) => {
                    logging::error!("attorney profile save: {err}");
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

    let tab_button = move |target: AttorneyTab, label: &'static str| {
        view! {
          <button class="tab" class:active=move || tab.get() == target on:click=move |_| tab.set(target)>
            {label}
          </button>
        }
    };

    let cases_view = move || {
        if !verification.get().is_verified() {
            return view! {
              <p class="meta">"Your cases unlock once an administrator verifies your account."</p>
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
                  let for_war_room = c.clone();
                  view! {
                    <li class="table-row">
                      <div>
                        <b>{c.title.clone()}</b>
                        <span class="meta">
                          {format!(" {} · {} County · trial {}", c.case_type, c.county, c.trial_date)}
                        </span>
                        <div class="meta">{c.status.clone()}</div>
                      </div>
                      <div class="row">
                        <button class="primary" on:click=move |_| open_war_room(for_war_room.clone())>
                          "War room"
                        </button>
                        <button on:click=move |_| export_witnesses(id)>"Witness list"</button>
                      </div>
                    </li>
                  }
              }
            />
          </ul>
          <Pager page=case_page len=Signal::derive(move || filtered_cases.with(Vec::len)) />
        }
        .into_view()
    };

    let war_room_view = move || {
        let Some(case) = war_room_case.get() else {
            return view! { <p class="meta">"Open a case from the cases tab to prepare it here."</p> }
                .into_view();
        };
        view! {
          <h3>{case.title.clone()}</h3>
          <p class="meta">{case.summary.clone()}</p>

          <h4>"Witnesses"</h4>
          <ul class="table">
            <For
              each=move || witnesses.get()
              key=|w| w.id
              children=move |w| view! {
                <li class="table-row">
                  <div>
                    <b>{w.witness_name}</b>
                    <span class="meta">{format!(" ({})", w.side)}</span>
                  </div>
                  <div class="meta">{w.summary}</div>
                </li>
              }
            />
          </ul>

          <h4>"Jury charge"</h4>
          <ol class="table">
            <For
              each=move || questions.get()
              key=|q| q.id
              children=move |q| view! {
                <li class="table-row">
                  <div>{q.prompt}</div>
                  <span class="meta">{q.answer_kind}</span>
                </li>
              }
            />
          </ol>
        }
        .into_view()
    };

    let profile_view = move || {
        view! {
          <TextField
            label="Firm name"
            value=Signal::derive(move || profile.with(|p| p.firm_name.clone()))
            on_input=move |v: String| profile.update(|p| p.firm_name = v)
          />
          <TextField
            label="Phone"
            value=Signal::derive(move || profile.with(|p| p.phone.clone()))
            on_input=move |v: String| profile.update(|p| p.phone = v)
            input_type="tel"
          />
          <TextField
            label="State of practice"
            value=Signal::derive(move || profile.with(|p| p.practice_state.clone()))
            on_input=move |v: String| profile.update(|p| p.practice_state = v)
          />
          <p class="meta">
            {move || profile.with(|p| format!("Bar number {} · {}", p.bar_number, p.email))}
          </p>
          <button class="primary" on:click=save_profile>"Save profile"</button>
        }
    };

    let body = move || match tab.get() {
        AttorneyTab::Cases => cases_view().into_view(),
        AttorneyTab::WarRoom => war_room_view().into_view(),
        AttorneyTab::Profile => profile_view().into_view(),
    };

    view! {
      <section class="panel dashboard">
        <header class="dashboard-header">
          <h2>{move || profile.with(|p| {
              if p.first_name.is_empty() {
                  "Attorney dashboard".to_string()
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
          {tab_button(AttorneyTab::Cases, "Cases")}
          {tab_button(AttorneyTab::WarRoom, "War room")}
          {tab_button(AttorneyTab::Profile, "Profile")}
        </div>

        <div class="tab-body">{body}</div>
      </section>
    }
}
