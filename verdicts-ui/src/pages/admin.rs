use crate::app;
use crate::bridge;
use crate::components::bell::NotificationBell;
use crate::components::modal::Modal;
use crate::components::pager::Pager;
use crate::dom;
use crate::dto::{AdminDashboardStats, Attorney, Case, Juror, TrialSlot};
use crate::session;
use futures::join;
use leptos::*;
use leptos_router::A;
use verdicts_core::listing::{self, SortDir};
use verdicts_core::roles::{Role, VerificationStatus};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdminTab {
    Overview,
    Attorneys,
    Jurors,
    PendingCases,
    Trials,
}

fn status_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "verified" | "approved" | "ready" => "ok",
        "rejected" | "declined" | "failed" => "warn",
        _ => "",
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    app::require_role(Role::Admin);

    let tab = create_rw_signal(AdminTab::Overview);
    let stats = create_rw_signal(AdminDashboardStats::default());
    let attorneys = create_rw_signal(Vec::<Attorney>::new());
    let jurors = create_rw_signal(Vec::<Juror>::new());
    let pending = create_rw_signal(Vec::<Case>::new());
    let trials = create_rw_signal(Vec::<TrialSlot>::new());

    let load_all = move || {
        spawn_local(async move {
            let (stats_res, attorneys_res, jurors_res, pending_res, trials_res) = join!(
                bridge::admin_dashboard(),
                bridge::admin_attorneys(),
                bridge::admin_jurors(),
                bridge::admin_pending_cases(),
                bridge::admin_trials_ready(),
            );
            match stats_res {
                Ok(v) => stats.set(v),
                Err(err) => logging::error!("admin dashboard stats: {err}"),
            }
            match attorneys_res {
                Ok(v) => attorneys.set(v),
                Err(err) => logging::error!("admin attorneys: {err}"),
            }
            match jurors_res {
                Ok(v) => jurors.set(v),
                Err(err) => logging::error!("admin jurors: {err}"),
            }
            match pending_res {
                Ok(v) => pending.set(v),
                Err(err) => logging::error!("admin pending cases: {err}"),
            }
            match trials_res {
                Ok(v) => trials.set(v),
                Err(err) => logging::error!("admin trials ready: {err}"),
            }
        });
    };
    load_all();

    let nav_listener = dom::on_navigate_to_cases(move || tab.set(AdminTab::PendingCases));
    on_cleanup(move || nav_listener.remove());

    // Attorneys table state.
    let attorney_query = create_rw_signal(String::new());
    let attorney_sort = create_rw_signal(SortDir::Asc);
    let attorney_page = create_rw_signal(0usize);
    let filtered_attorneys = create_memo(move |_| {
        let query = attorney_query.get();
        let mut rows: Vec<Attorney> = attorneys
            .get()
            .into_iter()
            .filter(|a| listing::matches_query(&[&a.full_name(), &a.email, &a.firm_name], &query))
            .collect();
        listing::sort_by_str_key(&mut rows, Attorney::full_name, attorney_sort.get());
        rows
    });
    create_effect(move |_| {
        let len = filtered_attorneys.with(Vec::len);
        attorney_page.update(|p| *p = listing::clamp_page(*p, len));
    });

    // Jurors table state.
    let juror_query = create_rw_signal(String::new());
    let juror_page = create_rw_signal(0usize);
    let filtered_jurors = create_memo(move |_| {
        let query = juror_query.get();
        let mut rows: Vec<Juror> = jurors
            .get()
            .into_iter()
            .filter(|j| {
                listing::matches_query(&[&j.full_name(), &j.email, &j.residency_county], &query)
            })
            .collect();
        listing::sort_by_str_key(&mut rows, Juror::full_name, SortDir::Asc);
        rows
    });
    create_effect(move |_| {
        let len = filtered_jurors.with(Vec::len);
        juror_page.update(|p| *p = listing::clamp_page(*p, len));
    });

    let verify_account = move |role: Role, id: i64| {
        match role {
            Role::Attorney => attorneys.update(|rows| {
                if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
                    row.verification_status = "verified".into();
                }
            }),
            _ => jurors.update(|rows| {
                if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
                    row.verification_status = "verified".into();
                }
            }),
        }
        spawn_local(async move {
            if let Err(err) =
                bridge::admin_set_verification(role, id, VerificationStatus::Verified).await
            {
                logging::error!("verify {} {id}: {err}", role.as_str());
                dom::alert(&format!("Verification failed: {err}"));
            }
            match role {
                Role::Attorney => {
                    if let Ok(rows) = bridge::admin_attorneys().await {
                        attorneys.set(rows);
                    }
                }
                _ => {
                    if let Ok(rows) = bridge::admin_jurors().await {
                        jurors.set(rows);
                    }
                }
            }
        });
    };

    // Case review modal.
    let review_open = create_rw_signal(false);
    let review_case = create_rw_signal(None::<Case>);
    let review_note = create_rw_signal(String::new());
    let open_review = move |case: Case| {
        review_case.set(Some(case));
        review_note.set(String::new());
        review_open.set(true);
    };
    let submit_review = move |approve: bool| {
        let Some(case) = review_case.get_untracked() else {
            return;
        };
        let note = review_note.get_untracked();
        review_open.set(false);
        pending.update(|rows| rows.retain(|c| c.id != case.id));
        spawn_local(async move {
            if let Err(err) = bridge::admin_review_case(case.id, approve, note.trim()).await {
                logging::error!("case review {}: {err}", case.id);
                dom::alert(&format!("Review failed: {err}"));
            }
            let (pending_res, stats_res) =
                join!(bridge::admin_pending_cases(), bridge::admin_dashboard());
            if let Ok(rows) = pending_res {
                pending.set(rows);
            }
            if let Ok(v) = stats_res {
                stats.set(v);
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
    let export_charge_text = move |case_id: i64| {
        spawn_local(async move {
            match bridge::export_jury_charge_text(case_id).await {
                Ok(text) => dom::download_text(
                    &format!("case-{case_id}-jury-charge.txt"),
                    "text/plain",
                    &text,
                ),
                Err(err) => {
                    logging::error!("jury charge export {case_id}: {err}");
                    dom::alert(&format!("Jury charge export failed: {err}"));
                }
            }
        });
    };
    let export_charge_forms = move |case_id: i64| {
        spawn_local(async move {
            match bridge::export_jury_charge_ms_forms(case_id).await {
                Ok(payload) => dom::download_text(
                    &format!("case-{case_id}-jury-charge-forms.json"),
                    "application/json",
                    &payload,
                ),
                Err(err) => {
                    logging::error!("ms-forms export {case_id}: {err}");
                    dom::alert(&format!("MS Forms export failed: {err}"));
                }
            }
        });
    };

    let join_trial = move |case_id: i64| {
        spawn_local(async move {
            match bridge::admin_join_trial(case_id).await {
                Ok(response) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.open_with_url(&response.join_url);
                    }
                }
                Err(err) => {
                    logging::error!("admin join trial {case_id}: {err}");
                    dom::alert(&format!("Could not join the trial: {err}"));
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

    let tab_button = move |target: AdminTab, label: &'static str| {
        view! {
          <button class="tab" class:active=move || tab.get() == target on:click=move |_| tab.set(target)>
            {label}
          </button>
        }
    };

    let overview_view = move || {
        let s = stats.get();
        view! {
          <div class="stat-grid">
            <div class="stat-card"><b>{s.total_attorneys}</b><span>"Attorneys"</span></div>
            <div class="stat-card"><b>{s.total_jurors}</b><span>"Jurors"</span></div>
            <div class="stat-card"><b>{s.total_cases}</b><span>"Cases"</span></div>
            <div class="stat-card"><b>{s.pending_reviews}</b><span>"Pending reviews"</span></div>
            <div class="stat-card"><b>{s.trials_ready}</b><span>"Trials ready"</span></div>
          </div>
          <button class="primary" on:click=move |_| dom::dispatch_navigate_to_cases()>
            "Review pending cases"
          </button>
        }
    };

    let attorneys_view = move || {
        view! {
          <div class="row">
            <input
              placeholder="Search attorneys"
              prop:value=move || attorney_query.get()
              on:input=move |ev| attorney_query.set(event_target_value(&ev))
            />
            <button on:click=move |_| attorney_sort.update(|d| *d = d.toggle())>
              {move || match attorney_sort.get() {
                  SortDir::Asc => "Name A-Z",
                  SortDir::Desc => "Name Z-A",
              }}
            </button>
          </div>
          <ul class="table">
            <For
              each=move || {
                  let rows = filtered_attorneys.get();
                  listing::paginate(&rows, attorney_page.get())
              }
              key=|a| a.id
              children=move |a| {
                  let id = a.id;
                  let status = a.verification_status.clone();
                  let unverified =
                      VerificationStatus::parse(&status) != VerificationStatus::Verified;
                  view! {
                    <li class="table-row">
                      <div>
                        <b>{a.full_name()}</b>
                        <span class="meta">{format!(" {} · {}", a.email, a.firm_name)}</span>
                      </div>
                      <div>
                        <span class=format!("badge {}", status_class(&status))>{status.clone()}</span>
                        <Show when=move || unverified fallback=|| ()>
                          <button on:click=move |_| verify_account(Role::Attorney, id)>"Verify"</button>
                        </Show>
                      </div>
                    </li>
                  }
              }
            />
          </ul>
          <Pager page=attorney_page len=Signal::derive(move || filtered_attorneys.with(Vec::len)) />
        }
    };

    let jurors_view = move || {
        view! {
          <input
            placeholder="Search jurors"
            prop:value=move || juror_query.get()
            on:input=move |ev| juror_query.set(event_target_value(&ev))
          />
          <ul class="table">
            <For
              each=move || {
                  let rows = filtered_jurors.get();
                  listing::paginate(&rows, juror_page.get())
              }
              key=|j| j.id
              children=move |j| {
                  let id = j.id;
                  let status = j.verification_status.clone();
                  let unverified =
                      VerificationStatus::parse(&status) != VerificationStatus::Verified;
                  view! {
                    <li class="table-row">
                      <div>
                        <b>{j.full_name()}</b>
                        <span class="meta">{format!(" {} · {} County", j.email, j.residency_county)}</span>
                      </div>
                      <div>
                        <span class=format!("badge {}", status_class(&status))>{status.clone()}</span>
                        <Show when=move || unverified fallback=|| ()>
                          <button on:click=move |_| verify_account(Role::Juror, id)>"Verify"</button>
                        </Show>
                      </div>
                    </li>
                  }
              }
            />
          </ul>
          <Pager page=juror_page len=Signal::derive(move || filtered_jurors.with(Vec::len)) />
        }
    };

    let pending_view = move || {
        view! {
          <ul class="table">
            <For
              each=move || pending.get()
              key=|c| c.id
              children=move |c| {
                  let id = c.id;
                  let for_review = c.clone();
                  view! {
                    <li class="table-row">
                      <div>
                        <b>{c.title.clone()}</b>
                        <span class="meta">{format!(" {} · {} County · {}", c.case_type, c.county, c.attorney_name)}</span>
                      </div>
                      <div class="row">
                        <button class="primary" on:click=move |_| open_review(for_review.clone())>"Review"</button>
                        <button on:click=move |_| export_witnesses(id)>"Witness list"</button>
                        <button on:click=move |_| export_charge_text(id)>"Jury charge"</button>
                        <button on:click=move |_| export_charge_forms(id)>"MS Forms"</button>
                      </div>
                    </li>
                  }
              }
            />
          </ul>
          <Show when=move || pending.with(Vec::is_empty) fallback=|| ()>
            <p class="meta">"No cases are waiting for review."</p>
          </Show>
        }
    };

    let trials_view = move || {
        view! {
          <ul class="table">
            <For
              each=move || trials.get()
              key=|t| t.case_id
              children=move |t| {
                  let id = t.case_id;
                  view! {
                    <li class="table-row">
                      <div>
                        <b>{t.case_title.clone()}</b>
                        <span class="meta">
                          {format!(
                              " {} · {} attorneys · {} jurors seated",
                              t.scheduled_at, t.attorneys_present, t.jurors_seated
                          )}
                        </span>
                      </div>
                      <button class="primary" on:click=move |_| join_trial(id)>"Join"</button>
                    </li>
                  }
              }
            />
          </ul>
          <Show when=move || trials.with(Vec::is_empty) fallback=|| ()>
            <p class="meta">"No trials are ready right now."</p>
          </Show>
        }
    };

    let body = move || match tab.get() {
        AdminTab::Overview => overview_view().into_view(),
        AdminTab::Attorneys => attorneys_view().into_view(),
        AdminTab::Jurors => jurors_view().into_view(),
        AdminTab::PendingCases => pending_view().into_view(),
        AdminTab::Trials => trials_view().into_view(),
    };

    view! {
      <section class="panel dashboard">
        <header class="dashboard-header">
          <h2>"Admin dashboard"</h2>
          <nav class="row">
            <A href="/admin/calendar">"Calendar"</A>
            <NotificationBell/>
            <button on:click=logout>"Sign out"</button>
          </nav>
        </header>

        <div class="tabs">
          {tab_button(AdminTab::Overview, "Overview")}
          {tab_button(AdminTab::Attorneys, "Attorneys")}
          {tab_button(AdminTab::Jurors, "Jurors")}
          {tab_button(AdminTab::PendingCases, "Pending cases")}
          {tab_button(AdminTab::Trials, "Trials")}
        </div>

        <div class="tab-body">{body}</div>

        <Modal title="Review case" open=review_open>
          {move || {
              review_case
                  .get()
                  .map(|case| {
                      view! {
                        <div class="stack">
                          <b>{case.title.clone()}</b>
                          <p class="meta">{case.summary.clone()}</p>
                          <textarea
                            placeholder="Review note"
                            prop:value=move || review_note.get()
                            on:input=move |ev| review_note.set(event_target_value(&ev))
                          />
                          <div class="row">
                            <button class="primary" on:click=move |_| submit_review(true)>"Approve"</button>
                            <button class="danger" on:click=move |_| submit_review(false)>"Reject"</button>
                          </div>
                        </div>
                      }
                  })
          }}
        </Modal>
      </section>
    }
}
