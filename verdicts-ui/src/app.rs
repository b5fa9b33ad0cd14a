use crate::pages::{
    admin::AdminDashboardPage, admin_calendar::AdminCalendarPage, attorney::AttorneyDashboardPage,
    juror::JurorDashboardPage, login::LoginPage, notifications::NotificationsPage,
    signup::SignupPage,
};
use crate::session;
use leptos::*;
use leptos_router::*;
use verdicts_core::roles::Role;

pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Attorney => "/attorney",
        Role::Juror => "/juror",
    }
}

/// Redirects to the login screen unless the stored session matches `role`.
pub fn require_role(role: Role) {
    let navigate = use_navigate();
    create_effect(move |_| {
        if !session::is_logged_in_as(role) {
            navigate("/login", Default::default());
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
      <Router>
        <main class="app">
          <Routes>
            <Route path="/" view=LoginPage/>
            <Route path="/login" view=LoginPage/>
            <Route path="/signup/:role" view=SignupPage/>
            <Route path="/admin" view=AdminDashboardPage/>
            <Route path="/admin/calendar" view=AdminCalendarPage/>
            <Route path="/attorney" view=AttorneyDashboardPage/>
            <Route path="/juror" view=JurorDashboardPage/>
            <Route path="/notifications" view=NotificationsPage/>
            <Route path="/*any" view=NotFound/>
          </Routes>
        </main>
      </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
      <section class="panel">
        <h2>"Page not found"</h2>
        <A href="/login">"Back to sign in"</A>
      </section>
    }
}
