use crate::app;
use crate::bridge;
use crate::components::field::TextField;
use crate::dom;
use crate::session;
use leptos::*;
use leptos_router::{use_navigate, A};
use verdicts_core::roles::Role;
use wasm_bindgen_futures::spawn_local;

const LOGIN_ROLES: [Role; 3] = [Role::Attorney, Role::Juror, Role::Admin];

#[component]
pub fn LoginPage() -> impl IntoView {
    let role = create_rw_signal(Role::Attorney);
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let busy = create_rw_signal(false);

    // Already signed in: skip straight to the dashboard.
    {
        let navigate = use_navigate();
        create_effect(move |_| {
            if let Some(active) = session::current_role() {
                if session::token().is_some() {
                    navigate(app::dashboard_path(active), Default::default());
                }
            }
        });
    }

    let submit = move |_| {
        let current_role = role.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if email_value.trim().is_empty() || password_value.is_empty() {
            dom::alert("Enter your email and password to sign in.");
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match bridge::login(current_role, email_value.trim(), &password_value).await {
                Ok(response) => {
                    let user_json = response.user.to_string();
                    session::store_session(current_role, &response.token, &user_json);
                    if let Some(window) = web_sys::window() {
                        let _ = window
                            .location()
                            .set_href(app::dashboard_path(current_role));
                    }
                }
                Err(err) => {
                    logging::error!("login failed: {err}");
                    dom::alert(&format!("Sign in failed: {err}"));
                }
            }
            busy.set(false);
        });
    };

    view! {
      <section class="panel auth-panel">
        <h1>"Quick Verdicts"</h1>
        <h2>"Sign in"</h2>

        <div class="role-tabs">
          {LOGIN_ROLES
              .into_iter()
              .map(|tab| {
                  view! {
                    <button
                      class="role-tab"
                      class:active=move || role.get() == tab
                      on:click=move |_| role.set(tab)
                    >
                      {tab.as_str()}
                    </button>
                  }
              })
              .collect_view()}
        </div>

        <TextField
          label="Email"
          value=Signal::derive(move || email.get())
          on_input=move |v: String| email.set(v)
          input_type="email"
        />
        <TextField
          label="Password"
          value=Signal::derive(move || password.get())
          on_input=move |v: String| password.set(v)
          input_type="password"
        />

        <button class="primary" disabled=move || busy.get() on:click=submit>
          {move || if busy.get() { "Signing in..." } else { "Sign in" }}
        </button>

        <Show when=move || role.get() != Role::Admin fallback=|| ()>
          <p class="auth-switch">
            "New here? "
            {move || {
                let target = role.get();
                view! {
                  <A href=format!("/signup/{}", target.as_str())>
                    {format!("Create a {} account", target.as_str())}
                  </A>
                }
            }}
          </p>
        </Show>
      </section>
    }
}
