use crate::app;
use crate::bridge;
use crate::dom;
use crate::dto::Notification;
use crate::session;
use leptos::*;
use leptos_router::use_navigate;
use verdicts_core::notifications;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    // Any signed-in role can read its feed.
    {
        let navigate = use_navigate();
        create_effect(move |_| {
            if session::current_role().is_none() || session::token().is_none() {
                navigate("/login", Default::default());
            }
        });
    }

    let items = create_rw_signal(Vec::<Notification>::new());

    let load = move || {
        spawn_local(async move {
            match bridge::notifications().await {
                Ok(list) => items.set(list),
                Err(err) => logging::error!("notifications: {err}"),
            }
        });
    };
    load();

    let read_one = move |id: i64| {
        let changed = {
            let mut patched = items.get_untracked();
            let changed = notifications::mark_read(&mut patched, id);
            if changed {
                items.set(patched);
            }
            changed
        };
        if !changed {
            return;
        }
        spawn_local(async move {
            if let Err(err) = bridge::mark_notification_read(id).await {
                logging::error!("mark notification {id} read: {err}");
                dom::alert(&format!("Could not update the notification: {err}"));
            }
            if let Ok(list) = bridge::notifications().await {
                items.set(list);
            }
        });
    };

    let read_all = move |_| {
        items.update(|list| notifications::mark_all_read(list));
        spawn_local(async move {
            if let Err(err) = bridge::mark_all_notifications_read().await {
                logging::error!("mark all notifications read: {err}");
                dom::alert(&format!("Could not update notifications: {err}"));
            }
            if let Ok(list) = bridge::notifications().await {
                items.set(list);
            }
        });
    };

    let back = move |_| {
        if let Some(role) = session::current_role() {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(app::dashboard_path(role));
            }
        }
    };

    view! {
      <section class="panel">
        <header class="dashboard-header">
          <h2>"Notifications"</h2>
          <nav class="row">
            <button on:click=back>"Back to dashboard"</button>
            <button
              disabled=move || items.with(|list| notifications::unread_count(list) == 0)
              on:click=read_all
            >
              "Mark all read"
            </button>
          </nav>
        </header>

        <ul class="table">
          <For
            each=move || items.get()
            key=|n| n.id
            children=move |n| {
                let id = n.id;
                let unread = !n.read;
                view! {
                  <li class="table-row" class:unread=unread>
                    <div>
                      <b>{n.title}</b>
                      <div class="meta">{n.body}</div>
                      <span class="meta">{n.created_at}</span>
                    </div>
                    <Show when=move || unread fallback=|| ()>
                      <button on:click=move |_| read_one(id)>"Mark read"</button>
                    </Show>
                  </li>
                }
            }
          />
        </ul>
        <Show when=move || items.with(Vec::is_empty) fallback=|| ()>
          <p class="meta">"Nothing here yet."</p>
        </Show>
      </section>
    }
}
