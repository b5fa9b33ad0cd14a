use crate::bridge;
use leptos::*;
use leptos_router::A;
use std::time::Duration;
use verdicts_core::notifications;
use wasm_bindgen_futures::spawn_local;

/// Unread-count badge, refreshed every 30 seconds while mounted.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let count = create_rw_signal(0usize);

    let refresh = move || {
        spawn_local(async move {
            match bridge::unread_notification_count().await {
                Ok(n) => count.set(n),
                Err(err) => logging::error!("unread notification count: {err}"),
            }
        });
    };
    refresh();
    if let Ok(handle) = set_interval_with_handle(refresh, Duration::from_secs(30)) {
        on_cleanup(move || handle.clear());
    }

    view! {
      <span class="bell">
        <A href="/notifications">"Notifications"</A>
        {move || {
            notifications::badge_label(count.get())
                .map(|label| view! { <span class="bell-badge">{label}</span> })
        }}
      </span>
    }
}
