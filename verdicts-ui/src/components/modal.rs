use leptos::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    open: RwSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
      <Show when=move || open.get() fallback=|| ()>
        <div class="modal-backdrop" on:click=move |_| open.set(false)>
          <div class="modal" on:click=|ev| ev.stop_propagation()>
            <header class="modal-header">
              <h3>{title.clone()}</h3>
              <button class="modal-close" on:click=move |_| open.set(false)>"Close"</button>
            </header>
            <div class="modal-body">{children()}</div>
          </div>
        </div>
      </Show>
    }
}
