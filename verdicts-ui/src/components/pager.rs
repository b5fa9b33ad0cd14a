use leptos::*;
use verdicts_core::listing;

#[component]
pub fn Pager(page: RwSignal<usize>, #[prop(into)] len: Signal<usize>) -> impl IntoView {
    let pages = move || listing::page_count(len.get());
    view! {
      <div class="pager">
        <button
          disabled=move || page.get() == 0
          on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
        >
          "Prev"
        </button>
        <span class="pager-label">
          {move || format!("Page {} of {}", page.get() + 1, pages())}
        </span>
        <button
          disabled=move || page.get() + 1 >= pages()
          on:click=move |_| page.update(|p| *p += 1)
        >
          "Next"
        </button>
      </div>
    }
}
