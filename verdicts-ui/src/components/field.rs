use leptos::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, optional)] error: MaybeSignal<Option<String>>,
    #[prop(into, optional)] input_type: String,
    #[prop(into, optional)] placeholder: String,
) -> impl IntoView {
    let kind = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };
    view! {
      <label class="field">
        <span class="field-label">{label}</span>
        <input
          type=kind
          placeholder=placeholder
          prop:value=move || value.get()
          on:input=move |ev| on_input.call(event_target_value(&ev))
        />
        {move || {
            error
                .get()
                .map(|message| view! { <span class="field-error">{message}</span> })
        }}
      </label>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    options: Vec<String>,
    #[prop(into, optional)] error: MaybeSignal<Option<String>>,
) -> impl IntoView {
    view! {
      <label class="field">
        <span class="field-label">{label}</span>
        <select on:change=move |ev| on_change.call(event_target_value(&ev))>
          <option value="" selected=move || value.get().is_empty()>"Select..."</option>
          {options
              .into_iter()
              .map(|option| {
                  let attr = option.clone();
                  let is_selected = {
                      let option = option.clone();
                      move || value.get() == option
                  };
                  view! { <option value=attr selected=is_selected>{option}</option> }
              })
              .collect_view()}
        </select>
        {move || {
            error
                .get()
                .map(|message| view! { <span class="field-error">{message}</span> })
        }}
      </label>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
    #[prop(into, optional)] error: MaybeSignal<Option<String>>,
) -> impl IntoView {
    view! {
      <label class="field field-checkbox">
        <input
          type="checkbox"
          prop:checked=move || checked.get()
          on:change=move |ev| on_toggle.call(event_target_checked(&ev))
        />
        <span class="field-label">{label}</span>
        {move || {
            error
                .get()
                .map(|message| view! { <span class="field-error">{message}</span> })
        }}
      </label>
    }
}
