use leptos::*;
use verdicts_core::signup::Step;

const STEPS: [Step; 5] = [
    Step::Criteria,
    Step::Personal,
    Step::Credentials,
    Step::Agreement,
    Step::Success,
];

#[component]
pub fn StepperNav(#[prop(into)] current: Signal<u8>) -> impl IntoView {
    view! {
      <ol class="stepper">
        {STEPS
            .into_iter()
            .map(|step| {
                let number = step.number();
                view! {
                  <li
                    class="stepper-step"
                    class:current=move || current.get() == number
                    class:done=move || (current.get() > number)
                  >
                    <span class="stepper-index">{number}</span>
                    <span class="stepper-title">{step.title()}</span>
                  </li>
                }
            })
            .collect_view()}
      </ol>
    }
}
