//! The multi-step signup wizard. Screen selection lives in the
//! `verdicts-core` reducer; this page renders the live screen, reports
//! network outcomes back as actions, and persists the draft.

use crate::bridge;
use crate::components::field::{CheckboxField, SelectField, TextField};
use crate::components::stepper::StepperNav;
use crate::dom;
use crate::storage;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use leptos_router::{use_navigate, use_params_map, A};
use std::time::Duration;
use verdicts_core::roles::Role;
use verdicts_core::signup::{
    reduce, AuthSubStep, Field, PersonalSubStep, SignupAction, SignupDraft, SignupState, Step,
};
use verdicts_core::validate::is_valid_otp;
use wasm_bindgen_futures::spawn_local;

const DRAFT_SAVE_DELAY_MS: u64 = 200;

const AGREEMENT_TEXT: &str = "\
Quick Verdicts Participation Agreement

1. Mock proceedings. All trials conducted through Quick Verdicts are \
simulated proceedings. Verdicts rendered here are advisory and carry no \
legal force.

2. Confidentiality. Case materials, witness statements, and deliberations \
are confidential. You agree not to disclose, copy, or distribute any \
material you access through the platform.

3. Compensation. Juror compensation, where offered, is set per case and \
paid only for completed service. Attorneys are billed per the fee \
schedule accepted at case submission.

4. Conduct. You agree to participate honestly, to disclose conflicts of \
interest, and to follow the presiding administrator's instructions during \
proceedings.

5. Accounts. Accounts are personal and non-transferable. Quick Verdicts \
may suspend accounts that provide false eligibility information.

6. Data. Profile and case data are processed to operate the service as \
described in the privacy notice. You may request deletion of your account \
at any time.

Scroll to the end, then confirm below to continue.";

#[component]
pub fn SignupPage() -> impl IntoView {
    let params = use_params_map();
    let role = params
        .with_untracked(|p| p.get("role").and_then(|raw| Role::parse(raw)))
        .filter(|r| *r != Role::Admin);

    let Some(role) = role else {
        let navigate = use_navigate();
        create_effect(move |_| navigate("/login", Default::default()));
        return ().into_view();
    };

    let today = chrono::Utc::now().date_naive();
    let initial = {
        let state = SignupState::new(role, today);
        match storage::load_draft(role) {
            Some(draft) => reduce(state, SignupAction::Restore(draft)),
            None => state,
        }
    };
    let state = create_rw_signal(initial);

    let dispatch = move |action: SignupAction| state.update(|s| *s = reduce(s.clone(), action));

    // Debounced draft persistence; cleared once the wizard completes.
    let pending_save = store_value(None::<TimeoutHandle>);
    create_effect(move |_| {
        let snapshot = state.get();
        if let Some(handle) = pending_save.get_value() {
            handle.clear();
        }
        if snapshot.step == Step::Success {
            storage::clear_draft(snapshot.role);
            pending_save.set_value(None);
            return;
        }
        let draft = SignupDraft::capture(&snapshot);
        let handle = set_timeout_with_handle(
            move || storage::save_draft(&draft),
            Duration::from_millis(DRAFT_SAVE_DELAY_MS),
        )
        .ok();
        pending_save.set_value(handle);
    });

    let value_of = move |field: Field| Signal::derive(move || state.with(|s| s.form.get(field)));
    let set_field =
        move |field: Field| move |value: String| dispatch(SignupAction::Set(field, value));
    let error_of =
        move |field: Field| Signal::derive(move || state.with(|s| s.errors.get(&field).cloned()));

    let send_code = move |_| {
        dispatch(SignupAction::Next);
        let snapshot = state.get_untracked();
        if !snapshot.errors.is_empty() {
            return;
        }
        let email = snapshot.form.email.trim().to_string();
        spawn_local(async move {
            match bridge::send_otp(role, &email).await {
                Ok(()) => dispatch(SignupAction::OtpRequested),
                Err(err) => {
                    logging::error!("send-otp failed: {err}");
                    dom::alert(&format!("Could not send the verification code: {err}"));
                }
            }
        });
    };

    let verify_code = move |_| {
        let snapshot = state.get_untracked();
        let code = snapshot.form.otp_code.clone();
        if !is_valid_otp(&code) {
            return;
        }
        let email = snapshot.form.email.trim().to_string();
        spawn_local(async move {
            match bridge::verify_otp(role, &email, &code).await {
                Ok(()) => dispatch(SignupAction::OtpVerified),
                Err(err) => {
                    logging::error!("verify-otp failed: {err}");
                    dom::alert(&format!("That code was not accepted: {err}"));
                }
            }
        });
    };

    let submit = move |_| {
        let snapshot = state.get_untracked();
        if !(snapshot.form.agreement_accepted && snapshot.agreement_scrolled) {
            dispatch(SignupAction::Submitted);
            return;
        }
        let form = snapshot.form.clone();
        spawn_local(async move {
            match bridge::submit_signup(role, &form).await {
                Ok(_) => dispatch(SignupAction::Submitted),
                Err(err) => {
                    logging::error!("signup submission failed: {err}");
                    dom::alert(&format!("Signup failed: {err}"));
                }
            }
        });
    };

    let on_agreement_scroll = move |ev: web_sys::Event| {
        let target = event_target::<web_sys::Element>(&ev);
        if dom::scrolled_to_bottom(&target) {
            dispatch(SignupAction::AgreementScrolled);
        }
    };

    let criteria_view = move || {
        if role == Role::Attorney {
            view! {
              <TextField
                label="Bar number"
                value=value_of(Field::BarNumber)
                on_input=set_field(Field::BarNumber)
                error=error_of(Field::BarNumber)
              />
              <TextField
                label="State of practice"
                value=value_of(Field::PracticeState)
                on_input=set_field(Field::PracticeState)
                error=error_of(Field::PracticeState)
              />
              <TextField
                label="Firm name"
                value=value_of(Field::FirmName)
                on_input=set_field(Field::FirmName)
                error=error_of(Field::FirmName)
              />
            }
            .into_view()
        } else {
            view! {
              <TextField
                label="County of residency"
                value=value_of(Field::ResidencyCounty)
                on_input=set_field(Field::ResidencyCounty)
                error=error_of(Field::ResidencyCounty)
              />
              <TextField
                label="Age"
                value=value_of(Field::Age)
                on_input=set_field(Field::Age)
                error=error_of(Field::Age)
                input_type="number"
              />
              <CheckboxField
                label="I am a United States citizen"
                checked=Signal::derive(move || state.with(|s| s.form.is_citizen))
                on_toggle=move |v: bool| dispatch(SignupAction::SetCitizen(v))
                error=error_of(Field::Citizenship)
              />
            }
            .into_view()
        }
    };

    let demographics_view = move || {
        view! {
          <TextField
            label="First name"
            value=value_of(Field::FirstName)
            on_input=set_field(Field::FirstName)
            error=error_of(Field::FirstName)
          />
          <TextField
            label="Last name"
            value=value_of(Field::LastName)
            on_input=set_field(Field::LastName)
            error=error_of(Field::LastName)
          />
          <TextField
            label="Date of birth"
            value=value_of(Field::DateOfBirth)
            on_input=set_field(Field::DateOfBirth)
            error=error_of(Field::DateOfBirth)
            input_type="date"
          />
          <SelectField
            label="Gender (optional)"
            value=value_of(Field::Gender)
            on_change=set_field(Field::Gender)
            options=vec![
                "Female".to_string(),
                "Male".to_string(),
                "Nonbinary".to_string(),
                "Prefer not to say".to_string(),
            ]
          />
          <TextField
            label="Occupation (optional)"
            value=value_of(Field::Occupation)
            on_input=set_field(Field::Occupation)
          />
        }
    };

    let contact_view = move || {
        view! {
          <TextField
            label="Phone"
            value=value_of(Field::Phone)
            on_input=set_field(Field::Phone)
            error=error_of(Field::Phone)
            input_type="tel"
          />
          <TextField
            label="Street address"
            value=value_of(Field::AddressLine)
            on_input=set_field(Field::AddressLine)
            error=error_of(Field::AddressLine)
          />
          <TextField
            label="City"
            value=value_of(Field::City)
            on_input=set_field(Field::City)
            error=error_of(Field::City)
          />
          <TextField
            label="State"
            value=value_of(Field::State)
            on_input=set_field(Field::State)
            error=error_of(Field::State)
          />
          <TextField
            label="Zip code"
            value=value_of(Field::Zip)
            on_input=set_field(Field::Zip)
            error=error_of(Field::Zip)
          />
        }
    };

    let personal_view = move || {
        if role == Role::Juror {
            match state.with(|s| s.personal_sub_step) {
                PersonalSubStep::Demographics => demographics_view().into_view(),
                PersonalSubStep::Contact => contact_view().into_view(),
            }
        } else {
            view! {
              <TextField
                label="First name"
                value=value_of(Field::FirstName)
                on_input=set_field(Field::FirstName)
                error=error_of(Field::FirstName)
              />
              <TextField
                label="Last name"
                value=value_of(Field::LastName)
                on_input=set_field(Field::LastName)
                error=error_of(Field::LastName)
              />
              {contact_view()}
            }
            .into_view()
        }
    };

    let credentials_view = move || {
        view! {
          <TextField
            label="Email"
            value=value_of(Field::Email)
            on_input=set_field(Field::Email)
            error=error_of(Field::Email)
            input_type="email"
          />
          <TextField
            label="Password"
            value=value_of(Field::Password)
            on_input=set_field(Field::Password)
            error=error_of(Field::Password)
            input_type="password"
          />
          <TextField
            label="Confirm password"
            value=value_of(Field::ConfirmPassword)
            on_input=set_field(Field::ConfirmPassword)
            error=error_of(Field::ConfirmPassword)
            input_type="password"
          />
          <button class="primary" on:click=send_code>"Send verification code"</button>
        }
    };

    let otp_view = move || {
        let code_valid = move || state.with(|s| is_valid_otp(&s.form.otp_code));
        view! {
          <p>
            "We emailed a 6-digit code to "
            <b>{move || state.with(|s| s.form.email.clone())}</b>
            ". Enter it below."
          </p>
          <TextField
            label="Verification code"
            value=value_of(Field::OtpCode)
            on_input=set_field(Field::OtpCode)
            error=error_of(Field::OtpCode)
            placeholder="6 digits"
          />
          <div class="row">
            <button class="primary" disabled=move || !code_valid() on:click=verify_code>
              "Verify"
            </button>
            <button on:click=send_code>"Resend code"</button>
          </div>
        }
    };

    let agreement_view = move || {
        view! {
          <div class="agreement" on:scroll=on_agreement_scroll>
            <pre>{AGREEMENT_TEXT}</pre>
          </div>
          <CheckboxField
            label="I have read and accept the participation agreement"
            checked=Signal::derive(move || state.with(|s| s.form.agreement_accepted))
            on_toggle=move |v: bool| dispatch(SignupAction::SetAgreementAccepted(v))
            error=error_of(Field::Agreement)
          />
          <button class="primary" on:click=submit>"Create account"</button>
        }
    };

    let success_view = move || {
        view! {
          <h3>"Welcome to Quick Verdicts"</h3>
          <p>"Your account was created and your email is verified."</p>
          <A href="/login">"Go to sign in"</A>
        }
    };

    let screen = move || {
        let (step, auth_sub_step) = state.with(|s| (s.step, s.auth_sub_step));
        match (step, auth_sub_step) {
            (Step::Criteria, _) => criteria_view().into_view(),
            (Step::Personal, _) => personal_view().into_view(),
            (Step::Credentials, AuthSubStep::Credentials) => credentials_view().into_view(),
            (Step::Credentials, AuthSubStep::Otp) => otp_view().into_view(),
            (Step::Agreement, _) => agreement_view().into_view(),
            (Step::Success, _) => success_view().into_view(),
        }
    };

    let show_back = move || {
        state.with(|s| !matches!(s.step, Step::Criteria | Step::Success))
    };
    let show_next = move || state.with(|s| matches!(s.step, Step::Criteria | Step::Personal));

    view! {
      <section class="panel wizard">
        <h2>{format!("{} signup", capitalize(role.as_str()))}</h2>
        <StepperNav current=Signal::derive(move || state.with(|s| s.step.number())) />

        <div class="wizard-screen">{screen}</div>

        <div class="row wizard-nav">
          <Show when=show_back fallback=|| ()>
            <button on:click=move |_| dispatch(SignupAction::Back)>"Back"</button>
          </Show>
          <Show when=show_next fallback=|| ()>
            <button class="primary" on:click=move |_| dispatch(SignupAction::Next)>"Next"</button>
          </Show>
        </div>
      </section>
    }
    .into_view()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
