//! The signup wizard state machine.
//!
//! The wizard is a pure reducer over a tagged step/sub-step union. The UI
//! layer owns the network calls (send-otp, verify-otp, final submission)
//! and reports their outcomes back as actions; the reducer only decides
//! which screen is live and whether a forward transition is allowed.

use crate::roles::Role;
use crate::validate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Step {
    Criteria,
    Personal,
    Credentials,
    Agreement,
    Success,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::Criteria => 1,
            Step::Personal => 2,
            Step::Credentials => 3,
            Step::Agreement => 4,
            Step::Success => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Criteria => "Eligibility",
            Step::Personal => "Personal details",
            Step::Credentials => "Email & password",
            Step::Agreement => "Agreement",
            Step::Success => "Done",
        }
    }
}

/// Juror-only split of the personal-details step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonalSubStep {
    Demographics,
    Contact,
}

/// Credentials entry vs. the OTP verification screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthSubStep {
    Credentials,
    Otp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    BarNumber,
    PracticeState,
    FirmName,
    ResidencyCounty,
    Age,
    Citizenship,
    FirstName,
    LastName,
    DateOfBirth,
    Gender,
    Occupation,
    Phone,
    AddressLine,
    City,
    State,
    Zip,
    Email,
    Password,
    ConfirmPassword,
    OtpCode,
    Agreement,
}

pub type FieldErrors = BTreeMap<Field, String>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupForm {
    pub bar_number: String,
    pub practice_state: String,
    pub firm_name: String,
    pub residency_county: String,
    pub age: String,
    pub is_citizen: bool,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub occupation: String,
    pub phone: String,
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub otp_code: String,
    pub agreement_accepted: bool,
}

impl SignupForm {
    /// Boolean fields read back as `"true"` / `"false"`.
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::BarNumber => self.bar_number.clone(),
            Field::PracticeState => self.practice_state.clone(),
            Field::FirmName => self.firm_name.clone(),
            Field::ResidencyCounty => self.residency_county.clone(),
            Field::Age => self.age.clone(),
            Field::Citizenship => self.is_citizen.to_string(),
            Field::FirstName => self.first_name.clone(),
            Field::LastName => self.last_name.clone(),
            Field::DateOfBirth => self.date_of_birth.clone(),
            Field::Gender => self.gender.clone(),
            Field::Occupation => self.occupation.clone(),
            Field::Phone => self.phone.clone(),
            Field::AddressLine => self.address_line.clone(),
            Field::City => self.city.clone(),
            Field::State => self.state.clone(),
            Field::Zip => self.zip.clone(),
            Field::Email => self.email.clone(),
            Field::Password => self.password.clone(),
            Field::ConfirmPassword => self.confirm_password.clone(),
            Field::OtpCode => self.otp_code.clone(),
            Field::Agreement => self.agreement_accepted.to_string(),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::BarNumber => self.bar_number = value,
            Field::PracticeState => self.practice_state = value,
            Field::FirmName => self.firm_name = value,
            Field::ResidencyCounty => self.residency_county = value,
            Field::Age => self.age = value,
            Field::Citizenship => self.is_citizen = value == "true",
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::DateOfBirth => self.date_of_birth = value,
            Field::Gender => self.gender = value,
            Field::Occupation => self.occupation = value,
            Field::Phone => self.phone = value,
            Field::AddressLine => self.address_line = value,
            Field::City => self.city = value,
            Field::State => self.state = value,
            Field::Zip => self.zip = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::OtpCode => self.otp_code = value,
            Field::Agreement => self.agreement_accepted = value == "true",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupState {
    pub role: Role,
    pub step: Step,
    pub personal_sub_step: PersonalSubStep,
    pub auth_sub_step: AuthSubStep,
    pub form: SignupForm,
    pub agreement_scrolled: bool,
    pub errors: FieldErrors,
    pub today: NaiveDate,
}

impl SignupState {
    pub fn new(role: Role, today: NaiveDate) -> SignupState {
        SignupState {
            role,
            step: Step::Criteria,
            personal_sub_step: PersonalSubStep::Demographics,
            auth_sub_step: AuthSubStep::Credentials,
            form: SignupForm::default(),
            agreement_scrolled: false,
            errors: FieldErrors::new(),
            today,
        }
    }

    /// Validation outcome for the screen that is currently live.
    pub fn current_errors(&self) -> FieldErrors {
        validate_step(
            self.role,
            self.step,
            self.personal_sub_step,
            &self.form,
            self.today,
        )
    }

    pub fn error_for(&self, field: Field) -> Option<&String> {
        self.errors.get(&field)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SignupAction {
    Set(Field, String),
    SetCitizen(bool),
    SetAgreementAccepted(bool),
    AgreementScrolled,
    Next,
    Back,
    /// A send-otp call succeeded; show the code entry screen.
    OtpRequested,
    /// A verify-otp call succeeded; the email is confirmed.
    OtpVerified,
    /// The final signup submission succeeded.
    Submitted,
    Restore(SignupDraft),
}

pub fn reduce(mut state: SignupState, action: SignupAction) -> SignupState {
    match action {
        SignupAction::Set(field, value) => {
            state.form.set(field, value);
            state.errors.remove(&field);
        }
        SignupAction::SetCitizen(value) => {
            state.form.is_citizen = value;
            state.errors.remove(&Field::Citizenship);
        }
        SignupAction::SetAgreementAccepted(value) => {
            state.form.agreement_accepted = value;
            state.errors.remove(&Field::Agreement);
        }
        SignupAction::AgreementScrolled => {
            state.agreement_scrolled = true;
        }
        SignupAction::Next => return advance(state),
        SignupAction::Back => return retreat(state),
        SignupAction::OtpRequested => {
            if state.step == Step::Credentials {
                state.auth_sub_step = AuthSubStep::Otp;
                state.form.otp_code.clear();
                state.errors.remove(&Field::OtpCode);
            }
        }
        SignupAction::OtpVerified => {
            if state.step == Step::Credentials && state.auth_sub_step == AuthSubStep::Otp {
                state.step = Step::Agreement;
                state.auth_sub_step = AuthSubStep::Credentials;
                state.errors.clear();
            }
        }
        SignupAction::Submitted => {
            if state.step == Step::Agreement {
                if !state.form.agreement_accepted {
                    state
                        .errors
                        .insert(Field::Agreement, "accept the agreement to continue".into());
                } else if !state.agreement_scrolled {
                    state
                        .errors
                        .insert(Field::Agreement, "read the agreement to the end".into());
                } else {
                    state.step = Step::Success;
                    state.errors.clear();
                }
            }
        }
        SignupAction::Restore(draft) => {
            if draft.role == state.role {
                state.step = draft.step;
                state.personal_sub_step = draft.personal_sub_step;
                state.auth_sub_step = draft.auth_sub_step;
                state.form = draft.form;
                state.agreement_scrolled = false;
                state.errors.clear();
            }
        }
    }
    state
}

fn advance(mut state: SignupState) -> SignupState {
    if state.step == Step::Success {
        return state;
    }

    let errors = state.current_errors();
    if !errors.is_empty() {
        state.errors = errors;
        return state;
    }
    state.errors.clear();

    match state.step {
        Step::Criteria => state.step = Step::Personal,
        Step::Personal => {
            if state.role == Role::Juror && state.personal_sub_step == PersonalSubStep::Demographics
            {
                state.personal_sub_step = PersonalSubStep::Contact;
            } else {
                state.step = Step::Credentials;
                state.auth_sub_step = AuthSubStep::Credentials;
            }
        }
        // Leaving step 3 requires a verified OTP, reported via OtpVerified.
        Step::Credentials => {}
        // Leaving step 4 requires a successful submission, reported via Submitted.
        Step::Agreement => {}
        Step::Success => {}
    }
    state
}

fn retreat(mut state: SignupState) -> SignupState {
    match state.step {
        Step::Criteria | Step::Success => {}
        Step::Personal => {
            if state.role == Role::Juror && state.personal_sub_step == PersonalSubStep::Contact {
                state.personal_sub_step = PersonalSubStep::Demographics;
            } else {
                state.step = Step::Criteria;
            }
        }
        Step::Credentials => {
            if state.auth_sub_step == AuthSubStep::Otp {
                state.auth_sub_step = AuthSubStep::Credentials;
            } else {
                state.step = Step::Personal;
                if state.role == Role::Juror {
                    state.personal_sub_step = PersonalSubStep::Contact;
                }
            }
        }
        Step::Agreement => {
            state.step = Step::Credentials;
            state.auth_sub_step = AuthSubStep::Credentials;
        }
    }
    state.errors.clear();
    state
}

pub fn validate_step(
    role: Role,
    step: Step,
    personal_sub_step: PersonalSubStep,
    form: &SignupForm,
    today: NaiveDate,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut check = |field: Field, result: Result<(), String>| {
        if let Err(message) = result {
            errors.insert(field, message);
        }
    };

    match (step, role) {
        (Step::Criteria, Role::Attorney) => {
            check(Field::BarNumber, validate::validate_bar_number(&form.bar_number));
            check(
                Field::PracticeState,
                validate::validate_required(&form.practice_state, "state of practice"),
            );
            check(
                Field::FirmName,
                validate::validate_required(&form.firm_name, "firm name"),
            );
        }
        (Step::Criteria, Role::Juror) => {
            check(
                Field::ResidencyCounty,
                validate::validate_required(&form.residency_county, "county of residency"),
            );
            check(Field::Age, validate::validate_adult_age(&form.age));
            check(
                Field::Citizenship,
                if form.is_citizen {
                    Ok(())
                } else {
                    Err("jury service requires US citizenship".into())
                },
            );
        }
        (Step::Personal, Role::Juror) => match personal_sub_step {
            PersonalSubStep::Demographics => {
                check(
                    Field::FirstName,
                    validate::validate_required(&form.first_name, "first name"),
                );
                check(
                    Field::LastName,
                    validate::validate_required(&form.last_name, "last name"),
                );
                check(
                    Field::DateOfBirth,
                    validate::validate_date_of_birth(&form.date_of_birth, today),
                );
            }
            PersonalSubStep::Contact => {
                check(Field::Phone, validate::validate_phone(&form.phone));
                check(
                    Field::AddressLine,
                    validate::validate_required(&form.address_line, "address"),
                );
                check(Field::City, validate::validate_required(&form.city, "city"));
                check(Field::State, validate::validate_required(&form.state, "state"));
                check(Field::Zip, validate::validate_zip(&form.zip));
            }
        },
        (Step::Personal, _) => {
            check(
                Field::FirstName,
                validate::validate_required(&form.first_name, "first name"),
            );
            check(
                Field::LastName,
                validate::validate_required(&form.last_name, "last name"),
            );
            check(Field::Phone, validate::validate_phone(&form.phone));
            check(
                Field::AddressLine,
                validate::validate_required(&form.address_line, "address"),
            );
            check(Field::City, validate::validate_required(&form.city, "city"));
            check(Field::State, validate::validate_required(&form.state, "state"));
            check(Field::Zip, validate::validate_zip(&form.zip));
        }
        (Step::Credentials, _) => {
            check(Field::Email, validate::validate_email(&form.email));
            check(Field::Password, validate::validate_password(&form.password));
            check(
                Field::ConfirmPassword,
                if form.confirm_password == form.password {
                    Ok(())
                } else {
                    Err("passwords do not match".into())
                },
            );
        }
        (Step::Agreement, _) | (Step::Success, _) => {}
        (Step::Criteria, Role::Admin) => {}
    }

    errors
}

/// The browser-local draft. Credentials-step secrets are stripped on
/// capture so a restored draft always re-enters credentials entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupDraft {
    pub role: Role,
    pub step: Step,
    pub personal_sub_step: PersonalSubStep,
    pub auth_sub_step: AuthSubStep,
    pub form: SignupForm,
}

impl SignupDraft {
    pub fn storage_key(role: Role) -> String {
        format!("qv.signup.draft.{}", role.as_str())
    }

    pub fn capture(state: &SignupState) -> SignupDraft {
        let mut form = state.form.clone();
        form.password.clear();
        form.confirm_password.clear();
        form.otp_code.clear();
        SignupDraft {
            role: state.role,
            step: state.step,
            personal_sub_step: state.personal_sub_step,
            auth_sub_step: AuthSubStep::Credentials,
            form,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).expect("date")
    }

    fn attorney_through_criteria() -> SignupState {
        let mut state = SignupState::new(Role::Attorney, today());
        state.form.bar_number = "TX12345".into();
        state.form.practice_state = "Texas".into();
        state.form.firm_name = "Crane & Poole".into();
        reduce(state, SignupAction::Next)
    }

    fn juror_with_valid_criteria() -> SignupState {
        let mut state = SignupState::new(Role::Juror, today());
        state.form.residency_county = "Travis".into();
        state.form.age = "34".into();
        state.form.is_citizen = true;
        state
    }

    #[test]
    fn next_never_advances_past_failing_validation() {
        let state = SignupState::new(Role::Attorney, today());
        let state = reduce(state, SignupAction::Next);
        assert_eq!(state.step, Step::Criteria);
        assert!(state.errors.contains_key(&Field::BarNumber));
        assert!(state.errors.contains_key(&Field::FirmName));
    }

    #[test]
    fn valid_criteria_advances_to_personal() {
        let state = attorney_through_criteria();
        assert_eq!(state.step, Step::Personal);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn juror_criteria_requires_citizenship() {
        let mut state = juror_with_valid_criteria();
        state.form.is_citizen = false;
        let state = reduce(state, SignupAction::Next);
        assert_eq!(state.step, Step::Criteria);
        assert!(state.errors.contains_key(&Field::Citizenship));
    }

    #[test]
    fn juror_personal_walks_both_sub_steps() {
        let mut state = juror_with_valid_criteria();
        state.form.first_name = "Dana".into();
        state.form.last_name = "Reyes".into();
        state.form.date_of_birth = "1992-03-11".into();

        let state = reduce(state, SignupAction::Next);
        assert_eq!(state.step, Step::Personal);
        assert_eq!(state.personal_sub_step, PersonalSubStep::Demographics);

        let mut state = reduce(state, SignupAction::Next);
        assert_eq!(state.personal_sub_step, PersonalSubStep::Contact);

        state.form.phone = "512-555-0188".into();
        state.form.address_line = "12 Oak Ln".into();
        state.form.city = "Austin".into();
        state.form.state = "TX".into();
        state.form.zip = "78701".into();
        let state = reduce(state, SignupAction::Next);
        assert_eq!(state.step, Step::Credentials);
    }

    #[test]
    fn next_on_credentials_waits_for_otp() {
        let mut state = attorney_through_criteria();
        state.step = Step::Credentials;
        state.form.email = "pat@example.com".into();
        state.form.password = "hunter4242".into();
        state.form.confirm_password = "hunter4242".into();

        let state = reduce(state, SignupAction::Next);
        assert_eq!(state.step, Step::Credentials);
        assert_eq!(state.auth_sub_step, AuthSubStep::Credentials);

        let state = reduce(state, SignupAction::OtpRequested);
        assert_eq!(state.auth_sub_step, AuthSubStep::Otp);

        let state = reduce(state, SignupAction::OtpVerified);
        assert_eq!(state.step, Step::Agreement);
        assert_eq!(state.auth_sub_step, AuthSubStep::Credentials);
    }

    #[test]
    fn otp_verified_is_ignored_outside_the_otp_screen() {
        let state = attorney_through_criteria();
        let state = reduce(state, SignupAction::OtpVerified);
        assert_eq!(state.step, Step::Personal);
    }

    #[test]
    fn submission_requires_scroll_and_acceptance() {
        let mut state = attorney_through_criteria();
        state.step = Step::Agreement;

        let state = reduce(state, SignupAction::Submitted);
        assert_eq!(state.step, Step::Agreement);
        assert!(state.errors.contains_key(&Field::Agreement));

        let state = reduce(state, SignupAction::SetAgreementAccepted(true));
        let state = reduce(state, SignupAction::Submitted);
        assert_eq!(state.step, Step::Agreement);

        let state = reduce(state, SignupAction::AgreementScrolled);
        let state = reduce(state, SignupAction::Submitted);
        assert_eq!(state.step, Step::Success);
    }

    #[test]
    fn success_is_terminal() {
        let mut state = attorney_through_criteria();
        state.step = Step::Success;
        let state = reduce(state, SignupAction::Next);
        assert_eq!(state.step, Step::Success);
        let state = reduce(state, SignupAction::Back);
        assert_eq!(state.step, Step::Success);
    }

    #[test]
    fn back_collapses_sub_steps_before_the_main_step() {
        let mut state = SignupState::new(Role::Juror, today());
        state.step = Step::Credentials;
        state.auth_sub_step = AuthSubStep::Otp;

        let state = reduce(state, SignupAction::Back);
        assert_eq!(state.step, Step::Credentials);
        assert_eq!(state.auth_sub_step, AuthSubStep::Credentials);

        let state = reduce(state, SignupAction::Back);
        assert_eq!(state.step, Step::Personal);
        assert_eq!(state.personal_sub_step, PersonalSubStep::Contact);

        let state = reduce(state, SignupAction::Back);
        assert_eq!(state.personal_sub_step, PersonalSubStep::Demographics);

        let state = reduce(state, SignupAction::Back);
        assert_eq!(state.step, Step::Criteria);

        let state = reduce(state, SignupAction::Back);
        assert_eq!(state.step, Step::Criteria);
    }

    #[test]
    fn set_clears_the_field_error() {
        let state = SignupState::new(Role::Attorney, today());
        let state = reduce(state, SignupAction::Next);
        assert!(state.errors.contains_key(&Field::BarNumber));

        let state = reduce(state, SignupAction::Set(Field::BarNumber, "TX1".into()));
        assert!(!state.errors.contains_key(&Field::BarNumber));
        assert!(state.errors.contains_key(&Field::FirmName));
    }

    #[test]
    fn draft_round_trips_identically() {
        let mut state = juror_with_valid_criteria();
        state.step = Step::Personal;
        state.personal_sub_step = PersonalSubStep::Contact;
        state.form.first_name = "Dana".into();
        state.form.phone = "512-555-0188".into();

        let draft = SignupDraft::capture(&state);
        let json = serde_json::to_string(&draft).expect("serialize draft");
        let restored: SignupDraft = serde_json::from_str(&json).expect("deserialize draft");
        assert_eq!(restored, draft);

        let fresh = SignupState::new(Role::Juror, today());
        let fresh = reduce(fresh, SignupAction::Restore(restored));
        assert_eq!(fresh.step, Step::Personal);
        assert_eq!(fresh.personal_sub_step, PersonalSubStep::Contact);
        assert_eq!(fresh.form.first_name, "Dana");
    }

    #[test]
    fn capture_strips_credentials_secrets() {
        let mut state = attorney_through_criteria();
        state.form.password = "hunter4242".into();
        state.form.confirm_password = "hunter4242".into();
        state.form.otp_code = "123456".into();

        let draft = SignupDraft::capture(&state);
        assert!(draft.form.password.is_empty());
        assert!(draft.form.confirm_password.is_empty());
        assert!(draft.form.otp_code.is_empty());
        assert_eq!(draft.auth_sub_step, AuthSubStep::Credentials);
    }

    #[test]
    fn restore_ignores_a_draft_for_another_role() {
        let mut attorney = attorney_through_criteria();
        attorney.form.first_name = "Alan".into();
        let draft = SignupDraft::capture(&attorney);

        let juror = SignupState::new(Role::Juror, today());
        let juror = reduce(juror, SignupAction::Restore(draft));
        assert_eq!(juror.step, Step::Criteria);
        assert!(juror.form.first_name.is_empty());
    }
}
