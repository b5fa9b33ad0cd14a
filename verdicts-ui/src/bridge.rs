//! Typed fetch wrappers over the Quick Verdicts REST API.
//!
//! Every endpoint gets a small async function returning
//! `Result<T, ApiError>`; callers decide whether a failure degrades to an
//! empty state or surfaces as an alert.

use crate::config;
use crate::dto::{
    AdminDashboardStats, Application, Attorney, Case, CalendarDay, CountResponse,
    JoinTrialResponse, JuryQuestion, Juror, LoginResponse, Notification, StatusResponse,
    TrialSlot, WitnessCase,
};
use crate::error::ApiError;
use crate::session;
use serde::de::DeserializeOwned;
use serde::Serialize;
use verdicts_core::roles::{Role, VerificationStatus};
use verdicts_core::signup::SignupForm;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}

/// Pulls a human-readable message out of an error body. Backends answer
/// with `{"message": ...}` or `{"error": ...}`; anything else is used raw.
fn status_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(serde_json::Value::as_str) {
                return message.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "request failed".to_string()
    } else {
        trimmed.to_string()
    }
}

async fn send(method: &str, path: &str, body: Option<String>) -> Result<String, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let url = format!("{}{}", config::api_base_url(), path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }
    if let Some(token) = session::token() {
        request
            .headers()
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(js_error)?;
    }

    let window =
        web_sys::window().ok_or_else(|| ApiError::Network("window not available".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not return a Response".into()))?;

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = text.as_string().unwrap_or_default();

    if !response.ok() {
        return Err(ApiError::Status(response.status(), status_message(&text)));
    }
    Ok(text)
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let text = send("GET", path, None).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_text(path: &str) -> Result<String, ApiError> {
    send("GET", path, None).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let text = send("POST", path, Some(body)).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST where only success matters; the response body is discarded.
async fn post_ok<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    send("POST", path, Some(body)).await.map(|_| ())
}

async fn patch_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let text = send("PATCH", path, Some(body)).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

// --- auth ---

pub async fn login(role: Role, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    post_json(
        &format!("/api/auth/{}/login", role.as_str()),
        &serde_json::json!({ "email": email, "password": password }),
    )
    .await
}

pub async fn send_otp(role: Role, email: &str) -> Result<(), ApiError> {
    post_ok(
        &format!("/api/auth/{}/send-otp", role.as_str()),
        &serde_json::json!({ "email": email }),
    )
    .await
}

pub async fn verify_otp(role: Role, email: &str, code: &str) -> Result<(), ApiError> {
    post_ok(
        &format!("/api/auth/{}/verify-otp", role.as_str()),
        &serde_json::json!({ "email": email, "code": code }),
    )
    .await
}

pub async fn submit_signup(role: Role, form: &SignupForm) -> Result<LoginResponse, ApiError> {
    post_json(&format!("/api/auth/{}/signup", role.as_str()), form).await
}

// --- admin ---

pub async fn admin_dashboard() -> Result<AdminDashboardStats, ApiError> {
    get_json("/api/admin/dashboard").await
}

pub async fn admin_attorneys() -> Result<Vec<Attorney>, ApiError> {
    get_json("/api/admin/attorneys").await
}

pub async fn admin_jurors() -> Result<Vec<Juror>, ApiError> {
    get_json("/api/admin/jurors").await
}

pub async fn admin_pending_cases() -> Result<Vec<Case>, ApiError> {
    get_json("/api/admin/cases/pending").await
}

pub async fn admin_review_case(case_id: i64, approve: bool, note: &str) -> Result<(), ApiError> {
    post_ok(
        &format!("/api/admin/cases/{case_id}/review"),
        &serde_json::json!({
            "decision": if approve { "approve" } else { "reject" },
            "note": note,
        }),
    )
    .await
}

pub async fn admin_set_verification(
    role: Role,
    account_id: i64,
    status: VerificationStatus,
) -> Result<(), ApiError> {
    post_ok(
        &format!("/api/admin/{}s/{account_id}/verify", role.as_str()),
        &serde_json::json!({ "status": status.as_str() }),
    )
    .await
}

pub async fn admin_cases_by_date(year: i32, month: u32) -> Result<Vec<CalendarDay>, ApiError> {
    get_json(&format!(
        "/api/admin/calendar/cases-by-date?year={year}&month={month}"
    ))
    .await
}

pub async fn admin_trials_ready() -> Result<Vec<TrialSlot>, ApiError> {
    get_json("/api/admin/trials/ready").await
}

pub async fn admin_join_trial(case_id: i64) -> Result<JoinTrialResponse, ApiError> {
    post_json(
        &format!("/api/trial/admin-join/{case_id}"),
        &serde_json::json!({}),
    )
    .await
}

// --- case exports / war room ---

pub async fn export_witness_list(case_id: i64) -> Result<String, ApiError> {
    get_text(&format!("/api/cases/{case_id}/witnesses/export/text")).await
}

pub async fn export_jury_charge_text(case_id: i64) -> Result<String, ApiError> {
    get_text(&format!("/api/cases/{case_id}/jury-charge/export/text")).await
}

pub async fn export_jury_charge_ms_forms(case_id: i64) -> Result<String, ApiError> {
    get_text(&format!("/api/cases/{case_id}/jury-charge/export/ms-forms")).await
}

pub async fn case_witnesses(case_id: i64) -> Result<Vec<WitnessCase>, ApiError> {
    get_json(&format!("/api/cases/{case_id}/witnesses")).await
}

pub async fn case_jury_questions(case_id: i64) -> Result<Vec<JuryQuestion>, ApiError> {
    get_json(&format!("/api/cases/{case_id}/jury-charge/questions")).await
}

// --- attorney ---

pub async fn attorney_profile() -> Result<Attorney, ApiError> {
    get_json("/api/attorney/profile").await
}

pub async fn update_attorney_profile(profile: &Attorney) -> Result<Attorney, ApiError> {
    patch_json("/api/attorney/profile", profile).await
}

pub async fn attorney_cases() -> Result<Vec<Case>, ApiError> {
    get_json("/api/attorney/cases").await
}

// --- juror ---

pub async fn juror_profile() -> Result<Juror, ApiError> {
    get_json("/api/juror/profile").await
}

pub async fn update_juror_profile(profile: &Juror) -> Result<Juror, ApiError> {
    patch_json("/api/juror/profile", profile).await
}

pub async fn juror_applications() -> Result<Vec<Application>, ApiError> {
    get_json("/api/juror/applications").await
}

pub async fn juror_available_cases() -> Result<Vec<Case>, ApiError> {
    get_json("/api/juror/cases/available").await
}

pub async fn juror_apply(case_id: i64) -> Result<Application, ApiError> {
    post_json(
        "/api/juror/applications",
        &serde_json::json!({ "case_id": case_id }),
    )
    .await
}

// --- verification ---

pub async fn verification_status(role: Role) -> Result<VerificationStatus, ApiError> {
    let response: StatusResponse =
        get_json(&format!("/api/{}/verification-status", role.as_str())).await?;
    Ok(VerificationStatus::parse(&response.status))
}

// --- notifications ---

pub async fn notifications() -> Result<Vec<Notification>, ApiError> {
    get_json("/api/notifications").await
}

pub async fn unread_notification_count() -> Result<usize, ApiError> {
    let response: CountResponse = get_json("/api/notifications/unread-count").await?;
    Ok(response.count)
}

pub async fn mark_notification_read(id: i64) -> Result<(), ApiError> {
    post_ok(
        &format!("/api/notifications/{id}/read"),
        &serde_json::json!({}),
    )
    .await
}

pub async fn mark_all_notifications_read() -> Result<(), ApiError> {
    post_ok("/api/notifications/read-all", &serde_json::json!({})).await
}

#[cfg(test)]
mod tests {
    use super::status_message;

    #[test]
    fn status_message_prefers_structured_fields() {
        assert_eq!(status_message(r#"{"message":"bad token"}"#), "bad token");
        assert_eq!(status_message(r#"{"error":"not found"}"#), "not found");
    }

    #[test]
    fn status_message_falls_back_to_raw_body() {
        assert_eq!(status_message("  teapot  "), "teapot");
        assert_eq!(status_message(""), "request failed");
        assert_eq!(status_message(r#"{"detail":"x"}"#), r#"{"detail":"x"}"#);
    }
}
