//! Records mirrored from the backend's relational schema. The frontend
//! only displays these and patches them through REST calls.

use serde::{Deserialize, Serialize};

pub use verdicts_core::notifications::Notification;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Attorney {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub firm_name: String,
    pub bar_number: String,
    pub practice_state: String,
    pub phone: String,
    pub verification_status: String,
}

impl Attorney {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Juror {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub residency_county: String,
    pub phone: String,
    pub verification_status: String,
}

impl Juror {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: i64,
    pub title: String,
    pub case_type: String,
    pub status: String,
    pub county: String,
    pub attorney_name: String,
    pub trial_date: String,
    pub summary: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub case_id: i64,
    pub case_title: String,
    pub status: String,
    pub submitted_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WitnessCase {
    pub id: i64,
    pub case_id: i64,
    pub witness_name: String,
    pub side: String,
    pub summary: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JuryQuestion {
    pub id: i64,
    pub case_id: i64,
    pub position: u32,
    pub prompt: String,
    pub answer_kind: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboardStats {
    pub total_attorneys: i64,
    pub total_jurors: i64,
    pub total_cases: i64,
    pub pending_reviews: i64,
    pub trials_ready: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialSlot {
    pub case_id: i64,
    pub case_title: String,
    pub scheduled_at: String,
    pub attorneys_present: u32,
    pub jurors_seated: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: String,
    pub cases: Vec<Case>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: serde_json::Value,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinTrialResponse {
    pub join_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}
