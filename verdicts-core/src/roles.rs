use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Attorney,
    Juror,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Attorney => "attorney",
            Role::Juror => "juror",
        }
    }

    pub fn parse(raw: &str) -> Option<Role> {
        match raw.to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "attorney" => Some(Role::Attorney),
            "juror" => Some(Role::Juror),
            _ => None,
        }
    }
}

/// Administrator-gated flag unlocking restricted dashboard sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    /// Unknown strings from the backend degrade to `Pending`.
    pub fn parse(raw: &str) -> VerificationStatus {
        match raw.to_ascii_lowercase().as_str() {
            "verified" | "approved" => VerificationStatus::Verified,
            "rejected" | "declined" => VerificationStatus::Rejected,
            _ => VerificationStatus::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
        }
    }

    pub fn is_verified(self) -> bool {
        matches!(self, VerificationStatus::Verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Admin, Role::Attorney, Role::Juror] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("paralegal"), None);
    }

    #[test]
    fn unknown_verification_status_degrades_to_pending() {
        assert_eq!(VerificationStatus::parse("verified"), VerificationStatus::Verified);
        assert_eq!(VerificationStatus::parse("REJECTED"), VerificationStatus::Rejected);
        assert_eq!(VerificationStatus::parse("weird"), VerificationStatus::Pending);
    }
}
