//! Field validators shared by the signup wizard and the profile editors.
//! Each returns `Ok(())` or a user-facing message.

use chrono::{Datelike, NaiveDate};

pub fn validate_required(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{label} is required"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("email is required".into());
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err("email must contain exactly one '@'".into()),
    };
    if local.is_empty() {
        return Err("email is missing the part before '@'".into());
    }
    if domain.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err("email domain looks invalid".into());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("password must be at least 8 characters".into());
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("password must contain a letter".into());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("password must contain a digit".into());
    }
    Ok(())
}

/// Phone numbers arrive with arbitrary punctuation; only the digits count.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if digits < 10 {
        return Err("phone number must contain at least 10 digits".into());
    }
    Ok(())
}

pub fn validate_zip(zip: &str) -> Result<(), String> {
    let zip = zip.trim();
    if zip.len() != 5 || !zip.chars().all(|c| c.is_ascii_digit()) {
        return Err("zip code must be 5 digits".into());
    }
    Ok(())
}

pub fn validate_bar_number(bar_number: &str) -> Result<(), String> {
    let bar_number = bar_number.trim();
    if bar_number.is_empty() {
        return Err("bar number is required".into());
    }
    if !bar_number.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("bar number may only contain letters and digits".into());
    }
    Ok(())
}

pub fn validate_adult_age(age: &str) -> Result<(), String> {
    let age = age.trim();
    let parsed: u32 = age
        .parse()
        .map_err(|_| "age must be a number".to_string())?;
    if parsed < 18 {
        return Err("jurors must be at least 18".into());
    }
    if parsed > 120 {
        return Err("age looks invalid".into());
    }
    Ok(())
}

/// Expects `YYYY-MM-DD` (the wire format of date inputs) and an 18th
/// birthday on or before `today`.
pub fn validate_date_of_birth(dob: &str, today: NaiveDate) -> Result<(), String> {
    let date = NaiveDate::parse_from_str(dob.trim(), "%Y-%m-%d")
        .map_err(|_| "date of birth must be YYYY-MM-DD".to_string())?;
    if date > today {
        return Err("date of birth is in the future".into());
    }
    let cutoff = NaiveDate::from_ymd_opt(today.year() - 18, today.month(), today.day())
        .or_else(|| NaiveDate::from_ymd_opt(today.year() - 18, today.month(), 28));
    match cutoff {
        Some(cutoff) if date <= cutoff => Ok(()),
        _ => Err("jurors must be at least 18".into()),
    }
}

/// OTP codes are exactly six ASCII digits; nothing else may be submitted.
pub fn is_valid_otp(code: &str) -> bool {
    code.len() == 6 && code.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_emails() {
        assert!(validate_email("pat@example.com").is_ok());
        assert!(validate_email("  pat@example.com ").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("pat").is_err());
        assert!(validate_email("pat@").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("pat@example").is_err());
        assert!(validate_email("a@b@c.com").is_err());
    }

    #[test]
    fn password_needs_length_letter_and_digit() {
        assert!(validate_password("abc12").is_err());
        assert!(validate_password("abcdefgh").is_err());
        assert!(validate_password("12345678").is_err());
        assert!(validate_password("abcdef12").is_ok());
    }

    #[test]
    fn phone_counts_digits_only() {
        assert!(validate_phone("(555) 123-4567").is_ok());
        assert!(validate_phone("555-1234").is_err());
    }

    #[test]
    fn zip_is_exactly_five_digits() {
        assert!(validate_zip("78701").is_ok());
        assert!(validate_zip("7870").is_err());
        assert!(validate_zip("78701-1234").is_err());
    }

    #[test]
    fn otp_requires_exactly_six_digits() {
        assert!(is_valid_otp("123456"));
        assert!(!is_valid_otp("12345"));
        assert!(!is_valid_otp("1234567"));
        assert!(!is_valid_otp("12345a"));
        assert!(!is_valid_otp(""));
    }

    #[test]
    fn date_of_birth_enforces_adulthood() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).expect("date");
        assert!(validate_date_of_birth("2008-08-07", today).is_ok());
        assert!(validate_date_of_birth("2008-08-08", today).is_err());
        assert!(validate_date_of_birth("1990-01-15", today).is_ok());
        assert!(validate_date_of_birth("2030-01-01", today).is_err());
        assert!(validate_date_of_birth("15/01/1990", today).is_err());
    }
}
