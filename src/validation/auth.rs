use crate::error::AppError;

/// Canonical form used for passcode keys and account lookup. Applied once
/// at the entry point so every downstream store sees the same address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if email.trim().is_empty() {
        return Err(AppError::validation("Email is required"));
    }

    if !email.contains('@') || !email.contains('.') {
        return Err(AppError::validation("Invalid email format"));
    }

    Ok(())
}

pub fn validate_otp_code(code: &str) -> Result<(), AppError> {
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::validation("Verification code must be 6 characters"));
    }

    Ok(())
}
