use crate::error::AppError;

/// Rejected locally; whitespace-only feedback never reaches the store.
pub fn validate_feedback(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::validation(
            "Please provide some feedback before submitting",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(validate_feedback("").is_err());
        assert!(validate_feedback("   \n\t ").is_err());
        assert!(validate_feedback("loved the timeline").is_ok());
    }
}
