use crate::db::models::form_state::Selection;
use crate::error::AppError;

/// Display names of the six required fields, in the order they are reported
/// when missing. The order is part of the contract; tests pin it.
pub const CURRENT_ROLE: &str = "Current Role";
pub const FUTURE_ROLE: &str = "Future Role";
pub const TIMEFRAME: &str = "Timeframe";
pub const LOCATION: &str = "Location";
pub const CAREER_PRIORITY: &str = "Career Priority";
pub const MENTOR_STYLE: &str = "Mentor Style";

/// Presence check only; a custom free-text override satisfies its field.
pub fn missing_fields(selection: &Selection) -> Vec<&'static str> {
    let mut missing = Vec::new();

    if selection.current_role.trim().is_empty() && selection.custom_current_role.trim().is_empty() {
        missing.push(CURRENT_ROLE);
    }
    if selection.future_role.trim().is_empty() && selection.custom_future_role.trim().is_empty() {
        missing.push(FUTURE_ROLE);
    }
    if selection.timeframe.is_none() {
        missing.push(TIMEFRAME);
    }
    if selection.location.trim().is_empty() {
        missing.push(LOCATION);
    }
    if selection.priority.is_none() {
        missing.push(CAREER_PRIORITY);
    }
    if selection.mentor_style.is_none() {
        missing.push(MENTOR_STYLE);
    }

    missing
}

pub fn validate_selection(selection: &Selection) -> Result<(), AppError> {
    let missing = missing_fields(selection);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Please fill all the fields to generate your roadmap. Missing: {}",
            missing.join(", ")
        )))
    }
}
