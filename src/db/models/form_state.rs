use serde::{Deserialize, Serialize};

use crate::catalog::{MentorStyle, Priority, Timeframe};

/// The in-progress form selection. Field names serialize in the camelCase
/// shape the client persists, so slot payloads round-trip byte-compatible.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    #[serde(default)]
    pub current_role: String,
    #[serde(default)]
    pub future_role: String,
    #[serde(default)]
    pub timeframe: Option<Timeframe>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub mentor_style: Option<MentorStyle>,
    #[serde(default)]
    pub custom_current_role: String,
    #[serde(default)]
    pub custom_future_role: String,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            current_role: "Software Engineer".to_string(),
            future_role: "Product Manager".to_string(),
            timeframe: Some(Timeframe::SixMonths),
            location: "us".to_string(),
            city: String::new(),
            priority: Some(Priority::Salary),
            mentor_style: Some(MentorStyle::Visionary),
            custom_current_role: String::new(),
            custom_future_role: String::new(),
        }
    }
}

impl Selection {
    /// Custom free-text overrides win over the dropdown value.
    pub fn resolved_current_role(&self) -> &str {
        if self.custom_current_role.trim().is_empty() {
            &self.current_role
        } else {
            &self.custom_current_role
        }
    }

    pub fn resolved_future_role(&self) -> &str {
        if self.custom_future_role.trim().is_empty() {
            &self.future_role
        } else {
            &self.custom_future_role
        }
    }
}

/// Slot A payload: the selection saved when the user navigates from the
/// roadmap view back to the form. `from_roadmap` marks it one-shot; the
/// restore path clears the slot after consuming a flagged payload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedFormData {
    #[serde(flatten)]
    pub selection: Selection,
    #[serde(default)]
    pub from_roadmap: bool,
}

/// Slot B payload: the selection stashed right before the login dialog,
/// including the custom-role toggle state, consumed once a session exists.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TempFormData {
    #[serde(flatten)]
    pub selection: Selection,
    #[serde(default)]
    pub is_custom_current_role: bool,
    #[serde(default)]
    pub is_custom_future_role: bool,
}
