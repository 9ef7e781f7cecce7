use roadmap_backend::catalog::{MentorStyle, Priority, Timeframe};
use roadmap_backend::db::models::form_state::{SavedFormData, Selection, TempFormData};
use roadmap_backend::services::timeline_service::TimelineState;
use serde_json::json;

#[test]
fn selection_round_trips_in_camel_case() {
    let payload = json!({
        "currentRole": "Designer",
        "futureRole": "Product Manager",
        "timeframe": "12months",
        "location": "de",
        "city": "Berlin",
        "priority": "impact",
        "mentorStyle": "challenger",
        "customCurrentRole": "",
        "customFutureRole": ""
    });

    let selection: Selection = serde_json::from_value(payload).unwrap();
    assert_eq!(selection.current_role, "Designer");
    assert_eq!(selection.timeframe, Some(Timeframe::TwelveMonths));
    assert_eq!(selection.priority, Some(Priority::Impact));
    assert_eq!(selection.mentor_style, Some(MentorStyle::Challenger));
    assert_eq!(selection.city, "Berlin");

    let back = serde_json::to_value(&selection).unwrap();
    assert_eq!(back["currentRole"], "Designer");
    assert_eq!(back["mentorStyle"], "challenger");
}

#[test]
fn custom_overrides_win_when_non_blank() {
    let mut selection = Selection::default();
    assert_eq!(selection.resolved_future_role(), "Product Manager");

    selection.custom_future_role = "  ".to_string();
    assert_eq!(selection.resolved_future_role(), "Product Manager");

    selection.custom_future_role = "Founding Engineer".to_string();
    assert_eq!(selection.resolved_future_role(), "Founding Engineer");
}

#[test]
fn saved_form_data_flattens_the_selection() {
    let saved = SavedFormData {
        selection: Selection::default(),
        from_roadmap: true,
    };

    let payload = serde_json::to_value(&saved).unwrap();
    assert_eq!(payload["currentRole"], "Software Engineer");
    assert_eq!(payload["fromRoadmap"], true);
    assert!(payload.get("selection").is_none());

    // Payloads written before the flag existed still parse.
    let legacy: SavedFormData =
        serde_json::from_value(json!({ "currentRole": "Student" })).unwrap();
    assert!(!legacy.from_roadmap);
    assert_eq!(legacy.selection.current_role, "Student");
}

#[test]
fn temp_form_data_keeps_the_custom_toggles() {
    let payload = json!({
        "currentRole": "",
        "customCurrentRole": "Staff Engineer",
        "futureRole": "Entrepreneur",
        "isCustomCurrentRole": true
    });

    let temp: TempFormData = serde_json::from_value(payload).unwrap();
    assert!(temp.is_custom_current_role);
    assert!(!temp.is_custom_future_role);
    assert_eq!(temp.selection.resolved_current_role(), "Staff Engineer");
}

#[test]
fn timeline_state_defaults_to_collapsed() {
    let state: TimelineState = serde_json::from_str("{}").unwrap();
    assert_eq!(state, TimelineState::default());

    let state: TimelineState =
        serde_json::from_value(json!({ "expandedStep": 3, "selectedSubRole": "custom" })).unwrap();
    assert_eq!(state.expanded_step, Some(3));
    assert_eq!(state.selected_sub_role.as_deref(), Some("custom"));
}
