use roadmap_backend::db::models::form_state::Selection;
use roadmap_backend::validation::selection::{
    CAREER_PRIORITY, CURRENT_ROLE, FUTURE_ROLE, LOCATION, MENTOR_STYLE, TIMEFRAME, missing_fields,
    validate_selection,
};

fn empty_selection() -> Selection {
    // Field-level serde defaults, not the prefilled form defaults.
    serde_json::from_str("{}").unwrap()
}

#[test]
fn missing_fields_reported_in_stable_order() {
    let missing = missing_fields(&empty_selection());
    assert_eq!(
        missing,
        vec![
            CURRENT_ROLE,
            FUTURE_ROLE,
            TIMEFRAME,
            LOCATION,
            CAREER_PRIORITY,
            MENTOR_STYLE
        ]
    );
}

#[test]
fn partial_selection_reports_only_missing() {
    let mut selection = Selection::default();
    selection.location.clear();
    selection.mentor_style = None;
    assert_eq!(missing_fields(&selection), vec![LOCATION, MENTOR_STYLE]);
}

#[test]
fn custom_role_text_satisfies_the_field() {
    let mut selection = empty_selection();
    selection.custom_current_role = "Staff Platform Engineer".to_string();
    let missing = missing_fields(&selection);
    assert!(!missing.contains(&CURRENT_ROLE));
    assert!(missing.contains(&FUTURE_ROLE));
}

#[test]
fn complete_selection_validates() {
    assert!(validate_selection(&Selection::default()).is_ok());
    let message = validate_selection(&empty_selection())
        .unwrap_err()
        .to_string();
    assert!(message.contains("Current Role"));
}
