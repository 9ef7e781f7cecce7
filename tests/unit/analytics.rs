use roadmap_backend::analytics::Tracker;
use roadmap_backend::db::models::form_state::Selection;
use roadmap_backend::services::timeline_service::record_explorer_clicked;
use serde_json::json;

#[test]
fn identity_handle_stamps_its_own_events() {
    let base = Tracker::in_memory();
    let signed_in = base.with_identity(Some("alice@example.com"));

    signed_in.event("login_successful", json!({ "email": "alice@example.com" }));

    let events = base.captured();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].user_id.as_deref(), Some("alice@example.com"));
    assert_eq!(signed_in.current_identity().as_deref(), Some("alice@example.com"));
}

#[test]
fn base_tracker_stays_anonymous_after_a_handle_is_derived() {
    let base = Tracker::in_memory();
    let signed_in = base.with_identity(Some("alice@example.com"));

    signed_in.event("login_successful", json!({ "email": "alice@example.com" }));

    // A concurrent anonymous client records through the shared base.
    record_explorer_clicked(&Selection::default(), &base);

    let events = base.captured();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].user_id.as_deref(), Some("alice@example.com"));
    assert_eq!(events[1].name, "explorer_graphs_clicked");
    assert_eq!(events[1].user_id, None);
    assert_eq!(base.current_identity(), None);
}

#[test]
fn handles_share_the_sink() {
    let base = Tracker::in_memory();
    let alice = base.with_identity(Some("alice@example.com"));
    let bob = base.with_identity(Some("bob@example.com"));

    alice.event("feedback_submitted", json!({}));
    bob.event("feedback_submitted", json!({}));

    let events = base.captured();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].user_id.as_deref(), Some("alice@example.com"));
    assert_eq!(events[1].user_id.as_deref(), Some("bob@example.com"));
}

#[test]
fn disabled_tracker_swallows_events() {
    let tracker = Tracker::disabled();
    tracker.event("explorer_graphs_clicked", json!({}));
    assert!(tracker.captured().is_empty());

    let handle = tracker.with_identity(Some("alice@example.com"));
    handle.event("logout", json!({}));
    assert!(handle.captured().is_empty());
}
