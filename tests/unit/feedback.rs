use roadmap_backend::db::models::feedback::FeedbackRequest;
use roadmap_backend::services::FeedbackService;
use uuid::Uuid;

#[test]
fn feedback_is_trimmed_and_blank_phone_dropped() {
    let request = FeedbackRequest {
        feedback: "  The timeline was genuinely useful.  ".to_string(),
        phone_number: Some("   ".to_string()),
    };

    let prepared = FeedbackService::prepare(&request, None).unwrap();
    assert_eq!(prepared.feedback, "The timeline was genuinely useful.");
    assert_eq!(prepared.phone_number, None);
    assert_eq!(prepared.user_id, None);
}

#[test]
fn phone_number_is_kept_when_present() {
    let user_id = Uuid::new_v4();
    let request = FeedbackRequest {
        feedback: "Call me back please".to_string(),
        phone_number: Some(" +49 170 000000 ".to_string()),
    };

    let prepared = FeedbackService::prepare(&request, Some(user_id)).unwrap();
    assert_eq!(prepared.phone_number.as_deref(), Some("+49 170 000000"));
    assert_eq!(prepared.user_id, Some(user_id));
}

#[test]
fn whitespace_only_feedback_is_rejected() {
    let request = FeedbackRequest {
        feedback: " \n\t ".to_string(),
        phone_number: None,
    };
    assert!(FeedbackService::prepare(&request, None).is_err());
}
