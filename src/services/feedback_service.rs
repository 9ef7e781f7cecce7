use diesel::PgConnection;
use serde_json::json;
use uuid::Uuid;

use crate::analytics::Tracker;
use crate::cache::redis as cache;
use crate::db::models::feedback::{Feedback, FeedbackRequest, NewFeedback};
use crate::db::repositories::FeedbackRepo;
use crate::error::AppResult;
use crate::validation::feedback::validate_feedback;

/// The exit-intent prompt fires at most once per client within this window.
const EXIT_INTENT_TTL_SECS: u64 = 86_400;

pub struct FeedbackService;

impl FeedbackService {
    /// Normalizes a submission: feedback trimmed, a blank phone number
    /// stored as absent rather than as an empty string.
    pub fn prepare(request: &FeedbackRequest, user_id: Option<Uuid>) -> AppResult<NewFeedback> {
        validate_feedback(&request.feedback)?;

        let phone_number = request
            .phone_number
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
            .map(str::to_string);

        Ok(NewFeedback {
            user_id,
            feedback: request.feedback.trim().to_string(),
            phone_number,
        })
    }

    pub fn submit(
        conn: &mut PgConnection,
        tracker: &Tracker,
        request: &FeedbackRequest,
        user_id: Option<Uuid>,
    ) -> AppResult<Feedback> {
        let new_feedback = Self::prepare(request, user_id)?;

        tracker.event(
            "feedback_submitted",
            json!({
                "userId": user_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "anonymous".to_string()),
                "providedPhoneNumber": new_feedback.phone_number.is_some(),
            }),
        );

        Ok(FeedbackRepo::insert(conn, &new_feedback)?)
    }

    /// True exactly once per client per window; the caller shows the
    /// feedback prompt only on a true return.
    pub async fn claim_exit_intent(client: &redis::Client, client_id: &str) -> AppResult<bool> {
        let key = format!("exit_intent:{}", client_id);
        cache::claim_once(client, &key, EXIT_INTENT_TTL_SECS).await
    }
}
