use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Queryable, Selectable, Serialize, Clone, Debug)]
#[diesel(table_name = crate::schema::roadmap_feedback)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Feedback {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub feedback: String,
    pub phone_number: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable, Debug, PartialEq, Eq)]
#[diesel(table_name = crate::schema::roadmap_feedback)]
pub struct NewFeedback {
    pub user_id: Option<Uuid>,
    pub feedback: String,
    pub phone_number: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct FeedbackRequest {
    pub feedback: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}
