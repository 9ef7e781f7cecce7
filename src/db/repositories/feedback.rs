use diesel::prelude::*;

use crate::db::models::feedback::{Feedback, NewFeedback};

pub struct FeedbackRepo;

impl FeedbackRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_feedback: &NewFeedback,
    ) -> Result<Feedback, diesel::result::Error> {
        diesel::insert_into(crate::schema::roadmap_feedback::table)
            .values(new_feedback)
            .get_result(conn)
    }
}
