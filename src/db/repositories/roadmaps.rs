use diesel::prelude::*;

use crate::db::models::roadmap::CareerRepositoryRow;

pub struct RoadmapRepo;

impl RoadmapRepo {
    /// Exact-match lookup; at most one row per role.
    pub fn find_by_role(
        conn: &mut PgConnection,
        target_role: &str,
    ) -> Result<Option<CareerRepositoryRow>, diesel::result::Error> {
        use crate::schema::career_repository::dsl::*;
        career_repository
            .filter(role.eq(target_role))
            .select(CareerRepositoryRow::as_select())
            .first(conn)
            .optional()
    }
}
