use diesel::prelude::*;

use crate::db::models::sub_role::SubRoleRow;

pub struct SubRoleRepo;

impl SubRoleRepo {
    /// Zero or more specializations for the given role.
    pub fn list_by_role(
        conn: &mut PgConnection,
        target_role: &str,
    ) -> Result<Vec<SubRoleRow>, diesel::result::Error> {
        use crate::schema::roles::dsl::*;
        roles
            .filter(role.eq(target_role))
            .order(sub_role.asc())
            .select(SubRoleRow::as_select())
            .load(conn)
    }
}
