use chrono::Utc;
use diesel::prelude::*;

use crate::db::models::auth::{NewUser, User};

pub struct UserRepo;

impl UserRepo {
    pub fn find_by_id(
        conn: &mut PgConnection,
        user_id: uuid::Uuid,
    ) -> Result<Option<User>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first(conn)
            .optional()
    }

    pub fn find_by_email(
        conn: &mut PgConnection,
        user_email: &str,
    ) -> Result<Option<User>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users
            .filter(email.eq(user_email))
            .select(User::as_select())
            .first(conn)
            .optional()
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_user: &NewUser,
    ) -> Result<User, diesel::result::Error> {
        diesel::insert_into(crate::schema::users::table)
            .values(new_user)
            .get_result(conn)
    }

    /// Passcode login creates the user on first sign-in and stamps the
    /// sign-in time on every subsequent one.
    pub fn upsert_by_email(
        conn: &mut PgConnection,
        user_email: &str,
    ) -> Result<User, diesel::result::Error> {
        match Self::find_by_email(conn, user_email)? {
            Some(user) => Self::touch_last_sign_in(conn, user.id),
            None => Self::insert(
                conn,
                &NewUser {
                    email: user_email.to_string(),
                },
            ),
        }
    }

    pub fn touch_last_sign_in(
        conn: &mut PgConnection,
        user_id: uuid::Uuid,
    ) -> Result<User, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        diesel::update(users.filter(id.eq(user_id)))
            .set(last_sign_in_at.eq(Some(Utc::now())))
            .get_result(conn)
    }
}
