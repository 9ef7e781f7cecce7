use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Selectable, Clone, Debug)]
#[diesel(table_name = crate::schema::roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SubRoleRow {
    pub id: Uuid,
    pub role: String,
    pub sub_role: String,
    pub description: String,
}

/// A named specialization within a target role, as served to the client.
/// The id is the label lowercased with whitespace stripped.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SubRole {
    pub id: String,
    pub label: String,
    pub description: String,
}

impl SubRole {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        let label = label.into();
        let id: String = label
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("");
        SubRole {
            id,
            label,
            description: description.into(),
        }
    }
}

impl From<SubRoleRow> for SubRole {
    fn from(row: SubRoleRow) -> Self {
        SubRole::new(row.sub_role, row.description)
    }
}
