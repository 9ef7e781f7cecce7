use diesel::PgConnection;

use crate::db::models::sub_role::SubRole;
use crate::db::repositories::SubRoleRepo;

pub struct SubRolesService;

impl SubRolesService {
    /// Fetches the stored specializations for a role. Errors degrade to an
    /// empty list; the explorer still works with only the synthetic entries.
    pub fn fetch(conn: &mut PgConnection, role: &str) -> Vec<SubRole> {
        if role.trim().is_empty() {
            return Vec::new();
        }

        match SubRoleRepo::list_by_role(conn, role) {
            Ok(rows) => rows.into_iter().map(SubRole::from).collect(),
            Err(e) => {
                tracing::error!("Error fetching sub-roles for {}: {}", role, e);
                Vec::new()
            }
        }
    }

    /// The two entries appended after whatever the store returned.
    pub fn synthetic_entries(future_role: &str) -> Vec<SubRole> {
        vec![
            SubRole {
                id: "custom".to_string(),
                label: "Custom".to_string(),
                description: format!(
                    "Create a custom {} specialization based on your unique interests and goals.",
                    future_role.to_lowercase()
                ),
            },
            SubRole {
                id: "unknown".to_string(),
                label: "I don't know".to_string(),
                description: "Not sure which specialization to choose? We can help you explore \
                              your options and find the right path."
                    .to_string(),
            },
        ]
    }

    pub fn consultant_types(conn: &mut PgConnection, future_role: &str) -> Vec<SubRole> {
        let mut entries = Self::fetch(conn, future_role);
        entries.extend(Self::synthetic_entries(future_role));
        entries
    }
}
