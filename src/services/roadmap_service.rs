use diesel::PgConnection;

use crate::{
    db::models::roadmap::{CareerRepositoryRow, RoadmapDocument},
    db::repositories::RoadmapRepo,
    error::{AppError, AppResult},
};

/// A parsed roadmap document together with the role whose row actually
/// served it. The two differ when the fallback kicked in; the renderer
/// discloses the substitution.
#[derive(Clone, Debug)]
pub struct ResolvedRoadmap {
    pub document: RoadmapDocument,
    pub source_role: String,
}

pub struct RoadmapService;

impl RoadmapService {
    /// Single-attempt lookup: the requested role first, then the configured
    /// fallback role. Both missing is a load error. A row whose document
    /// fails the shape check yields `None` and the caller degrades to the
    /// synthesized default steps.
    pub fn resolve(
        conn: &mut PgConnection,
        fallback_role: &str,
        target_role: &str,
    ) -> AppResult<Option<ResolvedRoadmap>> {
        Self::resolve_with(
            |role| RoadmapRepo::find_by_role(conn, role).map_err(AppError::from),
            fallback_role,
            target_role,
        )
    }

    /// Lookup-agnostic resolution; `resolve` wires in the repository.
    pub fn resolve_with<F>(
        mut lookup: F,
        fallback_role: &str,
        target_role: &str,
    ) -> AppResult<Option<ResolvedRoadmap>>
    where
        F: FnMut(&str) -> AppResult<Option<CareerRepositoryRow>>,
    {
        let row = match lookup(target_role)? {
            Some(row) => row,
            None => {
                tracing::info!(
                    "No roadmap found for {}, falling back to the {} roadmap",
                    target_role,
                    fallback_role
                );
                lookup(fallback_role)?.ok_or_else(|| AppError::not_found("roadmap"))?
            }
        };

        Ok(Self::parse_document(row))
    }

    /// Shape check for the stored document: it must be a structured object
    /// carrying a `roadmap` sequence. Anything else is logged and dropped.
    pub fn parse_document(row: CareerRepositoryRow) -> Option<ResolvedRoadmap> {
        match serde_json::from_value::<RoadmapDocument>(row.roadmap) {
            Ok(document) => {
                let source_role = document.role.clone().unwrap_or(row.role);
                Some(ResolvedRoadmap {
                    document,
                    source_role,
                })
            }
            Err(e) => {
                tracing::error!("Unexpected roadmap data structure for {}: {}", row.role, e);
                None
            }
        }
    }
}
