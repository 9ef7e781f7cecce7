use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the career repository: a pre-authored roadmap document keyed
/// by target role. The `roadmap` column is the raw structured document and
/// is shape-checked by the resolver, never trusted blindly.
#[derive(Queryable, Selectable, Clone, Debug)]
#[diesel(table_name = crate::schema::career_repository)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CareerRepositoryRow {
    pub id: Uuid,
    pub role: String,
    pub roadmap: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Parsed roadmap document. Read-only once resolved.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoadmapDocument {
    #[serde(default)]
    pub role: Option<String>,
    pub roadmap: Vec<Stage>,
}

/// One period-bounded unit of a roadmap document.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Stage {
    pub title: String,
    pub period: String,
    #[serde(default)]
    pub subtext: String,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub resources: ResourceSet,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ResourceSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub articles: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub courses: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub books: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub podcasts: Vec<Resource>,
}

impl ResourceSet {
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
            && self.videos.is_empty()
            && self.courses.is_empty()
            && self.books.is_empty()
            && self.podcasts.is_empty()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Resource {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(
        default,
        rename = "postDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub post_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
