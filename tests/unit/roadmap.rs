use chrono::Utc;
use roadmap_backend::db::models::roadmap::CareerRepositoryRow;
use roadmap_backend::error::AppError;
use roadmap_backend::services::RoadmapService;
use serde_json::json;
use uuid::Uuid;

fn row(role: &str, roadmap: serde_json::Value) -> CareerRepositoryRow {
    CareerRepositoryRow {
        id: Uuid::new_v4(),
        role: role.to_string(),
        roadmap,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn well_formed_document_resolves() {
    let resolved = RoadmapService::parse_document(row(
        "Data Scientist",
        json!({
            "role": "Data Scientist",
            "roadmap": [
                {
                    "title": "Statistics Refresher",
                    "period": "Week 2",
                    "subtext": "Probability, inference, experiment design.",
                    "projects": ["A/B test writeup"],
                    "resources": {
                        "books": [{"title": "Naked Statistics", "author": "Charles Wheelan"}]
                    }
                }
            ]
        }),
    ))
    .unwrap();

    assert_eq!(resolved.source_role, "Data Scientist");
    assert_eq!(resolved.document.roadmap.len(), 1);
    let stage = &resolved.document.roadmap[0];
    assert_eq!(stage.title, "Statistics Refresher");
    assert_eq!(stage.resources.books[0].title, "Naked Statistics");
    assert!(stage.resources.videos.is_empty());
}

#[test]
fn source_role_falls_back_to_the_row_role() {
    let resolved = RoadmapService::parse_document(row(
        "Entrepreneur",
        json!({ "roadmap": [] }),
    ))
    .unwrap();
    assert_eq!(resolved.source_role, "Entrepreneur");
}

#[test]
fn malformed_documents_are_dropped() {
    assert!(RoadmapService::parse_document(row("Designer", json!("not a document"))).is_none());
    assert!(RoadmapService::parse_document(row("Designer", json!({ "roadmap": "nope" }))).is_none());
    assert!(RoadmapService::parse_document(row("Designer", json!({ "steps": [] }))).is_none());
}

#[test]
fn direct_hit_skips_the_fallback() {
    let mut looked_up = Vec::new();
    let resolved = RoadmapService::resolve_with(
        |role| {
            looked_up.push(role.to_string());
            Ok(Some(row(role, json!({ "roadmap": [] }))))
        },
        "Entrepreneur",
        "Data Scientist",
    )
    .unwrap()
    .unwrap();

    assert_eq!(looked_up, vec!["Data Scientist".to_string()]);
    assert_eq!(resolved.source_role, "Data Scientist");
}

#[test]
fn missing_role_resolves_to_the_fallback_roadmap() {
    let resolved = RoadmapService::resolve_with(
        |role| {
            if role == "Entrepreneur" {
                Ok(Some(row(role, json!({ "roadmap": [] }))))
            } else {
                Ok(None)
            }
        },
        "Entrepreneur",
        "Basket Weaver",
    )
    .unwrap()
    .unwrap();

    assert_eq!(resolved.source_role, "Entrepreneur");
}

#[test]
fn missing_fallback_is_a_load_error() {
    let err = RoadmapService::resolve_with(|_| Ok(None), "Entrepreneur", "Basket Weaver")
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[test]
fn stage_defaults_fill_optional_fields() {
    let resolved = RoadmapService::parse_document(row(
        "Tech Lead",
        json!({
            "roadmap": [{ "title": "Own a Migration", "period": "Month 2" }]
        }),
    ))
    .unwrap();

    let stage = &resolved.document.roadmap[0];
    assert_eq!(stage.subtext, "");
    assert!(stage.projects.is_empty());
    assert!(stage.resources.is_empty());
}
