use roadmap_backend::db::models::sub_role::{SubRole, SubRoleRow};
use roadmap_backend::services::SubRolesService;
use uuid::Uuid;

#[test]
fn ids_are_lowercased_with_whitespace_stripped() {
    let entry = SubRole::new("Growth Product Manager", "Owns the funnel.");
    assert_eq!(entry.id, "growthproductmanager");
    assert_eq!(entry.label, "Growth Product Manager");
}

#[test]
fn rows_convert_to_entries() {
    let row = SubRoleRow {
        id: Uuid::new_v4(),
        role: "Product Manager".to_string(),
        sub_role: "Platform PM".to_string(),
        description: "Internal tooling and APIs.".to_string(),
    };

    let entry = SubRole::from(row);
    assert_eq!(entry.id, "platformpm");
    assert_eq!(entry.description, "Internal tooling and APIs.");
}

#[test]
fn synthetic_entries_close_the_list() {
    let entries = SubRolesService::synthetic_entries("Product Manager");
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].id, "custom");
    assert_eq!(entries[0].label, "Custom");
    assert!(entries[0].description.contains("product manager"));

    assert_eq!(entries[1].id, "unknown");
    assert_eq!(entries[1].label, "I don't know");
}
