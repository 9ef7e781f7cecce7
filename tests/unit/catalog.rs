use roadmap_backend::catalog::{
    CURRENT_ROLES, COUNTRIES, CareerOptions, FUTURE_ROLES, MentorStyle, Priority, SKILLS,
    Timeframe, country_by_code, skill_by_id,
};

#[test]
fn catalog_sizes_are_fixed() {
    assert_eq!(CURRENT_ROLES.len(), 11);
    assert_eq!(FUTURE_ROLES.len(), 10);
    assert_eq!(Timeframe::ALL.len(), 4);
    assert_eq!(COUNTRIES.len(), 20);
    assert_eq!(Priority::ALL.len(), 4);
    assert_eq!(MentorStyle::ALL.len(), 5);
    assert_eq!(SKILLS.len(), 8);
}

#[test]
fn enum_wire_values() {
    assert_eq!(
        serde_json::to_value(Timeframe::SixMonths).unwrap(),
        serde_json::json!("6months")
    );
    assert_eq!(
        serde_json::to_value(Priority::Recognition).unwrap(),
        serde_json::json!("recognition")
    );
    assert_eq!(
        serde_json::to_value(MentorStyle::Analytical).unwrap(),
        serde_json::json!("analytical")
    );
    let timeframe: Timeframe = serde_json::from_str("\"24months\"").unwrap();
    assert_eq!(timeframe, Timeframe::TwentyFourMonths);
}

#[test]
fn lookups_by_code() {
    assert_eq!(country_by_code("us").unwrap().label, "United States");
    assert!(country_by_code("zz").is_none());
    assert_eq!(skill_by_id("skill4").unwrap().name, "Communication");
    assert!(skill_by_id("skill99").is_none());
}

#[test]
fn catalog_payload_uses_camel_case_keys() {
    let payload = serde_json::to_value(CareerOptions::catalog()).unwrap();
    assert!(payload.get("currentRoles").is_some());
    assert!(payload.get("mentorStyles").is_some());
    assert_eq!(payload["skills"][0]["type"], "functional");
}
