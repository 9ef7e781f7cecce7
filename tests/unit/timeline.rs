use roadmap_backend::analytics::Tracker;
use roadmap_backend::catalog::{MentorStyle, Priority, skill_by_id};
use roadmap_backend::db::models::form_state::Selection;
use roadmap_backend::db::models::roadmap::{Resource, RoadmapDocument, Stage};
use roadmap_backend::db::models::sub_role::SubRole;
use roadmap_backend::services::ResolvedRoadmap;
use roadmap_backend::services::timeline_service::{
    self, StepIcon, TimelineState, build_steps, icon_for_period, location_display, mentor_advice,
};

fn resolved_with_stage(title: &str, period: &str) -> ResolvedRoadmap {
    ResolvedRoadmap {
        document: RoadmapDocument {
            role: Some("Product Manager".to_string()),
            roadmap: vec![Stage {
                title: title.to_string(),
                period: period.to_string(),
                subtext: "Work through the fundamentals.".to_string(),
                projects: vec!["Ship a teardown".to_string()],
                resources: Default::default(),
            }],
        },
        source_role: "Product Manager".to_string(),
    }
}

#[test]
fn assessment_step_always_comes_first() {
    let steps = build_steps(&Selection::default(), None);
    assert_eq!(steps[0].title, "Find A Career Path That Fits Your Strengths");
    assert_eq!(steps[0].period, "Week 1");
    assert_eq!(steps[0].icon, StepIcon::Target);
    assert!(steps[0].interactive);

    let resolved = resolved_with_stage("Learn the Craft", "Week 2");
    let steps = build_steps(&Selection::default(), Some(&resolved));
    assert_eq!(steps[0].period, "Week 1");
    assert!(steps[0].interactive);
}

#[test]
fn document_stages_render_after_the_assessment_step() {
    let resolved = resolved_with_stage("Learn the Craft", "Week 2");
    let steps = build_steps(&Selection::default(), Some(&resolved));

    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1].title, "Learn the Craft");
    assert_eq!(steps[1].icon, StepIcon::BookOpen);
    assert!(steps[1].has_resources);
    assert_eq!(steps[1].projects, vec!["Ship a teardown".to_string()]);
}

#[test]
fn empty_document_falls_back_to_default_steps() {
    let mut resolved = resolved_with_stage("x", "Week 2");
    resolved.document.roadmap.clear();
    let steps = build_steps(&Selection::default(), Some(&resolved));
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[1].title, "Create a Learning Plan");
}

#[test]
fn default_sequence_for_salary_priority() {
    let steps = build_steps(&Selection::default(), None);

    assert_eq!(steps.len(), 6);
    assert_eq!(steps[1].title, "Create a Learning Plan");
    assert!(steps[1].has_resources);
    assert_eq!(steps[2].title, "Build Your Network");
    assert_eq!(steps[2].icon, StepIcon::Users);
    assert_eq!(steps[3].title, "Research Compensation");
    assert_eq!(steps[3].period, "Month 1");
    assert_eq!(steps[4].title, "Prepare for Working in United States 🇺🇸");
    assert_eq!(steps[4].icon, StepIcon::Lightbulb);
    assert_eq!(steps[5].title, "Transition to Product Manager");
    assert_eq!(steps[5].period, "Month 6");
    assert_eq!(steps[5].icon, StepIcon::CheckCircle);
}

#[test]
fn priority_branch_picks_the_month_one_step() {
    let mut selection = Selection::default();

    selection.priority = Some(Priority::Impact);
    assert_eq!(
        build_steps(&selection, None)[3].title,
        "Identify Impact Opportunities"
    );

    selection.priority = Some(Priority::Balance);
    assert_eq!(build_steps(&selection, None)[3].title, "Establish Boundaries");

    selection.priority = Some(Priority::Recognition);
    assert_eq!(
        build_steps(&selection, None)[3].title,
        "Build Your Personal Brand"
    );
}

#[test]
fn period_icon_mapping() {
    assert_eq!(icon_for_period("Week 2"), StepIcon::BookOpen);
    assert_eq!(icon_for_period("Weeks 3-4"), StepIcon::Code);
    assert_eq!(icon_for_period("Month 2"), StepIcon::Layers);
    assert_eq!(icon_for_period("Month 3"), StepIcon::Briefcase);
    assert_eq!(icon_for_period("Final Project"), StepIcon::CheckCircle);
    assert_eq!(icon_for_period("Someday"), StepIcon::BookOpen);
}

#[test]
fn unknown_country_code_passes_through() {
    let mut selection = Selection::default();
    assert_eq!(location_display(&selection), "United States 🇺🇸");
    selection.location = "atlantis".to_string();
    assert_eq!(location_display(&selection), "atlantis");
}

#[test]
fn each_mentor_style_gets_its_own_paragraph() {
    let mut selection = Selection::default();
    let mut paragraphs = Vec::new();

    for style in MentorStyle::ALL {
        selection.mentor_style = Some(style);
        paragraphs.push(mentor_advice(&selection));
    }

    for (i, a) in paragraphs.iter().enumerate() {
        assert!(a.contains("Product Manager"));
        for b in paragraphs.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }

    selection.mentor_style = Some(MentorStyle::Visionary);
    let advice = mentor_advice(&selection);
    assert!(advice.starts_with("Imagine yourself as a Product Manager in 6 months."));
    assert!(advice.contains("Software Engineer"));

    selection.mentor_style = Some(MentorStyle::Supportive);
    assert!(mentor_advice(&selection).contains("I believe in you!"));
}

#[test]
fn custom_roles_flow_into_the_advice() {
    let mut selection = Selection::default();
    selection.custom_future_role = "Founding Engineer".to_string();
    selection.mentor_style = Some(MentorStyle::Practical);
    let advice = mentor_advice(&selection);
    assert!(advice.contains("Founding Engineer"));
    assert!(!advice.contains("Product Manager"));
}

#[test]
fn toggling_the_same_step_twice_collapses_it() {
    let tracker = Tracker::in_memory();
    let selection = Selection::default();
    let steps = build_steps(&selection, None);
    let mut timeline = TimelineState::default();

    timeline.toggle_step(2, &steps, &selection, &tracker).unwrap();
    assert_eq!(timeline.expanded_step, Some(2));

    timeline.toggle_step(2, &steps, &selection, &tracker).unwrap();
    assert_eq!(timeline.expanded_step, None);

    let events = tracker.captured();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name, "roadmap_step_expanded");
    assert_eq!(events[1].name, "roadmap_step_collapsed");
    assert_eq!(events[0].properties["stepIndex"], 2);
    assert_eq!(events[0].properties["stepTitle"], steps[2].title.as_str());
}

#[test]
fn expanding_a_second_step_moves_the_expansion() {
    let tracker = Tracker::in_memory();
    let selection = Selection::default();
    let steps = build_steps(&selection, None);
    let mut timeline = TimelineState::default();

    timeline.toggle_step(1, &steps, &selection, &tracker).unwrap();
    timeline.toggle_step(4, &steps, &selection, &tracker).unwrap();
    assert_eq!(timeline.expanded_step, Some(4));
    assert_eq!(tracker.captured()[1].name, "roadmap_step_expanded");
}

#[test]
fn out_of_range_step_index_is_rejected() {
    let tracker = Tracker::in_memory();
    let selection = Selection::default();
    let steps = build_steps(&selection, None);
    let mut timeline = TimelineState::default();

    let err = timeline
        .toggle_step(steps.len(), &steps, &selection, &tracker)
        .unwrap_err();

    assert!(matches!(err, roadmap_backend::error::AppError::NotFound { .. }));
    assert_eq!(timeline, TimelineState::default());
    assert!(tracker.captured().is_empty());
}

#[test]
fn sub_role_selection_toggles() {
    let tracker = Tracker::in_memory();
    let selection = Selection::default();
    let entry = SubRole::new("Growth PM", "Owns acquisition and retention loops.");
    let mut timeline = TimelineState::default();

    timeline.select_sub_role(&entry, &selection, &tracker);
    assert_eq!(timeline.selected_sub_role.as_deref(), Some("growthpm"));

    timeline.select_sub_role(&entry, &selection, &tracker);
    assert_eq!(timeline.selected_sub_role, None);

    let events = tracker.captured();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name, "role_option_clicked");
    assert_eq!(events[0].properties["optionId"], "growthpm");
}

#[test]
fn resource_click_is_attributed_to_the_clicked_step() {
    let tracker = Tracker::in_memory();
    let selection = Selection::default();
    let steps = build_steps(&selection, None);

    let resource = Resource {
        title: "The Lean Product Playbook".to_string(),
        author: Some("Dan Olsen".to_string()),
        platform: None,
        publication: None,
        host: None,
        creator: None,
        post_date: None,
        link: None,
    };

    // No step is expanded; the click still names the step it came from.
    timeline_service::record_resource_clicked(
        "book", &resource, 3, &steps, &selection, &tracker,
    );

    let events = tracker.captured();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "resource_clicked");
    assert_eq!(events[0].properties["stepIndex"], 3);
    assert_eq!(events[0].properties["stepTitle"], steps[3].title.as_str());
    assert_eq!(events[0].properties["resourceAuthor"], "Dan Olsen");
}

#[test]
fn skill_view_event_carries_kind_and_role() {
    let tracker = Tracker::in_memory();
    let selection = Selection::default();
    let skill = skill_by_id("skill5").unwrap();

    timeline_service::record_skill_viewed(skill, &selection, &tracker);

    let events = tracker.captured();
    assert_eq!(events[0].name, "skill_info_viewed");
    assert_eq!(events[0].properties["skillName"], "Leadership");
    assert_eq!(events[0].properties["skillType"], "soft");
    assert_eq!(events[0].properties["futureRole"], "Product Manager");
}
