//! Turns a selection plus an optionally resolved roadmap document into the
//! ordered timeline the client renders, and owns the per-client view state
//! (expanded step, selected specialization) persisted between requests.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::analytics::Tracker;
use crate::catalog::{self, MentorStyle, Priority, Skill, Timeframe};
use crate::db::models::form_state::Selection;
use crate::db::models::roadmap::{Resource, ResourceSet};
use crate::db::models::sub_role::SubRole;
use crate::error::{AppError, AppResult};
use crate::services::roadmap_service::ResolvedRoadmap;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum StepIcon {
    Target,
    BookOpen,
    Code,
    Layers,
    Briefcase,
    CheckCircle,
    Users,
    Zap,
    Award,
    Clock,
    Lightbulb,
}

/// Period labels in stored documents map onto a fixed icon set.
pub fn icon_for_period(period: &str) -> StepIcon {
    match period {
        "Week 2" => StepIcon::BookOpen,
        "Weeks 3-4" => StepIcon::Code,
        "Month 2" => StepIcon::Layers,
        "Month 3" => StepIcon::Briefcase,
        "Final Project" => StepIcon::CheckCircle,
        _ => StepIcon::BookOpen,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStep {
    pub title: String,
    pub description: String,
    pub icon: StepIcon,
    pub period: String,
    #[serde(default)]
    pub interactive: bool,
    #[serde(default)]
    pub has_resources: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceSet>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<String>,
}

impl TimelineStep {
    fn plain(title: String, description: String, icon: StepIcon, period: &str) -> Self {
        TimelineStep {
            title,
            description,
            icon,
            period: period.to_string(),
            interactive: false,
            has_resources: false,
            resources: None,
            projects: Vec::new(),
        }
    }
}

fn timeframe(selection: &Selection) -> Timeframe {
    selection.timeframe.unwrap_or(Timeframe::SixMonths)
}

/// Country code rendered as "Label emoji"; unknown codes fall through raw.
pub fn location_display(selection: &Selection) -> String {
    match catalog::country_by_code(&selection.location) {
        Some(country) => format!("{} {}", country.label, country.emoji),
        None => selection.location.clone(),
    }
}

/// Builds the rendered timeline. The assessment step always comes first;
/// after it the fetched document's stages take over, or the synthesized
/// default sequence when nothing usable was resolved.
pub fn build_steps(selection: &Selection, resolved: Option<&ResolvedRoadmap>) -> Vec<TimelineStep> {
    let future_role = selection.resolved_future_role().to_string();

    let mut steps = vec![TimelineStep {
        title: "Find A Career Path That Fits Your Strengths".to_string(),
        description: "Explore different specializations and determine the best path forward."
            .to_string(),
        icon: StepIcon::Target,
        period: "Week 1".to_string(),
        interactive: true,
        has_resources: false,
        resources: None,
        projects: Vec::new(),
    }];

    match resolved {
        Some(resolved) if !resolved.document.roadmap.is_empty() => {
            for stage in &resolved.document.roadmap {
                steps.push(TimelineStep {
                    title: stage.title.clone(),
                    description: stage.subtext.clone(),
                    icon: icon_for_period(&stage.period),
                    period: stage.period.clone(),
                    interactive: false,
                    has_resources: true,
                    resources: Some(stage.resources.clone()),
                    projects: stage.projects.clone(),
                });
            }
        }
        _ => default_steps(selection, &future_role, &mut steps),
    }

    steps
}

fn default_steps(selection: &Selection, future_role: &str, steps: &mut Vec<TimelineStep>) {
    let mut learning = TimelineStep::plain(
        "Create a Learning Plan".to_string(),
        format!(
            "Develop a structured learning plan focused on the key skills needed for a {} position.",
            future_role
        ),
        StepIcon::BookOpen,
        "Week 2",
    );
    learning.has_resources = true;
    steps.push(learning);

    steps.push(TimelineStep::plain(
        "Build Your Network".to_string(),
        format!(
            "Connect with professionals who are already {}s to gain insights and mentorship.",
            future_role
        ),
        StepIcon::Users,
        "Week 3",
    ));

    let priority = selection.priority.unwrap_or(Priority::Salary);
    let priority_step = match priority {
        Priority::Impact => TimelineStep::plain(
            "Identify Impact Opportunities".to_string(),
            "Find projects where you can make meaningful contributions and demonstrate your value."
                .to_string(),
            StepIcon::Zap,
            "Month 1",
        ),
        Priority::Salary => TimelineStep::plain(
            "Research Compensation".to_string(),
            format!(
                "Research salary ranges for {} positions and prepare negotiation strategies.",
                future_role
            ),
            StepIcon::Award,
            "Month 1",
        ),
        Priority::Balance => TimelineStep::plain(
            "Establish Boundaries".to_string(),
            "Define your ideal work schedule and boundaries to maintain work-life balance."
                .to_string(),
            StepIcon::Clock,
            "Month 1",
        ),
        Priority::Recognition => TimelineStep::plain(
            "Build Your Personal Brand".to_string(),
            "Develop a strategy to showcase your expertise and gain recognition in your field."
                .to_string(),
            StepIcon::Award,
            "Month 1",
        ),
    };
    steps.push(priority_step);

    let location = location_display(selection);
    steps.push(TimelineStep::plain(
        format!("Prepare for Working in {}", location),
        format!(
            "Research companies and opportunities in {} that offer {} positions.",
            location, future_role
        ),
        StepIcon::Lightbulb,
        "Month 2-3",
    ));

    let horizon = timeframe(selection).label();
    let months = horizon.split_whitespace().next().unwrap_or(horizon);
    steps.push(TimelineStep::plain(
        format!("Transition to {}", future_role),
        format!(
            "Complete your transition plan and start applying for {} positions or negotiate a promotion.",
            future_role
        ),
        StepIcon::CheckCircle,
        &format!("Month {}", months),
    ));
}

/// One paragraph of mentor advice per persona. The match is exhaustive on
/// purpose; adding a style without a paragraph must not compile.
pub fn mentor_advice(selection: &Selection) -> String {
    let current = selection.resolved_current_role();
    let future = selection.resolved_future_role();
    let horizon = timeframe(selection).label();
    let style = selection.mentor_style.unwrap_or(MentorStyle::Visionary);

    match style {
        MentorStyle::Visionary => format!(
            "Imagine yourself as a {future} in {horizon}. The path between where you are now and \
             that vision is full of possibilities. Your experience as a {current} has already \
             given you unique perspectives that will set you apart. Focus on the big picture and \
             don't get lost in the details."
        ),
        MentorStyle::Practical => format!(
            "To become a {future} in {horizon}, you need a step-by-step approach. Start by \
             identifying the specific skills gap between your current role and your target. \
             Create weekly milestones, find hands-on projects, and build a portfolio of work \
             that demonstrates your capabilities."
        ),
        MentorStyle::Challenger => format!(
            "Let's be honest - becoming a {future} in {horizon} will push you to your limits. \
             You'll need to work harder than most people are willing to. Challenge yourself \
             daily, seek difficult problems to solve, and don't shy away from constructive \
             criticism. Comfort is the enemy of growth."
        ),
        MentorStyle::Supportive => format!(
            "Your journey from {current} to {future} is a significant transition, but I believe \
             in you! Remember that progress isn't always linear - celebrate small wins, be kind \
             to yourself during setbacks, and remember why you started this journey. Your unique \
             background will be your strength."
        ),
        MentorStyle::Analytical => format!(
            "The data shows that transitioning to a {future} position in {horizon} is achievable \
             with the right approach. Based on industry analysis, professionals who successfully \
             make this transition focus on measurable outcomes and track their progress with key \
             performance indicators. This methodical approach will maximize your chances of \
             success."
        ),
    }
}

/// Per-client view state for the rendered timeline, persisted in a cache
/// slot so expansion survives reloads.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineState {
    #[serde(default)]
    pub expanded_step: Option<usize>,
    #[serde(default)]
    pub selected_sub_role: Option<String>,
}

impl TimelineState {
    /// Expands the step, or collapses it when it is already the expanded
    /// one. Exactly one step can be open at a time.
    pub fn toggle_step(
        &mut self,
        index: usize,
        steps: &[TimelineStep],
        selection: &Selection,
        tracker: &Tracker,
    ) -> AppResult<()> {
        let step = steps.get(index).ok_or_else(|| AppError::not_found("step"))?;
        let properties = json!({
            "stepIndex": index,
            "stepTitle": step.title,
            "futureRole": selection.resolved_future_role(),
        });

        if self.expanded_step == Some(index) {
            self.expanded_step = None;
            tracker.event("roadmap_step_collapsed", properties);
        } else {
            self.expanded_step = Some(index);
            tracker.event("roadmap_step_expanded", properties);
        }

        Ok(())
    }

    /// Toggles the selected specialization in the career-path explorer.
    pub fn select_sub_role(&mut self, entry: &SubRole, selection: &Selection, tracker: &Tracker) {
        tracker.event(
            "role_option_clicked",
            json!({
                "optionId": entry.id,
                "optionLabel": entry.label,
                "futureRole": selection.resolved_future_role(),
                "currentRole": selection.resolved_current_role(),
            }),
        );

        if self.selected_sub_role.as_deref() == Some(entry.id.as_str()) {
            self.selected_sub_role = None;
        } else {
            self.selected_sub_role = Some(entry.id.clone());
        }
    }
}

pub fn record_skill_viewed(skill: &Skill, selection: &Selection, tracker: &Tracker) {
    tracker.event(
        "skill_info_viewed",
        json!({
            "skillName": skill.name,
            "skillType": skill.kind,
            "futureRole": selection.resolved_future_role(),
        }),
    );
}

/// Resource clicks carry the step index the click happened in, so the
/// attribution stays correct even when another step is the expanded one.
pub fn record_resource_clicked(
    resource_type: &str,
    resource: &Resource,
    step_index: usize,
    steps: &[TimelineStep],
    selection: &Selection,
    tracker: &Tracker,
) {
    tracker.event(
        "resource_clicked",
        json!({
            "resourceType": resource_type,
            "resourceTitle": resource.title,
            "resourcePlatform": resource.platform,
            "resourceAuthor": resource.author,
            "stepIndex": step_index,
            "stepTitle": steps.get(step_index).map(|step| step.title.clone()),
            "futureRole": selection.resolved_future_role(),
        }),
    );
}

pub fn record_assessment_clicked(from_sub_role: &str, selection: &Selection, tracker: &Tracker) {
    tracker.event(
        "career_assessment_clicked",
        json!({
            "fromConsultantType": from_sub_role,
            "futureRole": selection.resolved_future_role(),
        }),
    );
}

pub fn record_explorer_clicked(selection: &Selection, tracker: &Tracker) {
    tracker.event(
        "explorer_graphs_clicked",
        json!({
            "futureRole": selection.resolved_future_role(),
            "currentRole": selection.resolved_current_role(),
        }),
    );
}

pub fn record_confused_clicked(selection: &Selection, tracker: &Tracker) {
    tracker.event(
        "confused_button_clicked",
        json!({
            "futureRole": selection.resolved_future_role(),
            "currentRole": selection.resolved_current_role(),
        }),
    );
}

pub fn record_coach_clicked(selection: &Selection, tracker: &Tracker) {
    tracker.event(
        "talk_to_coach_clicked",
        json!({
            "fromRole": selection.resolved_current_role(),
            "toRole": selection.resolved_future_role(),
            "timeframe": timeframe(selection).value(),
        }),
    );
}
