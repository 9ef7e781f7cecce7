use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::{
    AppState,
    cache::slots,
    catalog::{self, CareerOptions, Skill},
    db::models::{
        api::{ApiResponse, ErrorDetail, error_codes},
        auth::AuthUser,
        form_state::{Selection, TempFormData},
        roadmap::Resource,
        sub_role::SubRole,
    },
    error::{AppError, AppResult},
    routes::ClientId,
    services::{
        RoadmapService, SubRolesService,
        timeline_service::{self, TimelineState, TimelineStep},
    },
    validation::selection::missing_fields,
};

fn form_snapshot(selection: &Selection) -> serde_json::Value {
    json!({
        "currentRole": selection.resolved_current_role(),
        "futureRole": selection.resolved_future_role(),
        "timeframe": selection.timeframe,
        "location": selection.location,
        "city": selection.city,
        "priority": selection.priority,
        "mentorStyle": selection.mentor_style,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub source_role: Option<String>,
    pub redirect_to: &'static str,
}

/// Validates the submitted selection and stages the roadmap handoff. An
/// anonymous client gets a 401 with the selection stashed, so nothing is
/// lost across the login dialog.
pub async fn generate_roadmap(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Extension(user): Extension<Option<AuthUser>>,
    Json(payload): Json<TempFormData>,
) -> Result<Response, AppError> {
    let selection = payload.selection.clone();
    let tracker = state
        .tracker
        .with_identity(user.as_ref().map(|u| u.email.as_str()));

    let missing = missing_fields(&selection);
    if !missing.is_empty() {
        tracker.event(
            "roadmap_generation_error",
            json!({
                "missingFields": missing,
                "formData": form_snapshot(&selection),
            }),
        );
        let errors = missing
            .iter()
            .map(|field| ErrorDetail {
                field: Some(field.to_string()),
                code: error_codes::FIELD_MISSING.to_string(),
                message: format!("{} is required", field),
            })
            .collect();
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::validation_error(errors)),
        )
            .into_response());
    }

    if user.is_none() {
        state.form_state.stash_temp(&client_id, &payload).await?;
        tracker.event(
            "login_prompt_for_roadmap",
            json!({ "formData": form_snapshot(&selection) }),
        );
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::unauthorized(
                "Sign in to generate your roadmap",
            )),
        )
            .into_response());
    }

    let resolved = {
        let mut conn = state.db.get()?;
        match RoadmapService::resolve(
            &mut conn,
            &state.config.fallback_role,
            selection.resolved_future_role(),
        ) {
            Ok(resolved) => resolved,
            Err(e) => {
                tracker.event(
                    "roadmap_generation_error",
                    json!({
                        "error": e.to_string(),
                        "formData": form_snapshot(&selection),
                    }),
                );
                return Err(e);
            }
        }
    };

    state.form_state.set_handoff(&client_id, &selection).await?;
    let options = serde_json::to_value(CareerOptions::catalog())
        .map_err(|e| AppError::internal(format!("serialize career options: {}", e)))?;
    state.form_state.set_catalog(&client_id, &options).await?;
    state
        .form_state
        .set_slot(&client_id, slots::TIMELINE, &TimelineState::default())
        .await?;

    let source_role = resolved.map(|resolved| resolved.source_role);
    tracker.event(
        "roadmap_generated",
        json!({
            "formData": form_snapshot(&selection),
            "sourceRole": source_role.clone(),
        }),
    );

    Ok(Json(ApiResponse::success(
        GenerateResponse {
            source_role,
            redirect_to: "/roadmap",
        },
        "Roadmap generated",
    ))
    .into_response())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapLinks {
    pub assessment_url: &'static str,
    pub explorer_url: &'static str,
    pub booking_path: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapView {
    pub selection: Selection,
    pub steps: Vec<TimelineStep>,
    pub mentor_advice: String,
    /// Role whose stored roadmap backs the timeline; differs from the
    /// selected future role when the fallback served it.
    pub source_role: Option<String>,
    pub skills: Vec<Skill>,
    pub sub_roles: Vec<SubRole>,
    pub timeline: TimelineState,
    pub links: RoadmapLinks,
}

struct LoadedRoadmap {
    selection: Selection,
    steps: Vec<TimelineStep>,
    source_role: Option<String>,
}

/// The selection, resolved document and rendered steps behind every
/// roadmap-view endpoint. Missing handoff means no roadmap was generated
/// for this client.
async fn load_roadmap(state: &AppState, client_id: &str) -> AppResult<LoadedRoadmap> {
    let selection = state
        .form_state
        .handoff(client_id)
        .await?
        .ok_or_else(|| AppError::not_found("roadmap"))?;

    let mut conn = state.db.get()?;
    let resolved = RoadmapService::resolve(
        &mut conn,
        &state.config.fallback_role,
        selection.resolved_future_role(),
    )?;

    let steps = timeline_service::build_steps(&selection, resolved.as_ref());
    Ok(LoadedRoadmap {
        selection,
        steps,
        source_role: resolved.map(|resolved| resolved.source_role),
    })
}

async fn timeline_state(state: &AppState, client_id: &str) -> AppResult<TimelineState> {
    Ok(state
        .form_state
        .get_slot(client_id, slots::TIMELINE)
        .await?
        .unwrap_or_default())
}

pub async fn get_roadmap(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
) -> Result<Json<ApiResponse<RoadmapView>>, AppError> {
    let loaded = load_roadmap(&state, &client_id).await?;
    let timeline = timeline_state(&state, &client_id).await?;

    let sub_roles = {
        let mut conn = state.db.get()?;
        SubRolesService::consultant_types(&mut conn, loaded.selection.resolved_future_role())
    };

    let view = RoadmapView {
        mentor_advice: timeline_service::mentor_advice(&loaded.selection),
        steps: loaded.steps,
        source_role: loaded.source_role,
        skills: catalog::SKILLS.to_vec(),
        sub_roles,
        timeline,
        links: RoadmapLinks {
            assessment_url: catalog::ASSESSMENT_URL,
            explorer_url: catalog::EXPLORER_URL,
            booking_path: catalog::BOOKING_PATH,
        },
        selection: loaded.selection,
    };

    Ok(Json(ApiResponse::success(view, "Roadmap")))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleStepRequest {
    pub step_index: usize,
}

pub async fn toggle_step(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Extension(user): Extension<Option<AuthUser>>,
    Json(payload): Json<ToggleStepRequest>,
) -> Result<Json<ApiResponse<TimelineState>>, AppError> {
    let loaded = load_roadmap(&state, &client_id).await?;
    let mut timeline = timeline_state(&state, &client_id).await?;
    let tracker = state
        .tracker
        .with_identity(user.as_ref().map(|u| u.email.as_str()));

    timeline.toggle_step(
        payload.step_index,
        &loaded.steps,
        &loaded.selection,
        &tracker,
    )?;

    state
        .form_state
        .set_slot(&client_id, slots::TIMELINE, &timeline)
        .await?;

    Ok(Json(ApiResponse::success(timeline, "Timeline updated")))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectSubRoleRequest {
    pub sub_role_id: String,
}

pub async fn select_sub_role(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Extension(user): Extension<Option<AuthUser>>,
    Json(payload): Json<SelectSubRoleRequest>,
) -> Result<Json<ApiResponse<TimelineState>>, AppError> {
    let loaded = load_roadmap(&state, &client_id).await?;

    let entry = {
        let mut conn = state.db.get()?;
        SubRolesService::consultant_types(&mut conn, loaded.selection.resolved_future_role())
            .into_iter()
            .find(|entry| entry.id == payload.sub_role_id)
            .ok_or_else(|| AppError::not_found("sub-role"))?
    };

    let mut timeline = timeline_state(&state, &client_id).await?;
    let tracker = state
        .tracker
        .with_identity(user.as_ref().map(|u| u.email.as_str()));
    timeline.select_sub_role(&entry, &loaded.selection, &tracker);

    state
        .form_state
        .set_slot(&client_id, slots::TIMELINE, &timeline)
        .await?;

    Ok(Json(ApiResponse::success(timeline, "Timeline updated")))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceClickRequest {
    pub step_index: usize,
    pub resource_type: String,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

pub async fn resource_clicked(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Extension(user): Extension<Option<AuthUser>>,
    Json(payload): Json<ResourceClickRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let loaded = load_roadmap(&state, &client_id).await?;
    let tracker = state
        .tracker
        .with_identity(user.as_ref().map(|u| u.email.as_str()));

    let resource = Resource {
        title: payload.title,
        author: payload.author,
        platform: payload.platform,
        publication: None,
        host: None,
        creator: None,
        post_date: None,
        link: None,
    };

    timeline_service::record_resource_clicked(
        &payload.resource_type,
        &resource,
        payload.step_index,
        &loaded.steps,
        &loaded.selection,
        &tracker,
    );

    Ok(Json(ApiResponse::ok("Recorded")))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillViewRequest {
    pub skill_id: String,
}

pub async fn skill_viewed(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Extension(user): Extension<Option<AuthUser>>,
    Json(payload): Json<SkillViewRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let skill = catalog::skill_by_id(&payload.skill_id)
        .ok_or_else(|| AppError::not_found("skill"))?;
    let loaded = load_roadmap(&state, &client_id).await?;
    let tracker = state
        .tracker
        .with_identity(user.as_ref().map(|u| u.email.as_str()));

    timeline_service::record_skill_viewed(skill, &loaded.selection, &tracker);

    Ok(Json(ApiResponse::ok("Recorded")))
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    Assessment,
    Explorer,
    Confused,
    Coach,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkClickRequest {
    pub target: LinkTarget,
    #[serde(default)]
    pub from_sub_role: Option<String>,
}

#[derive(Serialize)]
pub struct LinkResponse {
    pub url: &'static str,
}

/// Outbound-link clicks: records the event and returns the destination.
pub async fn link_clicked(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
    Extension(user): Extension<Option<AuthUser>>,
    Json(payload): Json<LinkClickRequest>,
) -> Result<Json<ApiResponse<LinkResponse>>, AppError> {
    let loaded = load_roadmap(&state, &client_id).await?;
    let selection = &loaded.selection;
    let tracker = state
        .tracker
        .with_identity(user.as_ref().map(|u| u.email.as_str()));

    let url = match payload.target {
        LinkTarget::Assessment => {
            let from_sub_role = payload.from_sub_role.as_deref().unwrap_or("unknown");
            timeline_service::record_assessment_clicked(from_sub_role, selection, &tracker);
            catalog::ASSESSMENT_URL
        }
        LinkTarget::Explorer => {
            timeline_service::record_explorer_clicked(selection, &tracker);
            catalog::EXPLORER_URL
        }
        LinkTarget::Confused => {
            timeline_service::record_confused_clicked(selection, &tracker);
            catalog::BOOKING_PATH
        }
        LinkTarget::Coach => {
            timeline_service::record_coach_clicked(selection, &tracker);
            catalog::BOOKING_PATH
        }
    };

    Ok(Json(ApiResponse::success(LinkResponse { url }, "Recorded")))
}
