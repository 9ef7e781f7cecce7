use axum::Json;

use crate::catalog::CareerOptions;
use crate::db::models::api::ApiResponse;

pub async fn get_catalog() -> Json<ApiResponse<CareerOptions>> {
    Json(ApiResponse::success(
        CareerOptions::catalog(),
        "Career options",
    ))
}
