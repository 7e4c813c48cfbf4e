use crate::{
    error::{ApiError, ErrorResponse},
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::statistics::StatisticsService;
use models::{chart::Dashboard, statistics::StatisticsReport};

/// Aggregate counts over all students
#[utoipa::path(
    get,
    path = "/statistics",
    responses(
        (status = 200, description = "Graduation and department statistics", body = StatisticsReport),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Statistics"
)]
pub async fn get_statistics(
    State(state): State<AppState>,
) -> Result<Json<StatisticsReport>, ApiError> {
    let report = StatisticsService::compute(&state.db).await?;

    Ok(Json(report))
}

/// Statistics shaped for the dashboard charts
#[utoipa::path(
    get,
    path = "/statistics/dashboard",
    responses(
        (status = 200, description = "Summary cards and chart series", body = Dashboard),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Statistics"
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<Dashboard>, ApiError> {
    let report = StatisticsService::compute(&state.db).await?;

    Ok(Json(Dashboard::from(&report)))
}
