use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::registration::use_cases::list_courses::projection::CourseView;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListRegistrationsParams {
    pub student_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListRegistrationsParams>,
) -> impl IntoResponse {
    let service = state.service.lock().await;
    match service.list_registrations(&params.student_id) {
        Ok(courses) => {
            let views: Vec<CourseView> = courses.into_iter().map(CourseView::from).collect();
            Json(views).into_response()
        }
        Err(e) => error_response(StatusCode::NOT_FOUND, e),
    }
}
