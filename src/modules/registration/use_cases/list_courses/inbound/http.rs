use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::registration::use_cases::list_courses::projection::CourseView;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.service.lock().await;
    let courses: Vec<CourseView> = service.courses().iter().map(CourseView::from).collect();
    Json(courses)
}
