use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::registration::use_cases::list_students::projection::StudentView;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.service.lock().await;
    let students: Vec<StudentView> = service.students().iter().map(StudentView::from).collect();
    Json(students)
}
