use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::registration::use_cases::list_courses::projection::CourseView;
use crate::modules::registration::use_cases::register_course::outcome::RegisterRejection;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterCourseBody {
    pub student_id: String,
    pub course_code: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterCourseBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let mut service = state.service.lock().await;
    match service.register(&body.student_id, &body.course_code) {
        Ok(course) => Json(CourseView::from(course)).into_response(),
        Err(rejection) => {
            let status = match rejection {
                RegisterRejection::StudentNotFound(_) | RegisterRejection::CourseNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                RegisterRejection::CourseFull(_) | RegisterRejection::AlreadyRegistered { .. } => {
                    StatusCode::CONFLICT
                }
            };
            error_response(status, rejection)
        }
    }
}
