use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::registration::use_cases::list_courses::projection::CourseView;
use crate::shell::graphql::rejection_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DropCourseMutation;

#[Object]
impl DropCourseMutation {
    async fn drop_course(
        &self,
        context: &Context<'_>,
        student_id: String,
        course_code: String,
    ) -> GqlResult<CourseView> {
        let state = context.data::<AppState>()?;
        let mut service = state.service.lock().await;
        service
            .drop_course(&student_id, &course_code)
            .map(CourseView::from)
            .map_err(|rejection| rejection_error(&rejection, rejection.code()))
    }
}
