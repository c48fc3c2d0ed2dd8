use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::registration::use_cases::list_courses::projection::CourseView;
use crate::shell::graphql::rejection_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListRegistrationsQuery;

#[Object]
impl ListRegistrationsQuery {
    async fn registrations(
        &self,
        context: &Context<'_>,
        student_id: String,
    ) -> GqlResult<Vec<CourseView>> {
        let state = context.data::<AppState>()?;
        let service = state.service.lock().await;
        service
            .list_registrations(&student_id)
            .map(|courses| courses.into_iter().map(CourseView::from).collect())
            .map_err(|rejection| rejection_error(&rejection, rejection.code()))
    }
}
