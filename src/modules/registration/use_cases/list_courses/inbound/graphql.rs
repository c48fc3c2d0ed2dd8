use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::registration::use_cases::list_courses::projection::CourseView;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListCoursesQuery;

#[Object]
impl ListCoursesQuery {
    async fn courses(&self, context: &Context<'_>) -> GqlResult<Vec<CourseView>> {
        let state = context.data::<AppState>()?;
        let service = state.service.lock().await;
        Ok(service.courses().iter().map(CourseView::from).collect())
    }

    async fn course(&self, context: &Context<'_>, code: String) -> GqlResult<Option<CourseView>> {
        let state = context.data::<AppState>()?;
        let service = state.service.lock().await;
        Ok(service.course(&code).map(CourseView::from))
    }
}
