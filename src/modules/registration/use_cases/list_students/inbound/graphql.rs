use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::registration::use_cases::list_students::projection::StudentView;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListStudentsQuery;

#[Object]
impl ListStudentsQuery {
    async fn students(&self, context: &Context<'_>) -> GqlResult<Vec<StudentView>> {
        let state = context.data::<AppState>()?;
        let service = state.service.lock().await;
        Ok(service.students().iter().map(StudentView::from).collect())
    }
}
