use async_graphql::{EmptySubscription, ErrorExtensions, MergedObject, Schema};

use crate::modules::registration::use_cases::drop_course::inbound::graphql::DropCourseMutation;
use crate::modules::registration::use_cases::list_courses::inbound::graphql::ListCoursesQuery;
use crate::modules::registration::use_cases::list_registrations::inbound::graphql::ListRegistrationsQuery;
use crate::modules::registration::use_cases::list_students::inbound::graphql::ListStudentsQuery;
use crate::modules::registration::use_cases::register_course::inbound::graphql::RegisterCourseMutation;
pub use crate::shell::state::AppState;
use std::fmt::Display;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListCoursesQuery, ListStudentsQuery, ListRegistrationsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(RegisterCourseMutation, DropCourseMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

/// GraphQL error carrying a stable `extensions.code` next to the readable message.
pub fn rejection_error(message: impl Display, code: &'static str) -> async_graphql::Error {
    async_graphql::Error::new(message.to_string()).extend_with(|_, e| e.set("code", code))
}
