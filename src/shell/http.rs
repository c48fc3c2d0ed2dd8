use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::registration::use_cases::drop_course::inbound::http as drop_http;
use crate::modules::registration::use_cases::list_courses::inbound::http as courses_http;
use crate::modules::registration::use_cases::list_registration_events::inbound::http as events_http;
use crate::modules::registration::use_cases::list_registrations::inbound::http as registrations_http;
use crate::modules::registration::use_cases::list_students::inbound::http as students_http;
use crate::modules::registration::use_cases::register_course::inbound::http as register_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl ToString) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/courses", get(courses_http::handle))
        .route("/students", get(students_http::handle))
        .route("/register-course", post(register_http::handle))
        .route("/drop-course", post(drop_http::handle))
        .route("/registrations", get(registrations_http::handle))
        .route("/registration-events", get(events_http::handle))
        .with_state(state)
}

/// REST routes plus the GraphQL endpoint, with request tracing.
pub fn app(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: async_graphql_axum::GraphQLRequest,
) -> async_graphql_axum::GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
