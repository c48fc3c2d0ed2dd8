// Composition root for the registration service.
//
// Responsibilities
// - Read config from the environment.
// - Seed the service and wrap it in shared state.
// - Expose the use cases over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
