use crate::shell::state::AppState;
use crate::tests::fixtures::service::make_service;

pub fn make_test_state() -> AppState {
    AppState::new(make_service())
}
