use axum::{Json, extract::State, response::IntoResponse};

use crate::shared::infrastructure::registration_journal::{JournalEntry, RegistrationJournal};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.service.lock().await;
    let entries: Vec<JournalEntry> = service.journal().entries().to_vec();
    Json(entries)
}
