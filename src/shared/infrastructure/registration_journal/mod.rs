// Journal port: an append-only record of accepted registration events.
//
// Responsibilities
// - Assign each recorded event a sequence number, an id and a timestamp.
// - Never expose a way to rewrite or remove an entry.

pub mod in_memory;

use crate::modules::registration::core::events::RegistrationEvent;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub event_id: Uuid,
    pub sequence: u64,
    pub occurred_at: i64,
    pub event: RegistrationEvent,
}

pub trait RegistrationJournal: Send {
    fn record(&mut self, event: RegistrationEvent) -> &JournalEntry;
    fn entries(&self) -> &[JournalEntry];
}
