use crate::modules::registration::service::RegistrationService;
use crate::shared::infrastructure::registration_journal::in_memory::InMemoryRegistrationJournal;
use std::sync::Arc;
use tokio::sync::Mutex;

/// One lock in front of the whole service. Every request runs its
/// lookup-then-mutate sequence alone, so two registrations can never both see
/// the last free seat.
pub type SharedRegistrationService = Arc<Mutex<RegistrationService<InMemoryRegistrationJournal>>>;

#[derive(Clone)]
pub struct AppState {
    pub service: SharedRegistrationService,
}

impl AppState {
    pub fn new(service: RegistrationService<InMemoryRegistrationJournal>) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }
}
