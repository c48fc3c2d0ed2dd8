use crate::modules::registration::core::events::RegistrationEvent;
use crate::shared::infrastructure::registration_journal::{JournalEntry, RegistrationJournal};
use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryRegistrationJournal {
    entries: Vec<JournalEntry>,
}

impl InMemoryRegistrationJournal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistrationJournal for InMemoryRegistrationJournal {
    fn record(&mut self, event: RegistrationEvent) -> &JournalEntry {
        let sequence = self.entries.len() as u64 + 1;
        self.entries.push(JournalEntry {
            event_id: Uuid::now_v7(),
            sequence,
            occurred_at: Utc::now().timestamp_millis(),
            event,
        });
        &self.entries[self.entries.len() - 1]
    }

    fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod in_memory_registration_journal_tests {
    use super::*;
    use crate::modules::registration::core::events::v1::course_dropped::CourseDroppedV1;
    use crate::tests::fixtures::events::make_course_registered_v1_event;
    use rstest::rstest;

    #[rstest]
    fn it_should_record_an_event() {
        let mut journal = InMemoryRegistrationJournal::new();
        let event = RegistrationEvent::CourseRegisteredV1(make_course_registered_v1_event());
        let entry = journal.record(event.clone());
        assert_eq!(entry.sequence, 1);
        assert_eq!(entry.event, event);
        assert!(entry.occurred_at > 0);
    }

    #[rstest]
    fn it_should_number_entries_in_append_order() {
        let mut journal = InMemoryRegistrationJournal::new();
        journal.record(RegistrationEvent::CourseRegisteredV1(
            make_course_registered_v1_event(),
        ));
        journal.record(RegistrationEvent::CourseDroppedV1(CourseDroppedV1 {
            student_id: "S001".into(),
            course_code: "CS101".into(),
        }));

        let entries = journal.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sequence, 1);
        assert_eq!(entries[1].sequence, 2);
        assert_ne!(entries[0].event_id, entries[1].event_id);
        assert!(matches!(
            entries[1].event,
            RegistrationEvent::CourseDroppedV1(_)
        ));
    }
}
