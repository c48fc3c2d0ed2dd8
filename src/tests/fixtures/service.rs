// Service fixture: CS101 with a single seat, MATH101 with two, PHYS101 with twenty,
// and students S001 and S002.

use crate::modules::registration::core::catalog::CourseCatalog;
use crate::modules::registration::core::roster::StudentRoster;
use crate::modules::registration::core::student::Student;
use crate::modules::registration::service::RegistrationService;
use crate::shared::infrastructure::registration_journal::RegistrationJournal;
use crate::shared::infrastructure::registration_journal::in_memory::InMemoryRegistrationJournal;
use crate::tests::fixtures::courses::CourseBuilder;

pub fn make_service() -> RegistrationService {
    let mut catalog = CourseCatalog::new();
    catalog
        .add(CourseBuilder::new().code("CS101").capacity(1).build())
        .unwrap();
    catalog
        .add(
            CourseBuilder::new()
                .code("MATH101")
                .title("Calculus I")
                .capacity(2)
                .build(),
        )
        .unwrap();
    catalog
        .add(
            CourseBuilder::new()
                .code("PHYS101")
                .title("Physics I")
                .capacity(20)
                .build(),
        )
        .unwrap();

    let mut roster = StudentRoster::new();
    roster.add(Student::new("S001", "John Doe")).unwrap();
    roster.add(Student::new("S002", "Jane Smith")).unwrap();

    RegistrationService::new(catalog, roster, InMemoryRegistrationJournal::new())
}

/// Every course's count equals the number of students listing it, and no student
/// lists a course twice.
pub fn assert_relationship_holds<J: RegistrationJournal>(service: &RegistrationService<J>) {
    for course in service.courses() {
        let holders = service
            .students()
            .iter()
            .filter(|s| s.is_registered_for(course.code()))
            .count();
        assert_eq!(
            holders as u32,
            course.enrolled_count(),
            "count mismatch for {}",
            course.code()
        );
    }
    for student in service.students() {
        let mut codes = student.registered_courses().to_vec();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), student.registered_courses().len());
    }
}
