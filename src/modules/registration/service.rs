// Registration service: the one place the enrollment rule is enforced.
//
// Responsibilities
// - Resolve the student, then the course. A failed lookup changes nothing.
// - Delegate the seat change to Student, which keeps both sides of the relationship in step.
// - Record every accepted change in the journal.
//
// Boundaries
// - Owns the catalog and roster. Callers only get shared references back.
// - Synchronous. Callers sharing a service across tasks must serialize access.

use crate::modules::registration::core::catalog::CourseCatalog;
use crate::modules::registration::core::course::Course;
use crate::modules::registration::core::events::RegistrationEvent;
use crate::modules::registration::core::events::v1::course_dropped::CourseDroppedV1;
use crate::modules::registration::core::events::v1::course_registered::CourseRegisteredV1;
use crate::modules::registration::core::roster::StudentRoster;
use crate::modules::registration::core::student::{RegisterCourseError, Student};
use crate::modules::registration::use_cases::drop_course::outcome::DropRejection;
use crate::modules::registration::use_cases::register_course::outcome::RegisterRejection;
use crate::shared::infrastructure::registration_journal::RegistrationJournal;
use crate::shared::infrastructure::registration_journal::in_memory::InMemoryRegistrationJournal;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
#[error("student {0} not found")]
pub struct StudentNotFound(pub String);

impl StudentNotFound {
    pub fn code(&self) -> &'static str {
        "STUDENT_NOT_FOUND"
    }
}

pub struct RegistrationService<TJournal = InMemoryRegistrationJournal>
where
    TJournal: RegistrationJournal,
{
    catalog: CourseCatalog,
    roster: StudentRoster,
    journal: TJournal,
}

impl<TJournal> RegistrationService<TJournal>
where
    TJournal: RegistrationJournal,
{
    pub fn new(catalog: CourseCatalog, roster: StudentRoster, journal: TJournal) -> Self {
        Self {
            catalog,
            roster,
            journal,
        }
    }

    pub fn register(
        &mut self,
        student_id: &str,
        course_code: &str,
    ) -> Result<&Course, RegisterRejection> {
        let student = self
            .roster
            .get_mut(student_id)
            .ok_or_else(|| RegisterRejection::StudentNotFound(student_id.to_string()))?;
        let course = self
            .catalog
            .get_mut(course_code)
            .ok_or_else(|| RegisterRejection::CourseNotFound(course_code.to_string()))?;

        if let Err(error) = student.register_course(course) {
            let rejection = match error {
                RegisterCourseError::AlreadyRegistered {
                    student_id,
                    course_code,
                } => RegisterRejection::AlreadyRegistered {
                    student_id,
                    course_code,
                },
                RegisterCourseError::Course(_) => {
                    RegisterRejection::CourseFull(course_code.to_string())
                }
            };
            tracing::debug!(student_id, course_code, %rejection, "registration rejected");
            return Err(rejection);
        }

        self.journal
            .record(RegistrationEvent::CourseRegisteredV1(CourseRegisteredV1 {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            }));
        tracing::info!(
            student_id,
            course_code,
            enrolled = course.enrolled_count(),
            capacity = course.capacity(),
            "course registered"
        );
        Ok(course)
    }

    pub fn drop_course(
        &mut self,
        student_id: &str,
        course_code: &str,
    ) -> Result<&Course, DropRejection> {
        let student = self
            .roster
            .get_mut(student_id)
            .ok_or_else(|| DropRejection::StudentNotFound(student_id.to_string()))?;
        let course = self
            .catalog
            .get_mut(course_code)
            .ok_or_else(|| DropRejection::CourseNotFound(course_code.to_string()))?;

        // A registered student always holds a seat, so a course-side failure
        // can only mean the pair was never linked.
        if student.drop_course(course).is_err() {
            let rejection = DropRejection::NotRegistered {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            };
            tracing::debug!(student_id, course_code, %rejection, "drop rejected");
            return Err(rejection);
        }

        self.journal
            .record(RegistrationEvent::CourseDroppedV1(CourseDroppedV1 {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            }));
        tracing::info!(
            student_id,
            course_code,
            enrolled = course.enrolled_count(),
            "course dropped"
        );
        Ok(course)
    }

    /// Courses the student holds a seat in, in registration order.
    pub fn list_registrations(&self, student_id: &str) -> Result<Vec<&Course>, StudentNotFound> {
        let student = self
            .roster
            .get(student_id)
            .ok_or_else(|| StudentNotFound(student_id.to_string()))?;
        Ok(student
            .registered_courses()
            .iter()
            .filter_map(|code| self.catalog.get(code))
            .collect())
    }

    pub fn courses(&self) -> &[Course] {
        self.catalog.list()
    }

    pub fn students(&self) -> &[Student] {
        self.roster.list()
    }

    pub fn course(&self, code: &str) -> Option<&Course> {
        self.catalog.get(code)
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.roster.get(id)
    }

    pub fn journal(&self) -> &TJournal {
        &self.journal
    }
}
