// Student keeps the ordered list of course codes it holds a seat in.
//
// Invariant
// - A code is in registered_courses iff this student counted toward that course's
//   enrolled_count. Both sides change together or not at all.

use crate::modules::registration::core::course::{Course, CourseError};

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum RegisterCourseError {
    #[error("student {student_id} is already registered for {course_code}")]
    AlreadyRegistered {
        student_id: String,
        course_code: String,
    },

    #[error(transparent)]
    Course(#[from] CourseError),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DropCourseError {
    #[error("student {student_id} is not registered for {course_code}")]
    NotRegistered {
        student_id: String,
        course_code: String,
    },

    #[error(transparent)]
    Course(#[from] CourseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: String,
    name: String,
    registered_courses: Vec<String>,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            registered_courses: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Course codes in registration order.
    pub fn registered_courses(&self) -> &[String] {
        &self.registered_courses
    }

    pub fn is_registered_for(&self, course_code: &str) -> bool {
        self.registered_courses.iter().any(|c| c == course_code)
    }

    pub fn register_course(&mut self, course: &mut Course) -> Result<(), RegisterCourseError> {
        if self.is_registered_for(course.code()) {
            return Err(RegisterCourseError::AlreadyRegistered {
                student_id: self.id.clone(),
                course_code: course.code().to_string(),
            });
        }
        course.enroll()?;
        self.registered_courses.push(course.code().to_string());
        Ok(())
    }

    pub fn drop_course(&mut self, course: &mut Course) -> Result<(), DropCourseError> {
        let position = self
            .registered_courses
            .iter()
            .position(|c| c == course.code())
            .ok_or_else(|| DropCourseError::NotRegistered {
                student_id: self.id.clone(),
                course_code: course.code().to_string(),
            })?;
        course.release_seat()?;
        self.registered_courses.remove(position);
        Ok(())
    }
}
