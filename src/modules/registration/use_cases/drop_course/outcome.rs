// Closed set of reasons a drop is turned down. Success is `Ok`.

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DropRejection {
    #[error("student {0} not found")]
    StudentNotFound(String),

    #[error("course {0} not found")]
    CourseNotFound(String),

    #[error("student {student_id} is not registered for {course_code}")]
    NotRegistered {
        student_id: String,
        course_code: String,
    },
}

impl DropRejection {
    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::StudentNotFound(_) => "STUDENT_NOT_FOUND",
            Self::CourseNotFound(_) => "COURSE_NOT_FOUND",
            Self::NotRegistered { .. } => "NOT_REGISTERED",
        }
    }
}
