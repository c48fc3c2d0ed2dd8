// Closed set of reasons a registration is turned down. Success is `Ok`.
//
// Every variant is an expected, recoverable condition. None of them change state.

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum RegisterRejection {
    #[error("student {0} not found")]
    StudentNotFound(String),

    #[error("course {0} not found")]
    CourseNotFound(String),

    #[error("course {0} is full")]
    CourseFull(String),

    #[error("student {student_id} is already registered for {course_code}")]
    AlreadyRegistered {
        student_id: String,
        course_code: String,
    },
}

impl RegisterRejection {
    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::StudentNotFound(_) => "STUDENT_NOT_FOUND",
            Self::CourseNotFound(_) => "COURSE_NOT_FOUND",
            Self::CourseFull(_) => "COURSE_FULL",
            Self::AlreadyRegistered { .. } => "ALREADY_REGISTERED",
        }
    }
}

#[cfg(test)]
mod register_rejection_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RegisterRejection::StudentNotFound("S999".into()), "STUDENT_NOT_FOUND")]
    #[case(RegisterRejection::CourseNotFound("XX999".into()), "COURSE_NOT_FOUND")]
    #[case(RegisterRejection::CourseFull("CS101".into()), "COURSE_FULL")]
    #[case(
        RegisterRejection::AlreadyRegistered { student_id: "S001".into(), course_code: "CS101".into() },
        "ALREADY_REGISTERED"
    )]
    fn it_should_expose_a_distinct_code(#[case] rejection: RegisterRejection, #[case] code: &str) {
        assert_eq!(rejection.code(), code);
    }
}
