// A student took a seat in a course.
//
// Versioning
// - Prefer adding fields. Breaking changes get a V2 payload and a new variant.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct CourseRegisteredV1 {
    pub student_id: String,
    pub course_code: String,
}
