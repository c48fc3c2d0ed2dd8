// A student released a seat in a course.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct CourseDroppedV1 {
    pub student_id: String,
    pub course_code: String,
}
