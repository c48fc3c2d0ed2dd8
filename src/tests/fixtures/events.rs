use crate::modules::registration::core::events::v1::course_registered::CourseRegisteredV1;

pub fn make_course_registered_v1_event() -> CourseRegisteredV1 {
    CourseRegisteredV1 {
        student_id: "S001".to_string(),
        course_code: "CS101".to_string(),
    }
}
