pub mod v1 {
    pub mod course_dropped;
    pub mod course_registered;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RegistrationEvent {
    CourseRegisteredV1(v1::course_registered::CourseRegisteredV1),
    CourseDroppedV1(v1::course_dropped::CourseDroppedV1),
}

impl RegistrationEvent {
    pub fn student_id(&self) -> &str {
        match self {
            RegistrationEvent::CourseRegisteredV1(e) => &e.student_id,
            RegistrationEvent::CourseDroppedV1(e) => &e.student_id,
        }
    }

    pub fn course_code(&self) -> &str {
        match self {
            RegistrationEvent::CourseRegisteredV1(e) => &e.course_code,
            RegistrationEvent::CourseDroppedV1(e) => &e.course_code,
        }
    }
}

#[cfg(test)]
mod registration_event_tests {
    use super::*;
    use crate::tests::fixtures::events::make_course_registered_v1_event;
    use rstest::rstest;

    #[rstest]
    fn it_should_serialize_with_a_type_tag() {
        let event = RegistrationEvent::CourseRegisteredV1(make_course_registered_v1_event());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "CourseRegisteredV1",
                "student_id": "S001",
                "course_code": "CS101",
            })
        );
    }

    #[rstest]
    fn it_should_expose_the_pair_it_concerns() {
        let event = RegistrationEvent::CourseDroppedV1(v1::course_dropped::CourseDroppedV1 {
            student_id: "S002".into(),
            course_code: "PHYS101".into(),
        });
        assert_eq!(event.student_id(), "S002");
        assert_eq!(event.course_code(), "PHYS101");
    }
}
