// Builder for Course values in tests. Defaults mirror the CS101 seed record.

use crate::modules::registration::core::course::{Course, CourseError};

pub struct CourseBuilder {
    code: String,
    title: String,
    description: String,
    capacity: u32,
    schedule: String,
}

impl Default for CourseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CourseBuilder {
    pub fn new() -> Self {
        Self {
            code: "CS101".to_string(),
            title: "Introduction to Computer Science".to_string(),
            description: "Learn the basics of computer science".to_string(),
            capacity: 30,
            schedule: "MWF 9:00-10:00".to_string(),
        }
    }

    pub fn code(mut self, v: impl Into<String>) -> Self {
        self.code = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.description = v.into();
        self
    }

    pub fn capacity(mut self, v: u32) -> Self {
        self.capacity = v;
        self
    }

    pub fn schedule(mut self, v: impl Into<String>) -> Self {
        self.schedule = v.into();
        self
    }

    pub fn try_build(self) -> Result<Course, CourseError> {
        Course::new(
            self.code,
            self.title,
            self.description,
            self.capacity,
            self.schedule,
        )
    }

    pub fn build(self) -> Course {
        self.try_build().expect("builder produced an invalid course")
    }
}

#[cfg(test)]
mod course_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_the_default_course() {
        let course = CourseBuilder::new().build();
        assert_eq!(course.code(), "CS101");
        assert_eq!(course.capacity(), 30);
        assert_eq!(course.schedule(), "MWF 9:00-10:00");
    }

    #[rstest]
    fn it_should_override_fields() {
        let course = CourseBuilder::new()
            .code("ART100")
            .title("Drawing")
            .description("Pencils")
            .capacity(3)
            .schedule("F 14:00-16:00")
            .build();
        assert_eq!(course.code(), "ART100");
        assert_eq!(course.title(), "Drawing");
        assert_eq!(course.description(), "Pencils");
        assert_eq!(course.capacity(), 3);
        assert_eq!(course.schedule(), "F 14:00-16:00");
    }
}
