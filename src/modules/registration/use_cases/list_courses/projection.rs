// Read model for a course as front ends display it.

use crate::modules::registration::core::course::Course;
use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
pub struct CourseView {
    pub code: String,
    pub title: String,
    pub description: String,
    pub schedule: String,
    pub capacity: u32,
    pub enrolled_count: u32,
    pub available_slots: u32,
}

impl From<&Course> for CourseView {
    fn from(course: &Course) -> Self {
        Self {
            code: course.code().to_string(),
            title: course.title().to_string(),
            description: course.description().to_string(),
            schedule: course.schedule().to_string(),
            capacity: course.capacity(),
            enrolled_count: course.enrolled_count(),
            available_slots: course.available_slots(),
        }
    }
}
