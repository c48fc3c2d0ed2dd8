use crate::modules::registration::core::student::Student;
use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
pub struct StudentView {
    pub id: String,
    pub name: String,
    pub registered_courses: Vec<String>,
}

impl From<&Student> for StudentView {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id().to_string(),
            name: student.name().to_string(),
            registered_courses: student.registered_courses().to_vec(),
        }
    }
}
