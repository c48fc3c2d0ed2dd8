// Keyed collection of every known student, in insertion order.

use crate::modules::registration::core::student::Student;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("student {0} is already on the roster")]
    DuplicateId(String),
}

#[derive(Debug, Default, Clone)]
pub struct StudentRoster {
    students: Vec<Student>,
}

impl StudentRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, student: Student) -> Result<(), RosterError> {
        if self.get(student.id()).is_some() {
            return Err(RosterError::DuplicateId(student.id().to_string()));
        }
        self.students.push(student);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id() == id)
    }

    pub fn list(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
