// Keyed collection of every known course, in insertion order.
//
// Courses are added once at startup and never removed. Lookups are linear scans,
// the catalog is small.

use crate::modules::registration::core::course::Course;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("course {0} is already in the catalog")]
    DuplicateCode(String),
}

#[derive(Debug, Default, Clone)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, course: Course) -> Result<(), CatalogError> {
        if self.get(course.code()).is_some() {
            return Err(CatalogError::DuplicateCode(course.code().to_string()));
        }
        self.courses.push(course);
        Ok(())
    }

    pub fn get(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code() == code)
    }

    pub(crate) fn get_mut(&mut self, code: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.code() == code)
    }

    pub fn list(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod course_catalog_tests {
    use super::*;
    use crate::tests::fixtures::courses::CourseBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> CourseCatalog {
        let mut catalog = CourseCatalog::new();
        catalog
            .add(CourseBuilder::new().code("CS101").build())
            .unwrap();
        catalog
            .add(CourseBuilder::new().code("MATH101").build())
            .unwrap();
        catalog
    }

    #[rstest]
    fn it_should_find_a_course_by_code(catalog: CourseCatalog) {
        let course = catalog.get("MATH101").expect("course missing");
        assert_eq!(course.code(), "MATH101");
    }

    #[rstest]
    fn it_should_return_none_for_an_unknown_code(catalog: CourseCatalog) {
        assert!(catalog.get("ZZZ").is_none());
    }

    #[rstest]
    fn it_should_list_courses_in_insertion_order(catalog: CourseCatalog) {
        let codes: Vec<&str> = catalog.list().iter().map(Course::code).collect();
        assert_eq!(codes, vec!["CS101", "MATH101"]);
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[rstest]
    fn it_should_reject_a_duplicate_code(mut catalog: CourseCatalog) {
        let result = catalog.add(CourseBuilder::new().code("CS101").title("Other").build());
        assert_eq!(result, Err(CatalogError::DuplicateCode("CS101".to_string())));
        assert_eq!(catalog.len(), 2);
        assert_ne!(catalog.get("CS101").unwrap().title(), "Other");
    }
}
