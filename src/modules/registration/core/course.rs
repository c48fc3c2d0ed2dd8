// Course holds identity and seat state.
//
// Invariant
// - capacity > 0, checked once in Course::new.
// - 0 <= enrolled_count <= capacity at all times. Only enroll and release_seat touch the count.

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum CourseError {
    #[error("course {code} is full ({capacity} seats)")]
    Full { code: String, capacity: u32 },

    #[error("course {code} has no enrolled students")]
    NothingToDrop { code: String },

    #[error("course {code} must have a positive capacity")]
    ZeroCapacity { code: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    code: String,
    title: String,
    description: String,
    schedule: String,
    capacity: u32,
    enrolled_count: u32,
}

impl Course {
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        capacity: u32,
        schedule: impl Into<String>,
    ) -> Result<Self, CourseError> {
        let code = code.into();
        if capacity == 0 {
            return Err(CourseError::ZeroCapacity { code });
        }
        Ok(Self {
            code,
            title: title.into(),
            description: description.into(),
            schedule: schedule.into(),
            capacity,
            enrolled_count: 0,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn enrolled_count(&self) -> u32 {
        self.enrolled_count
    }

    pub fn available_slots(&self) -> u32 {
        self.capacity - self.enrolled_count
    }

    pub fn is_full(&self) -> bool {
        self.enrolled_count >= self.capacity
    }

    /// Takes one seat. A full course is a routine outcome, so nothing changes and
    /// the caller gets [`CourseError::Full`].
    pub fn enroll(&mut self) -> Result<(), CourseError> {
        if self.is_full() {
            return Err(CourseError::Full {
                code: self.code.clone(),
                capacity: self.capacity,
            });
        }
        self.enrolled_count += 1;
        Ok(())
    }

    /// Releases one seat, failing without change when no seat is taken.
    pub fn release_seat(&mut self) -> Result<(), CourseError> {
        if self.enrolled_count == 0 {
            return Err(CourseError::NothingToDrop {
                code: self.code.clone(),
            });
        }
        self.enrolled_count -= 1;
        Ok(())
    }
}
