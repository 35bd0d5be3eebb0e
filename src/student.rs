//! Student record and field validation.
//!
//! A `Student` binds a first name, last name, and course name. The name
//! fields accept alphabetic characters only and the course name must be
//! non-empty; both rules are enforced at construction and on every
//! assignment, so a `Student` that exists always satisfies them. Names are
//! stored in the form the user typed and title-cased on every read.

use std::fmt;

/// Validation errors for student record fields.
///
/// Each variant carries the rejected value so error output can show the
/// user exactly what was refused.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("First name can't contain non-alphabetic values: '{0}'")]
    InvalidFirstName(String),
    #[error("Last name can't contain non-alphabetic values: '{0}'")]
    InvalidLastName(String),
    #[error("Course name can't be empty.")]
    EmptyCourseName,
}

/// One student-course enrollment record.
///
/// Fields are private and only reachable through the validating
/// constructor and setters, which is what upholds the invariants above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    first_name: String,
    last_name: String,
    course_name: String,
}

impl Student {
    /// Construct a record, validating every field.
    ///
    /// # Returns
    /// * `Ok(Student)` if all three fields pass validation
    /// * `Err(ValidationError)` naming the first offending field; no
    ///   partial record is created
    pub fn new(
        first_name: &str,
        last_name: &str,
        course_name: &str,
    ) -> Result<Self, ValidationError> {
        let mut student = Self {
            first_name: String::new(),
            last_name: String::new(),
            course_name: String::new(),
        };
        student.set_first_name(first_name)?;
        student.set_last_name(last_name)?;
        student.set_course_name(course_name)?;
        Ok(student)
    }

    /// First name, title-cased regardless of the stored form.
    pub fn first_name(&self) -> String {
        title_case(&self.first_name)
    }

    /// Last name, title-cased regardless of the stored form.
    pub fn last_name(&self) -> String {
        title_case(&self.last_name)
    }

    /// Course name, exactly as entered.
    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    /// Replace the first name; rejects non-alphabetic values and leaves
    /// the current value in place on failure.
    pub fn set_first_name(&mut self, value: &str) -> Result<(), ValidationError> {
        if !is_alphabetic(value) {
            return Err(ValidationError::InvalidFirstName(value.to_string()));
        }
        self.first_name = value.to_string();
        Ok(())
    }

    /// Replace the last name under the same rule as the first name.
    pub fn set_last_name(&mut self, value: &str) -> Result<(), ValidationError> {
        if !is_alphabetic(value) {
            return Err(ValidationError::InvalidLastName(value.to_string()));
        }
        self.last_name = value.to_string();
        Ok(())
    }

    /// Replace the course name; rejects the empty string.
    pub fn set_course_name(&mut self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyCourseName);
        }
        self.course_name = value.to_string();
        Ok(())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.first_name(),
            self.last_name(),
            self.course_name
        )
    }
}

/// Non-empty and alphabetic-only. The empty string fails, matching the
/// "non-empty by virtue of the character check" rule.
fn is_alphabetic(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

/// First character uppercased, the rest lowercased.
fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
