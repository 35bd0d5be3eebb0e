//! Enrollment file storage.
//!
//! Reads and writes the full student list as a single JSON file: an array
//! of objects with the keys `FirstName`, `LastName`, `CourseName`, written
//! without indentation. This is the sole on-disk format; there is no
//! versioning field and no schema evolution.
//!
//! Errors fall into exactly two categories: [`StorageError::FileNotFound`]
//! for a missing file on load, and [`StorageError::Unknown`] for every
//! other I/O, parse, or record-construction failure. Both leave the
//! caller's collection untouched.

use std::fs;
use std::io;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::student::Student;

/// On-disk shape of one enrollment record. Serde renames produce the
/// exact key spelling the file format requires.
#[derive(Debug, Serialize, Deserialize)]
struct EnrollmentRecord {
    #[serde(rename = "FirstName")]
    first_name: String,
    #[serde(rename = "LastName")]
    last_name: String,
    #[serde(rename = "CourseName")]
    course_name: String,
}

/// Storage errors, one variant per reported category.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Enrollment file '{path}' not found")]
    FileNotFound { path: String },
    #[error("Unknown storage error: {0}")]
    Unknown(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Load enrollments from `path`, appending to `students` in file order.
///
/// A missing file reports [`StorageError::FileNotFound`]; any other
/// failure (I/O, malformed JSON, or a persisted record that no longer
/// passes validation) reports [`StorageError::Unknown`] with the
/// underlying detail. Rows are staged and only appended once the whole
/// file has validated, so on any error `students` is exactly as passed in.
pub fn load(path: impl AsRef<Path>, students: &mut Vec<Student>) -> Result<(), StorageError> {
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(StorageError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Err(err) => return Err(StorageError::Unknown(Box::new(err))),
    };

    let records: Vec<EnrollmentRecord> =
        serde_json::from_str(&contents).map_err(|err| StorageError::Unknown(Box::new(err)))?;

    let mut loaded = Vec::with_capacity(records.len());
    for record in records {
        let student = Student::new(&record.first_name, &record.last_name, &record.course_name)
            .map_err(|err| StorageError::Unknown(Box::new(err)))?;
        loaded.push(student);
    }

    info!(
        "Loaded {} enrollment(s) from '{}'",
        loaded.len(),
        path.display()
    );
    students.extend(loaded);
    Ok(())
}

/// Save the full enrollment list to `path`, overwriting any existing
/// content. Values are written in their capitalized presentation form,
/// not the raw stored form.
///
/// Truncate-and-write with no lock, no atomic rename, and no backup: a
/// failure mid-write can lose the previous file contents.
pub fn save(path: impl AsRef<Path>, students: &[Student]) -> Result<(), StorageError> {
    let path = path.as_ref();

    let records: Vec<EnrollmentRecord> = students
        .iter()
        .map(|student| EnrollmentRecord {
            first_name: student.first_name(),
            last_name: student.last_name(),
            course_name: student.course_name().to_string(),
        })
        .collect();

    let json =
        serde_json::to_string(&records).map_err(|err| StorageError::Unknown(Box::new(err)))?;
    fs::write(path, json).map_err(|err| StorageError::Unknown(Box::new(err)))?;

    info!(
        "Saved {} enrollment(s) to '{}'",
        records.len(),
        path.display()
    );
    Ok(())
}
