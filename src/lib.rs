//! # Registrar - menu-driven course registration tool
//!
//! This library provides the data model, storage, and interaction loop
//! for a small student course-registration program. Enrollments are held
//! in memory for the lifetime of a session and persisted on request to a
//! single JSON file.
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - `student`: the validated Student record (alphabetic names, non-empty
//!   course) with title-cased presentation
//! - `storage`: JSON load/save of the full enrollment list
//! - `ui`: the interactive menu loop and uniform error reporting
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::io;
//! use registrar::ui::Session;
//!
//! let mut session = Session::new("enrollments.json");
//! let stdin = io::stdin();
//! let stdout = io::stdout();
//! session.load_from_disk(&mut stdout.lock())?;
//! session.run(&mut stdin.lock(), &mut stdout.lock())?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## File Format
//!
//! The enrollment file is a JSON array of objects, written compact:
//!
//! ```json
//! [{"FirstName":"John","LastName":"Smith","CourseName":"Biology"}]
//! ```

pub mod storage;
pub mod student;
pub mod ui;

pub use storage::StorageError;
pub use student::{Student, ValidationError};
