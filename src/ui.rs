//! Interactive menu loop.
//!
//! Presents the four-option menu, reads one choice per pass, and
//! dispatches to register/view/save/exit. The loop is generic over a
//! `BufRead` input and a `Write` output so tests can drive whole sessions
//! from scripted buffers.
//!
//! Error reporting is uniform across every operation: a user-facing
//! message, then (when an underlying error exists) a details block with
//! the error's message, its documentation line, and its category. The
//! block is purely diagnostic; control always returns to the menu.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::storage::{self, StorageError};
use crate::student::{Student, ValidationError};

/// Fixed menu text displayed at the top of every loop pass.
pub const MENU: &str = "
    ---- Course Registration Program ----
    Select from the following menu:
    1. Register a student for the course
    2. Show current data
    3. Save data to file
    4. Exit the program
    -------------------------------------
";

/// Sentinel returned by [`input_menu_choice`] for out-of-range input.
/// It matches no dispatch arm, so the outer loop simply redisplays the
/// menu instead of re-prompting inline.
const INVALID_CHOICE_SENTINEL: &str = "0";

/// Out-of-range menu input, reported through the uniform details block.
#[derive(Debug, thiserror::Error)]
#[error("Invalid option.  Please choose between 1-4.")]
pub struct InvalidChoice;

/// Uniform diagnostics surface for recovered errors.
///
/// `Display` supplies the error message; `doc` supplies a static
/// documentation line and `category` the error's kind name, filling the
/// three lines of the details block.
pub trait Diagnostic: fmt::Display {
    fn doc(&self) -> &'static str;
    fn category(&self) -> &'static str;
}

impl Diagnostic for ValidationError {
    fn doc(&self) -> &'static str {
        match self {
            ValidationError::InvalidFirstName(_) | ValidationError::InvalidLastName(_) => {
                "Student names must consist of alphabetic characters only."
            }
            ValidationError::EmptyCourseName => "Course names must not be empty.",
        }
    }

    fn category(&self) -> &'static str {
        "ValidationError"
    }
}

impl Diagnostic for StorageError {
    fn doc(&self) -> &'static str {
        match self {
            StorageError::FileNotFound { .. } => {
                "The enrollment file does not exist at the configured path."
            }
            StorageError::Unknown(_) => {
                "An unexpected failure occurred during file access or parsing."
            }
        }
    }

    fn category(&self) -> &'static str {
        match self {
            StorageError::FileNotFound { .. } => "FileNotFound",
            StorageError::Unknown(_) => "UnknownError",
        }
    }
}

impl Diagnostic for InvalidChoice {
    fn doc(&self) -> &'static str {
        "Menu choices must be one of the displayed options."
    }

    fn category(&self) -> &'static str {
        "InvalidChoice"
    }
}

/// Session state for one run of the program: the in-memory enrollment
/// list and the configured file path.
pub struct Session {
    students: Vec<Student>,
    file_name: PathBuf,
}

impl Session {
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            students: Vec::new(),
            file_name: file_name.into(),
        }
    }

    /// Current enrollment list, insertion-ordered.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Configured enrollment file path.
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    /// Populate the session from the enrollment file. A missing file and
    /// any other load failure are both reported and recovered; the
    /// session keeps whatever it held before the call.
    pub fn load_from_disk<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match storage::load(&self.file_name, &mut self.students) {
            Ok(()) => {}
            Err(err @ StorageError::FileNotFound { .. }) => {
                warn!("Enrollment file missing, starting with an empty list");
                output_error_messages(out, "\nFile not found.", Some(&err))?;
            }
            Err(err) => {
                output_error_messages(out, "\nUnknown Error. Please contact support.", Some(&err))?;
            }
        }
        Ok(())
    }

    /// Run the menu loop until the user exits or the input closes.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        loop {
            output_menu(out)?;
            let choice = input_menu_choice(input, out)?;
            match choice.as_str() {
                "1" => self.register(input, out)?,
                "2" => self.view(out)?,
                "3" => self.save(out)?,
                "4" => {
                    writeln!(out, "Program Ended.")?;
                    info!("User exited; {} enrollment(s) in memory", self.students.len());
                    return Ok(());
                }
                // Sentinel "0": fall through and redisplay the menu.
                _ => {}
            }
        }
    }

    /// Prompt for the three fields, validate, and append on success.
    /// On validation failure nothing is appended and the details block
    /// is printed. The confirmation echoes the raw entered values, not
    /// the capitalized presentation.
    fn register<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        let first_name = prompt(input, out, "Enter the student's first name: ")?;
        let last_name = prompt(input, out, "Enter the student's last name: ")?;
        let course_name = prompt(input, out, "Enter the course name: ")?;

        match Student::new(&first_name, &last_name, &course_name) {
            Ok(student) => {
                self.students.push(student);
                writeln!(out)?;
                writeln!(
                    out,
                    "You have registered {first_name} {last_name} for {course_name}."
                )?;
                info!("Registered {first_name} {last_name} for {course_name}");
            }
            Err(err) => {
                warn!("Rejected registration: {err}");
                output_error_messages(out, "\nInvalid Entry.  See details below.", Some(&err))?;
            }
        }
        Ok(())
    }

    /// Print every record between fixed-width separators, one per line,
    /// in insertion order and capitalized form.
    fn view<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", "-".repeat(50))?;
        writeln!(out, "The current data is: ")?;
        for student in &self.students {
            writeln!(
                out,
                "{} {} {}",
                student.first_name(),
                student.last_name(),
                student.course_name()
            )?;
        }
        writeln!(out, "{}", "-".repeat(50))?;
        writeln!(out)?;
        Ok(())
    }

    /// Persist the current list to the configured file. The in-memory
    /// list is neither cleared nor reloaded.
    fn save<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match storage::save(&self.file_name, &self.students) {
            Ok(()) => writeln!(out, "INFO: Registrations have been saved.")?,
            Err(err @ StorageError::FileNotFound { .. }) => {
                output_error_messages(out, "\nFile not found.", Some(&err))?;
            }
            Err(err) => {
                output_error_messages(out, "\nUnknown Error. Please contact support.", Some(&err))?;
            }
        }
        Ok(())
    }
}

/// Display the menu followed by a blank line.
pub fn output_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{MENU}")?;
    writeln!(out)
}

/// Read one menu choice. Anything other than `"1"`..`"4"` reports the
/// invalid-option condition and returns the `"0"` sentinel; the caller's
/// loop then redisplays the menu rather than re-prompting here. A closed
/// input stream reads as the exit choice so a drained script terminates
/// instead of spinning on the menu.
pub fn input_menu_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<String> {
    write!(out, "Choose a menu option (1-4): ")?;
    out.flush()?;

    let choice = match read_line(input)? {
        Some(line) => line,
        None => return Ok("4".to_string()),
    };

    if matches!(choice.as_str(), "1" | "2" | "3" | "4") {
        Ok(choice)
    } else {
        output_error_messages(out, "", Some(&InvalidChoice))?;
        Ok(INVALID_CHOICE_SENTINEL.to_string())
    }
}

/// Standardized error output: the user-facing message, a blank line,
/// then the three-line details block when an underlying error exists.
pub fn output_error_messages<W: Write>(
    out: &mut W,
    message: &str,
    error: Option<&dyn Diagnostic>,
) -> io::Result<()> {
    writeln!(out, "{message}")?;
    writeln!(out)?;
    if let Some(error) = error {
        writeln!(out, "--- Error Details ---")?;
        writeln!(out, "{error}")?;
        writeln!(out, "{}", error.doc())?;
        writeln!(out, "{}", error.category())?;
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<String> {
    write!(out, "{text}")?;
    out.flush()?;
    // EOF reads as the empty string, which validation then rejects.
    Ok(read_line(input)?.unwrap_or_default())
}

/// One line of input with the trailing newline stripped; `None` at EOF.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Drive a full session over scripted input, returning the captured
    /// output and the final session state.
    fn run_session(script: &str) -> (Session, String) {
        let mut session = Session::new("unused.json");
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        session.run(&mut input, &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_register_appends_one_student() {
        let (session, output) = run_session("1\nJohn\nSmith\nBiology\n4\n");

        assert_eq!(session.students().len(), 1);
        assert_eq!(session.students()[0].to_string(), "John,Smith,Biology");
        assert!(output.contains("You have registered John Smith for Biology."));
    }

    #[test]
    fn test_register_echoes_raw_values() {
        let (session, output) = run_session("1\njohn\nsmith\nBiology\n4\n");

        // Confirmation shows the values as typed; presentation is
        // capitalized only on read.
        assert!(output.contains("You have registered john smith for Biology."));
        assert_eq!(session.students()[0].first_name(), "John");
    }

    #[test]
    fn test_register_invalid_name_appends_nothing() {
        let (session, output) = run_session("1\nJ0hn\nSmith\nBiology\n4\n");

        assert!(session.students().is_empty());
        assert!(output.contains("Invalid Entry.  See details below."));
        assert!(output.contains("--- Error Details ---"));
        assert!(output.contains("First name can't contain non-alphabetic values: 'J0hn'"));
        assert!(output.contains("ValidationError"));
    }

    #[test]
    fn test_register_empty_course_appends_nothing() {
        let (session, output) = run_session("1\nJohn\nSmith\n\n4\n");

        assert!(session.students().is_empty());
        assert!(output.contains("Course name can't be empty."));
    }

    #[test]
    fn test_invalid_menu_choice_redisplays_menu() {
        let (session, output) = run_session("9\n4\n");

        assert!(session.students().is_empty());
        assert!(output.contains("Invalid option.  Please choose between 1-4."));
        // Menu shown once for the invalid pass and once before exit
        assert_eq!(output.matches("---- Course Registration Program ----").count(), 2);
        assert!(output.contains("Program Ended."));
    }

    #[test]
    fn test_non_numeric_menu_choice_is_also_invalid() {
        let (_, output) = run_session("save\n4\n");
        assert!(output.contains("Invalid option.  Please choose between 1-4."));
    }

    #[test]
    fn test_view_frames_records_with_separators() {
        let (_, output) = run_session("1\nann\nlee\nArt\n2\n4\n");

        let separator = "-".repeat(50);
        assert_eq!(output.matches(separator.as_str()).count(), 2);
        assert!(output.contains("The current data is: "));
        assert!(output.contains("Ann Lee Art"));
    }

    #[test]
    fn test_view_with_no_records_still_prints_frame() {
        let (_, output) = run_session("2\n4\n");

        let separator = "-".repeat(50);
        assert_eq!(output.matches(separator.as_str()).count(), 2);
        assert!(output.contains("The current data is: "));
    }

    #[test]
    fn test_exit_prints_termination_message() {
        let (_, output) = run_session("4\n");
        assert!(output.contains("Program Ended."));
    }

    #[test]
    fn test_eof_terminates_loop() {
        // Drained input must not spin on the menu.
        let (_, output) = run_session("");
        assert!(output.contains("Program Ended."));
    }

    #[test]
    fn test_input_menu_choice_returns_sentinel() {
        let mut input = Cursor::new("7\n".to_string());
        let mut output = Vec::new();
        let choice = input_menu_choice(&mut input, &mut output).unwrap();
        assert_eq!(choice, "0");
    }

    #[test]
    fn test_error_details_block_has_three_lines() {
        let mut output = Vec::new();
        output_error_messages(&mut output, "\nInvalid Entry.  See details below.",
            Some(&ValidationError::EmptyCourseName)).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("--- Error Details ---"));
        assert!(text.contains("Course name can't be empty."));
        assert!(text.contains("Course names must not be empty."));
        assert!(text.contains("ValidationError"));
    }

    #[test]
    fn test_message_without_error_omits_details_block() {
        let mut output = Vec::new();
        output_error_messages(&mut output, "\nFile not found.", None).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(!text.contains("--- Error Details ---"));
    }
}
