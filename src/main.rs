use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::io;

use registrar::ui::Session;

/// Compiled-in enrollment data file. The tool takes no command-line
/// arguments and reads no environment configuration.
const FILE_NAME: &str = "enrollments.json";

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting course registration program");
    info!("Enrollment file: {FILE_NAME}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let mut session = Session::new(FILE_NAME);

    // Both load error categories are reported to the console and
    // recovered; the session starts empty in that case.
    session.load_from_disk(&mut output)?;

    session.run(&mut input, &mut output)?;

    info!("Course registration program finished");
    Ok(())
}
