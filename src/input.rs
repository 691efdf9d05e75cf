//! Interactive prompting for the no-arguments entry mode.
//!
//! Each field is validated as it is entered; invalid input prints a short
//! error and reprompts.

use std::io::{self, BufRead, Write};

use camino::{Utf8Path, Utf8PathBuf};

use crate::export::OutputFormat;

/// All values gathered from the interactive prompts.
#[derive(Debug)]
pub struct InteractiveArgs {
    pub students: Utf8PathBuf,
    pub rooms: Utf8PathBuf,
    pub format: OutputFormat,
    pub output_name: String,
}

/// Run the sequential prompts, reprompting until every field validates.
pub fn gather_interactive_args() -> io::Result<InteractiveArgs> {
    println!("Please provide the following information:");

    let students = prompt_until("Path to students JSON file: ", parse_existing_path)?;
    let rooms = prompt_until("Path to rooms JSON file: ", parse_existing_path)?;
    let format = prompt_until("Output format (json/xml): ", |token| {
        token.parse::<OutputFormat>().map_err(|e| e.to_string())
    })?;
    let output_name = prompt_until("Output file name (without extension): ", |token| {
        if token.is_empty() {
            Err("Output name must not be empty.".to_string())
        } else {
            Ok(token.to_string())
        }
    })?;

    Ok(InteractiveArgs {
        students,
        rooms,
        format,
        output_name,
    })
}

/// True if `path` names an existing file this process can open for reading.
pub fn file_readable(path: &Utf8Path) -> bool {
    std::fs::File::open(path.as_std_path()).is_ok()
}

fn parse_existing_path(token: &str) -> std::result::Result<Utf8PathBuf, String> {
    let path = Utf8PathBuf::from(token);
    if file_readable(&path) {
        Ok(path)
    } else {
        Err(format!("Error: file '{}' not found or not readable.", path))
    }
}

/// Prompt on stdout and read lines from stdin until `parse` accepts one.
fn prompt_until<T>(
    prompt: &str,
    mut parse: impl FnMut(&str) -> std::result::Result<T, String>,
) -> io::Result<T> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(message) => println!("{}", message),
        }
    }
}
