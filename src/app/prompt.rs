//! Interactive path prompts.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Asks for a path on stdin, printing `message` as the prompt.
///
/// # Errors
///
/// Fails if stdin is closed, cannot be read, or the answer is blank.
pub fn prompt_path(message: &str) -> io::Result<PathBuf> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_path_from(&mut stdin.lock(), &mut stdout.lock(), message)
}

/// Reads one line from `input` after writing `message` to `output`.
///
/// Surrounding whitespace is trimmed from the answer.
pub fn prompt_path_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<PathBuf> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no path entered (stdin closed)",
        ));
    }

    let answer = line.trim();
    if answer.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "no path entered"));
    }
    Ok(PathBuf::from(answer))
}
