use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use blogfront::{application::error::AppError, infra::error::InfraError};

/// Inline content wins only when no file is given; neither yields an empty body.
pub fn read_content(content: Option<String>, file: Option<PathBuf>) -> Result<String, AppError> {
    if let Some(path) = file {
        return fs::read_to_string(&path).map_err(|source| AppError::InputFile {
            path: path.display().to_string(),
            source,
        });
    }
    Ok(content.unwrap_or_default())
}

/// Yes/no question asked before a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool, AppError>;
}

/// Prompts on stderr and reads the answer from stdin.
pub struct Terminal;

impl Confirm for Terminal {
    fn confirm(&mut self, prompt: &str) -> Result<bool, AppError> {
        let stdin = std::io::stdin();
        ask(prompt, &mut stdin.lock(), &mut std::io::stderr())
    }
}

pub fn ask<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool, AppError> {
    write!(output, "{prompt}").map_err(InfraError::from)?;
    output.flush().map_err(InfraError::from)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(InfraError::from)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
