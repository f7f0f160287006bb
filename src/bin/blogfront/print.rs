use blogfront::application::error::AppError;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::unexpected(format!("failed to render output: {e}")))?;
    println!("{out}");
    Ok(())
}

/// Rendered templates already end with a newline.
pub fn print_view(rendered: &str) {
    print!("{rendered}");
}

pub fn print_line(line: &str) {
    println!("{line}");
}
