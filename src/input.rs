use crate::errors::Result;
use std::io::Read;
use std::path::PathBuf;

/// Read the raw log content from `files` in order, or from stdin when the
/// list is empty.
pub fn read_log_lines(files: &[PathBuf]) -> Result<Vec<String>> {
    let mut content = String::new();
    if files.is_empty() {
        std::io::stdin().read_to_string(&mut content)?;
    } else {
        for path in files {
            content.push_str(&std::fs::read_to_string(path)?);
        }
    }
    Ok(content.lines().map(str::to_string).collect())
}
