use std::path::Path;

use anyhow::{Context, Result};

/// whole file in one go, lines and terminators untouched
pub fn read_file_to_string(filename: impl AsRef<Path>) -> Result<String> {
    debug!(
        "reading file {file} with current dir {pwd}",
        file = filename.as_ref().display(),
        pwd = std::env::current_dir().unwrap_or_default().display()
    );
    let text = std::fs::read_to_string(&filename).with_context(|| {
        format!(
            "failed to read file: {s} cwd: {cur}",
            s = filename.as_ref().display(),
            cur = std::env::current_dir().unwrap_or_default().display()
        )
    })?;
    Ok(text)
}

pub trait ToStringOr {
    fn to_string_or(&self, s: &str) -> String;
}

impl<T: ToString> ToStringOr for Option<T> {
    fn to_string_or(&self, s: &str) -> String {
        match self {
            Some(t) => t.to_string(),
            None => s.to_string(),
        }
    }
}
