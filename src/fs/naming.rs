//! File and folder name sanitization.

use crate::error::{Error, Result};

/// Replace characters that are invalid in file names on common platforms.
fn replace_reserved(name: &str, extra: &[char]) -> String {
    name.chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if extra.contains(&c) || c.is_control() => '_',
            c => c,
        })
        .collect()
}

fn reject_unsafe(name: &str, what: &str) -> Result<()> {
    if name == "." || name == ".." || name.contains("../") || name.contains("..\\") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected in {}: '{}'",
            what, name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in {}: '{}'",
            what, name
        )));
    }

    Ok(())
}

/// Sanitize a descriptor name so it can be written inside the download folder.
///
/// Query strings that leak into the extension (`file.jpg?token=1`) become
/// underscores. Names containing separators or traversal are rejected.
pub fn sanitize_filename(name: &str) -> Result<String> {
    reject_unsafe(name, "filename")?;

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    let sanitized = replace_reserved(name, &[]);
    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Sanitize a folder name such as the username, replacing separators.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    reject_unsafe(name, "path component")?;

    let sanitized = replace_reserved(name, &['/', '\\']);
    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}
