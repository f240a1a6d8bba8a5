use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::parsing::{lines::lines_with_spans, parse};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown file and return its lines, terminators included
pub fn read_lines(path: &Path) -> Result<Vec<String>, IoError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IoError::NotFound(path.to_path_buf()),
        _ => IoError::Io(e),
    })?;
    let lines: Vec<String> = lines_with_spans(&content)
        .map(|lr| lr.text.to_string())
        .collect();
    debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Write converted HTML to a file
pub fn write_html(path: &Path, html: &str, create_parent_dirs: bool) -> Result<(), IoError> {
    if create_parent_dirs
        && let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, html).map_err(IoError::Io)?;
    debug!("wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

/// Convert the markdown file at `src` and write the HTML to `dest`
pub fn convert_file(src: &Path, dest: &Path, create_parent_dirs: bool) -> Result<(), IoError> {
    let lines = read_lines(src)?;
    let html = parse(&lines);
    write_html(dest, &html, create_parent_dirs)
}
