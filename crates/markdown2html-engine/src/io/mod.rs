use crate::parsing::{HtmlDoc, RenderOptions, convert_document};
use std::fs;
use std::path::{Path, PathBuf};
use xi_rope::Rope;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Missing {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a whole markdown document into a rope
pub fn read_document(path: &Path) -> Result<Rope, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(Rope::from(content))
}

/// Write rendered html, creating or truncating the destination
pub fn write_document(path: &Path, html: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, html).map_err(IoError::Io)
}

/// Convert `source` into `destination` in one pass.
///
/// Nothing is written unless the source was read in full.
pub fn convert_file(
    source: &Path,
    destination: &Path,
    opts: &RenderOptions,
) -> Result<HtmlDoc, IoError> {
    let rope = read_document(source)?;
    let doc = convert_document(&rope, opts);
    write_document(destination, &doc.to_html(opts.trailing_newline))?;
    log::info!(
        "wrote {} lines to {}",
        doc.lines.len(),
        destination.display()
    );
    Ok(doc)
}
