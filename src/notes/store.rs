use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::Settings;

/// Path of the daily note for `date`: `<vault>/<subdir>/<date>.md`.
///
/// Creates the notes directory (and any missing ancestors) as a side effect.
pub fn daily_note_path(settings: &Settings, date: &str) -> Result<PathBuf> {
    let dir = ensure_notes_dir(settings)?;
    Ok(dir.join(format!("{}.md", date)))
}

/// Path of the generated summary for `date`: `<vault>/<subdir>/<date>.summary.md`.
pub fn daily_summary_path(settings: &Settings, date: &str) -> Result<PathBuf> {
    let dir = ensure_notes_dir(settings)?;
    Ok(dir.join(format!("{}.summary.md", date)))
}

fn ensure_notes_dir(settings: &Settings) -> Result<PathBuf> {
    let dir = settings.notes_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create notes directory: {:?}", dir))?;
    Ok(dir)
}

/// Whether anything exists at `path`. A file, a directory, or an empty file
/// all count as an already-started day.
pub fn exists(path: &Path) -> bool {
    std::fs::metadata(path).is_ok()
}

/// Create or truncate `path` with `content`.
pub fn write(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write note: {:?}", path))?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

/// Append `content` to `path`, creating the file if needed.
///
/// If the write fails part way, the file is truncated back to its previous
/// length before the error is returned.
pub fn append(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open note for append: {:?}", path))?;

    let original_len = file
        .metadata()
        .with_context(|| format!("Failed to stat note: {:?}", path))?
        .len();

    if let Err(err) = file.write_all(content.as_bytes()).and_then(|_| file.flush()) {
        if let Err(rollback) = file.set_len(original_len) {
            warn!("Failed to roll back partial append to {:?}: {}", path, rollback);
        }
        return Err(err).with_context(|| format!("Failed to append to note: {:?}", path));
    }

    debug!("Appended {} bytes to {:?}", content.len(), path);
    Ok(())
}

/// Read the full text of a note.
pub fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read note: {:?}", path))
}
