//! Crash-consistent file replacement
//!
//! Content goes to a temporary file next to the target, is flushed to
//! stable storage, and only then renamed over the target. A reader (or a
//! process restarting after a crash) sees either the old document or the
//! new one, never a torn mix. The live file is never truncated in place.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

/// A fully written and synced temp file waiting to replace its target.
///
/// Dropping it without calling [`StagedWrite::commit`] removes the temp file
/// and leaves the target exactly as it was.
#[derive(Debug)]
pub struct StagedWrite {
    target: PathBuf,
    temp: NamedTempFile,
}

impl StagedWrite {
    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }

    /// Atomically rename the staged file over the target.
    pub fn commit(self) -> io::Result<()> {
        let Self { target, temp } = self;
        temp.persist(&target).map_err(|e| e.error)?;
        sync_parent_dir(&target);
        debug!(path = %target.display(), "committed atomic write");
        Ok(())
    }
}

/// Write `content` to a synced temp file in the same directory as `path`.
pub fn stage(path: &Path, content: &[u8]) -> io::Result<StagedWrite> {
    let dir = parent_dir(path);
    fs::create_dir_all(dir)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut temp = tempfile::Builder::new()
        .prefix(&format!(".{file_name}."))
        .suffix(".tmp")
        .tempfile_in(dir)?;

    temp.write_all(content)?;
    temp.as_file().sync_all()?;

    Ok(StagedWrite {
        target: path.to_path_buf(),
        temp,
    })
}

/// Replace `path` with `content` atomically.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    stage(path, content)?.commit()
}

/// `Path::parent` yields `""` for bare file names; that means the cwd.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

// Persist the rename itself. Not every filesystem supports fsync on a
// directory handle, so failure only costs durability of the rename.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) {
    let dir = parent_dir(path);
    if let Err(e) = fs::File::open(dir).and_then(|d| d.sync_all()) {
        debug!(dir = %dir.display(), error = %e, "could not fsync directory");
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) {}
