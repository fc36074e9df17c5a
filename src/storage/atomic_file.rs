//! Atomic file replacement
//!
//! Every persisted file is rewritten wholesale: contents go to a sibling
//! `<name>.tmp`, get flushed and synced, then the temp file is renamed over
//! the target, and the parent directory is synced so the rename survives a
//! power loss (unix). Readers see either the old or the new contents, never
//! a partial write.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Replace `path` with whatever `write` produces
///
/// On error the target is left untouched and the temp file is removed
/// (best effort).
pub fn replace_with<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let tmp_path = temp_path(path);

    let result = write_and_rename(path, &tmp_path, write);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

/// Replace `path` with `bytes`
pub fn replace(path: &Path, bytes: &[u8]) -> io::Result<()> {
    replace_with(path, |writer| writer.write_all(bytes))
}

fn write_and_rename<F>(path: &Path, tmp_path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(tmp_path)?;

    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer.flush()?;

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    drop(file);

    fs::rename(tmp_path, path)?;
    sync_parent_dir(path)
}

/// Make the rename itself durable
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    File::open(parent)?.sync_all()
}

// Directories cannot be opened as files here; rename durability is up to the OS
#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// "employees.json" → "employees.json.tmp"
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("data"));
    name.push(".tmp");
    path.with_file_name(name)
}
