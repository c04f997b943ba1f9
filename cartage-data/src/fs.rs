//! Filesystem helpers built on `cap-std` and `camino`.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path for reading using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether a path exists and is a regular file using capability-based IO.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}
