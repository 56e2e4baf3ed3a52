//! Writers for generated feature documents.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;

use crate::error::{Result, ScenarioForgeError};

/// Writes `document` to `<out_dir>/<file_name>`, creating `out_dir` when
/// missing and truncating any previous file.
///
/// # Errors
///
/// Returns [`ScenarioForgeError::Io`] when the directory cannot be opened or
/// created, or the file cannot be written.
pub fn write_feature(out_dir: &Utf8Path, file_name: &str, document: &str) -> Result<Utf8PathBuf> {
    let dir = ensure_dir(out_dir)?;
    let target = out_dir.join(file_name);
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| ScenarioForgeError::Io {
            path: target.clone(),
            source: io_err,
        })?;
    file.write_all(document.as_bytes())
        .map_err(|io_err| ScenarioForgeError::Io {
            path: target.clone(),
            source: io_err,
        })?;
    Ok(target)
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir> {
    let io_error = |io_err| ScenarioForgeError::Io {
        path: path.to_path_buf(),
        source: io_err,
    };
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(io_error)?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(io_error)
        }
        Err(open_err) => Err(io_error(open_err)),
    }
}
