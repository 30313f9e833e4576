//! Output file naming.
//!
//! `shaders/fill.vert` becomes `shaders/fill_vert_shader_hex.txt`.
use std::{
    ffi::{OsStr, OsString},
    path::{self, Path, PathBuf},
};

use thiserror::Error;

const SUFFIX: &str = "_shader_hex";
const EXTENSION: &str = ".txt";

#[derive(Debug, Error)]
pub enum NamingError {
    #[error("input path `{0}` has no file name")]
    NoFileName(PathBuf),
}

/// Swaps every `.` for `_`, leaving any other byte untouched.
#[cfg(unix)]
fn underscore_dots(name: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = name
        .as_bytes()
        .iter()
        .map(|&b| if b == b'.' { b'_' } else { b })
        .collect::<Vec<_>>();
    OsString::from_vec(bytes)
}
#[cfg(not(unix))]
fn underscore_dots(name: &OsStr) -> OsString {
    OsString::from(name.to_string_lossy().replace('.', "_"))
}

pub fn output_name(input: &Path) -> Result<OsString, NamingError> {
    let no_file_name = || NamingError::NoFileName(input.to_path_buf());
    // `d/` names a directory even though `Path::file_name` yields `d`.
    let trailing_separator = input
        .as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| path::is_separator(b as char));
    if trailing_separator {
        return Err(no_file_name());
    }
    let mut name = underscore_dots(input.file_name().ok_or_else(no_file_name)?);
    name.push(SUFFIX);
    Ok(name)
}

pub fn output_path(input: &Path) -> Result<PathBuf, NamingError> {
    let mut name = output_name(input)?;
    name.push(EXTENSION);
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    Ok(dir.join(name))
}
