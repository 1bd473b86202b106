//! Source provider: loads a C file into memory for scanning.
//!
//! The file is read as raw bytes. The scanner is total over any byte string,
//! so no UTF-8 validation happens here.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to provide a source buffer.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The path does not end in `.c`.
    #[error("FILE : {} is not a C file, please be careful in extension", .path.display())]
    NotCFile { path: PathBuf },

    #[error("cannot find file '{}'", .path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("cannot read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Returns `true` if the file name, from its last `.` on, is exactly `.c`.
///
/// Unlike [`Path::extension`], a bare `.c` file name counts.
pub fn is_c_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.as_encoded_bytes();
        name.iter()
            .rposition(|&b| b == b'.')
            .is_some_and(|dot| &name[dot..] == b".c")
    })
}

/// Read a C source file.
///
/// With `check_extension`, paths not ending in `.c` are rejected before the
/// filesystem is touched.
pub fn read_c_file(path: &Path, check_extension: bool) -> Result<Vec<u8>, SourceError> {
    if check_extension && !is_c_file(path) {
        return Err(SourceError::NotCFile {
            path: path.to_path_buf(),
        });
    }

    std::fs::read(path).map_err(|e| {
        let path = path.to_path_buf();
        match e.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound { path },
            io::ErrorKind::PermissionDenied => SourceError::PermissionDenied { path },
            _ => SourceError::Io { path, source: e },
        }
    })
}
