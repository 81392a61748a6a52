use crate::shared::error::{UtilsError, UtilsResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Check if a file exists
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Create a new file, truncating it if it already exists
pub fn create_file(path: impl AsRef<Path>) -> UtilsResult<File> {
    let path = path.as_ref();
    File::create(path).map_err(|e| UtilsError::FileCreate {
        file: display_path(path),
        cause: e.to_string(),
    })
}

/// Open an existing file for reading
pub fn open_file(path: impl AsRef<Path>) -> UtilsResult<File> {
    let path = path.as_ref();
    File::open(path).map_err(|e| UtilsError::FileOpen {
        file: display_path(path),
        cause: e.to_string(),
    })
}

/// Read the contents of a file.
/// A missing file is reported as [`UtilsError::FileNotFound`], any other
/// failure as [`UtilsError::FileRead`].
pub fn read_file(path: impl AsRef<Path>) -> UtilsResult<Vec<u8>> {
    let path = path.as_ref();
    if !file_exists(path) {
        return Err(UtilsError::FileNotFound(display_path(path)));
    }
    fs::read(path).map_err(|e| UtilsError::FileRead {
        file: display_path(path),
        cause: e.to_string(),
    })
}

/// Write data to a file, creating it first when it does not exist
pub fn write_file(path: impl AsRef<Path>, data: &[u8]) -> UtilsResult<()> {
    let path = path.as_ref();
    if !file_exists(path) {
        create_file(path)?;
    }
    fs::write(path, data).map_err(|e| UtilsError::FileWrite {
        file: display_path(path),
        cause: e.to_string(),
    })
}

/// Remove a file. Removing a file that does not exist is a no-op.
pub fn remove_file(path: impl AsRef<Path>) -> UtilsResult<()> {
    let path = path.as_ref();
    if !file_exists(path) {
        return Ok(());
    }
    fs::remove_file(path).map_err(|e| UtilsError::FileRemove {
        file: display_path(path),
        cause: e.to_string(),
    })
}

/// Read a JSON file and deserialize its contents
pub fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> UtilsResult<T> {
    let data = read_file(path)?;
    serde_json::from_slice(&data).map_err(|e| UtilsError::JsonDecode(e.to_string()))
}

/// Serialize a value as pretty-printed JSON and write it to a file
pub fn write_json_file<T: Serialize>(path: impl AsRef<Path>, value: &T) -> UtilsResult<()> {
    let data =
        serde_json::to_string_pretty(value).map_err(|e| UtilsError::JsonEncode(e.to_string()))?;
    write_file(path, data.as_bytes())
}
