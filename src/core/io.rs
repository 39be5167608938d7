//! Small file helpers shared by config loading and the score command.

use serde::de::DeserializeOwned;
use std::{
    fs,
    io::{ErrorKind, Read},
    path::Path,
};

use crate::error::{OpflError, Result};

/// Try to read a file into a String.
///
/// `Ok(None)` only when the file does not exist. Permission problems and
/// non-UTF-8 content are errors.
pub fn try_read_to_string(path: &Path) -> Result<Option<String>> {
    let mut f = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut s = String::new();

    f.read_to_string(&mut s)?;

    Ok(Some(s))
}

/// Read and deserialize a JSON file, naming `what` in the error when the
/// file is missing.
pub fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = try_read_to_string(path)?.ok_or_else(|| OpflError::MissingInput {
        what: format!("{} at {}", what, path.display()),
    })?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_try_read_to_string_missing_file() {
        assert!(try_read_to_string(Path::new("/definitely/not/here.json"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_try_read_to_string_non_utf8_is_io_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0xc3]).unwrap();
        assert!(matches!(
            try_read_to_string(file.path()),
            Err(OpflError::Io(_))
        ));
    }

    #[test]
    fn test_try_read_to_string_directory_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(matches!(
            read_json::<Vec<u8>>(dir.path(), "roster"),
            Err(OpflError::Io(_))
        ));
    }

    #[test]
    fn test_read_json_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let values: Vec<u8> = read_json(file.path(), "numbers").unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_read_json_reports_what_was_missing() {
        let err = read_json::<Vec<u8>>(Path::new("/nope/roster.json"), "roster").unwrap_err();
        match err {
            OpflError::MissingInput { what } => {
                assert!(what.contains("roster"));
                assert!(what.contains("/nope/roster.json"));
            }
            other => panic!("Expected MissingInput, got {:?}", other),
        }
    }

    #[test]
    fn test_read_json_bad_payload() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            read_json::<Vec<u8>>(file.path(), "stats"),
            Err(OpflError::Json(_))
        ));
    }
}
