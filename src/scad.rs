//! OpenSCAD include file holding the QR matrix.
//!
//! The geometry script pulls this file in and reads the `qrData`
//! variable, so the text must stay a single valid assignment.

use std::fs;
use std::path::Path;

use crate::encoding::QrMatrix;
use crate::error::CardError;

/// Variable name the geometry script expects.
pub const MATRIX_VARIABLE: &str = "qrData";

/// Default location of the include file, next to the geometry script.
pub const DEFAULT_MATRIX_FILE: &str = "./qrcode-matrix.scad";

/// Render `qrData = [[..],..];` for the given matrix.
pub fn matrix_assignment(matrix: &QrMatrix) -> Result<String, serde_json::Error> {
    let list = serde_json::to_string(matrix)?;
    Ok(format!("{} = {};", MATRIX_VARIABLE, list))
}

/// Overwrite `path` with the matrix assignment.
pub fn write_matrix_file(path: &Path, matrix: &QrMatrix) -> Result<(), CardError> {
    let text = matrix_assignment(matrix).map_err(|err| CardError::io(path, err.into()))?;
    fs::write(path, text).map_err(|err| CardError::io(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assignment_is_a_nested_integer_list() {
        let matrix = QrMatrix::encode("HELLO").unwrap();
        let text = matrix_assignment(&matrix).unwrap();
        assert!(text.starts_with("qrData = [["));
        assert!(text.ends_with("]];"));
        assert_eq!(text.matches(' ').count(), 2);
        assert!(!text.contains('\n'));

        let body = text
            .strip_prefix("qrData = ")
            .and_then(|rest| rest.strip_suffix(';'))
            .unwrap();
        let parsed: Vec<Vec<u8>> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.as_slice(), matrix.rows());
    }

    #[test]
    fn write_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qrcode-matrix.scad");
        fs::write(&path, "stale content that is much longer than a tiny matrix would be ".repeat(200))
            .unwrap();

        let matrix = QrMatrix::encode("HELLO").unwrap();
        write_matrix_file(&path, &matrix).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), matrix_assignment(&matrix).unwrap());
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("qrcode-matrix.scad");
        let matrix = QrMatrix::encode("HELLO").unwrap();
        let err = write_matrix_file(&path, &matrix).unwrap_err();
        assert!(matches!(err, CardError::Io { .. }));
    }
}
