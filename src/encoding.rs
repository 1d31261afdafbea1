use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};
use serde::Serialize;

/// Square grid of QR modules, row-major, `1` for dark and `0` for light.
///
/// No quiet zone is included and each module is one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QrMatrix {
    rows: Vec<Vec<u8>>,
}

impl QrMatrix {
    /// Encode `payload` at error-correction level L using the smallest
    /// QR version that fits it.
    pub fn encode(payload: &str) -> Result<Self, QrError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)?;
        let width = code.width();
        let rows = code
            .to_colors()
            .chunks(width)
            .map(|row| {
                row.iter()
                    .map(|color| match color {
                        Color::Dark => 1,
                        Color::Light => 0,
                    })
                    .collect()
            })
            .collect();
        Ok(Self { rows })
    }

    /// Number of modules per side.
    pub fn width(&self) -> usize {
        self.rows.len()
    }

    /// Whether the module at column `x`, row `y` is dark; `false` outside
    /// the symbol.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.rows.get(y).and_then(|row| row.get(x)) == Some(&1)
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_uses_version_one() {
        let matrix = QrMatrix::encode("HELLO").unwrap();
        assert_eq!(matrix.width(), 21);
        assert!(matrix.rows().iter().all(|row| row.len() == 21));
        assert!(
            matrix
                .rows()
                .iter()
                .flatten()
                .all(|&cell| cell == 0 || cell == 1)
        );
    }

    #[test]
    fn finder_pattern_sits_in_the_corner() {
        let matrix = QrMatrix::encode("WIFI:T:WPA;S:Net;P:Pass123;H:false;;").unwrap();
        // Zero border: the top-left finder's outer ring starts at (0, 0).
        for i in 0..7 {
            assert!(matrix.is_dark(i, 0));
            assert!(matrix.is_dark(0, i));
        }
        assert!(!matrix.is_dark(1, 1));
        assert!(matrix.is_dark(3, 3));
    }

    #[test]
    fn outside_the_symbol_is_light() {
        let matrix = QrMatrix::encode("HELLO").unwrap();
        assert!(matrix.is_dark(20, 0));
        assert!(!matrix.is_dark(21, 0));
        assert!(!matrix.is_dark(0, 21));
        assert!(!matrix.is_dark(usize::MAX, usize::MAX));
    }

    #[test]
    fn serializes_as_nested_rows() {
        let matrix = QrMatrix::encode("HELLO").unwrap();
        let json = serde_json::to_string(&matrix).unwrap();
        let back: Vec<Vec<u8>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_slice(), matrix.rows());
    }

    #[test]
    fn longer_payload_grows_the_symbol() {
        let short = QrMatrix::encode("x").unwrap();
        let long = QrMatrix::encode(&"x".repeat(500)).unwrap();
        assert!(long.width() > short.width());
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let err = QrMatrix::encode(&"\u{00e9}".repeat(3000)).unwrap_err();
        assert_eq!(err, QrError::DataTooLong);
    }
}
