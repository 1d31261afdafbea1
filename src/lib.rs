//! Core library for turning WiFi credentials into printable QR code cards.

mod encoding;
mod error;
mod image;
mod model;
mod payload;
mod scad;

pub use encoding::QrMatrix;
pub use error::{CardError, ToolError};
pub use crate::image::{PreviewOptions, render_matrix_image, write_preview};
pub use model::{
    DEFAULT_LAYER_HEIGHT, DEFAULT_OPENSCAD, DEFAULT_OUTPUT_DIR, DEFAULT_SCRIPT, MagnetHoles,
    ModelParams, ModelPass, OpenScad, ToolRunner, generate_models,
};
pub use payload::{Encryption, PayloadSource, WifiCredentials};
pub use scad::{DEFAULT_MATRIX_FILE, MATRIX_VARIABLE, matrix_assignment, write_matrix_file};

use std::path::Path;

/// Encodes the payload of `source` and stores the matrix include file.
///
/// Nothing is written when encoding fails.
pub fn encode_card(source: &PayloadSource, matrix_file: &Path) -> Result<QrMatrix, CardError> {
    let matrix = QrMatrix::encode(&source.payload())?;
    write_matrix_file(matrix_file, &matrix)?;
    Ok(matrix)
}
