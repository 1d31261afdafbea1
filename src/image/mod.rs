//! PNG previews of the QR matrix for checking a card before printing.

mod paint;

pub use paint::{PreviewOptions, render_matrix_image, write_preview};
