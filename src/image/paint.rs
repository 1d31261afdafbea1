use std::io;
use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::encoding::QrMatrix;
use crate::error::CardError;

const DARK: Luma<u8> = Luma([0x00]);
const LIGHT: Luma<u8> = Luma([0xff]);

/// Options controlling PNG generation.
#[derive(Debug, Clone, Copy)]
pub struct PreviewOptions {
    /// Edge length of one module in pixels.
    pub module_px: u32,
    /// Light margin around the symbol, in modules.
    pub quiet_zone: u32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            module_px: 8,
            quiet_zone: 4,
        }
    }
}

/// Rasterise the matrix as black modules on a white page.
pub fn render_matrix_image(matrix: &QrMatrix, options: &PreviewOptions) -> DynamicImage {
    let scale = options.module_px.max(1);
    let margin = options.quiet_zone * scale;
    let side = matrix.width() as u32 * scale + 2 * margin;

    let mut img = ImageBuffer::from_pixel(side, side, LIGHT);
    for (y, row) in matrix.rows().iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell == 1 {
                let px = (margin + x as u32 * scale) as i32;
                let py = (margin + y as u32 * scale) as i32;
                draw_filled_rect_mut(&mut img, Rect::at(px, py).of_size(scale, scale), DARK);
            }
        }
    }
    DynamicImage::ImageLuma8(img)
}

/// Render and save a PNG preview to `path`.
pub fn write_preview(
    path: &Path,
    matrix: &QrMatrix,
    options: &PreviewOptions,
) -> Result<(), CardError> {
    render_matrix_image(matrix, options)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|err| match err {
            image::ImageError::IoError(source) => CardError::io(path, source),
            other => CardError::io(path, io::Error::other(other)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_dimensions_include_quiet_zone() {
        let matrix = QrMatrix::encode("HELLO").unwrap();
        let options = PreviewOptions {
            module_px: 3,
            quiet_zone: 2,
        };
        let img = render_matrix_image(&matrix, &options).to_luma8();
        assert_eq!(img.width(), (21 + 4) * 3);
        assert_eq!(img.height(), img.width());
        assert_eq!(img.get_pixel(0, 0), &LIGHT);
        // First module of the finder pattern.
        assert_eq!(img.get_pixel(6, 6), &DARK);
        assert_eq!(img.get_pixel(8, 8), &DARK);
    }

    #[test]
    fn preview_is_written_as_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.png");
        let matrix = QrMatrix::encode("HELLO").unwrap();
        write_preview(&path, &matrix, &PreviewOptions::default()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
