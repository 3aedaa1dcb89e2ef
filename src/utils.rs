//! Helpers for feeding a rendered canvas into downstream pipelines.

use image::{GrayImage, Luma};

use crate::Matrix;

/// Pack a binarized canvas into 1-bit raster rows.
///
/// Every set pixel (any non-zero value) becomes a set bit, most significant
/// bit first; the final byte of each row is zero-padded on the right. This is
/// the row shape raster label printers take.
pub fn pack_rows(canvas: &GrayImage) -> Matrix {
    let width = canvas.width();
    let mut rows = Matrix::new();

    for y in 0..canvas.height() {
        let mut row = vec![0u8; (width as usize + 7) / 8];
        for x in 0..width {
            if canvas.get_pixel(x, y).0[0] > 0 {
                row[x as usize / 8] |= 0x80 >> (x % 8);
            }
        }
        rows.push(row);
    }

    rows
}

/// Expand a binarized canvas to 8-bit black-on-white for preview or export.
///
/// Set pixels become ink (0x00), everything else paper (0xFF), so the result
/// saves directly as a viewable PNG.
pub fn to_black_on_white(canvas: &GrayImage) -> GrayImage {
    GrayImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        if canvas.get_pixel(x, y).0[0] > 0 {
            Luma([0x00])
        } else {
            Luma([0xFF])
        }
    })
}
