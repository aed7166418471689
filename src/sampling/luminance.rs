//! Grid-based mean intensity aggregation over a raster

use log::{debug, warn};
use ndarray::Array2;

use crate::io::error::{Result, TruchetError, invalid_parameter};
use crate::sampling::coordinates::{CellBounds, flip_row, whole_cells};
use crate::sampling::raster::IntensitySource;

/// Mean cell intensities indexed `[column, row]` in drawing space
///
/// Row `0` is the bottom row of the source image.
pub type LuminanceMatrix = Array2<f64>;

/// Reduce every `length x length` cell of `source` to its mean intensity
///
/// Cells are laid out from the top-left pixel; image rows and columns past the
/// last whole cell are ignored. The returned matrix has shape
/// `(width / length, height / length)` with rows flipped into drawing space.
///
/// # Errors
///
/// Returns an error if:
/// - `length` is zero
/// - The source is narrower or shorter than one cell
pub fn sample_luminance<S: IntensitySource + ?Sized>(
    source: &S,
    length: usize,
) -> Result<LuminanceMatrix> {
    if length == 0 {
        return Err(invalid_parameter(
            "length",
            &length,
            &"cell length must be positive",
        ));
    }

    let (width, height) = (source.width(), source.height());
    let columns = whole_cells(width, length);
    let rows = whole_cells(height, length);

    if columns == 0 || rows == 0 {
        return Err(TruchetError::ImageTooSmall {
            width,
            height,
            length,
        });
    }

    if width % length != 0 || height % length != 0 {
        warn!(
            "Discarding partial cells: {width}x{height} image is not a multiple of {length}, using {}x{} pixels",
            columns * length,
            rows * length
        );
    }

    let mut luminance = Array2::zeros((columns, rows));
    for column in 0..columns {
        for image_row in 0..rows {
            let mean = cell_mean(source, CellBounds::new(column, image_row, length));
            let Some(drawing_row) = flip_row(image_row, rows) else {
                continue;
            };
            if let Some(cell) = luminance.get_mut((column, drawing_row)) {
                *cell = mean;
            }
        }
    }

    debug!("Sampled {columns}x{rows} luminance matrix from {width}x{height} image");
    Ok(luminance)
}

/// Arithmetic mean of all pixel intensities inside a cell
pub fn cell_mean<S: IntensitySource + ?Sized>(source: &S, bounds: CellBounds) -> f64 {
    let sum: f64 = bounds.pixels().map(|(x, y)| source.intensity(x, y)).sum();
    let area = (bounds.length * bounds.length) as f64;
    sum / area
}
