//! Pixel-accessible intensity rasters consumed by the sampler

use image::GrayImage;
use ndarray::Array2;
use num_traits::ToPrimitive;

/// Single-channel raster addressable by integer pixel coordinates
///
/// `x` runs left to right over `0..width()`, `y` runs top to bottom over
/// `0..height()`, matching conventional image scan order.
pub trait IntensitySource {
    /// Width in pixels
    fn width(&self) -> usize;

    /// Height in pixels
    fn height(&self) -> usize;

    /// Intensity of the pixel at `(x, y)`
    ///
    /// Coordinates outside the raster read as `0.0`.
    fn intensity(&self, x: usize, y: usize) -> f64;
}

impl IntensitySource for GrayImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn intensity(&self, x: usize, y: usize) -> f64 {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return 0.0;
        };
        self.get_pixel_checked(x, y)
            .map_or(0.0, |pixel| f64::from(pixel.0[0]))
    }
}

/// Row-major intensity array indexed `[y, x]`
impl<T: ToPrimitive> IntensitySource for Array2<T> {
    fn width(&self) -> usize {
        self.ncols()
    }

    fn height(&self) -> usize {
        self.nrows()
    }

    fn intensity(&self, x: usize, y: usize) -> f64 {
        self.get((y, x))
            .and_then(ToPrimitive::to_f64)
            .unwrap_or(0.0)
    }
}
