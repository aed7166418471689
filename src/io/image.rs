//! Greyscale image loading and raster export of tilings

use std::path::Path;

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use log::info;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::geometry::polygon::Polygon;
use crate::geometry::tiling::{CanvasSize, TilingResult};
use crate::io::configuration::RenderConfig;
use crate::io::error::{Result, TruchetError, file_system_error, render_error};

/// Load an image from disk as single-channel 8-bit intensities
///
/// Colour images are converted to luma.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<GrayImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| TruchetError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_luma8())
}

/// Pixel dimensions of the raster for a canvas at the given scale
pub fn raster_dimensions(canvas: CanvasSize, scale: f64) -> (u32, u32) {
    let to_pixels = |extent: f64| (extent * scale).ceil().max(1.0) as u32;
    (to_pixels(canvas.width), to_pixels(canvas.height))
}

/// Rasterize a tiling: black polygons on white, y axis pointing up
///
/// # Errors
///
/// Returns an error if:
/// - The render configuration is invalid
/// - The pixmap cannot be allocated
pub fn render_raster(tiling: &TilingResult, config: &RenderConfig) -> Result<RgbImage> {
    config.validate()?;

    let (width, height) = raster_dimensions(tiling.canvas, config.raster_scale);
    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        render_error(
            "pixmap allocation",
            &format!("cannot allocate {width}x{height} pixmap"),
        )
    })?;
    pixmap.fill(Color::WHITE);

    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 0, 0, 255);
    paint.anti_alias = false;

    let scale = config.raster_scale as f32;
    // Drawing space has y upward, pixmap rows run downward
    let transform =
        Transform::from_row(scale, 0.0, 0.0, -scale, 0.0, tiling.canvas.height as f32 * scale);
    let stroke = Stroke {
        width: config.outline_width as f32,
        ..Stroke::default()
    };

    for polygon in &tiling.polygons {
        let Some(path) = polygon_path(polygon) else {
            continue;
        };
        pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        if config.outline_width > 0.0 {
            pixmap.stroke_path(&path, &paint, &stroke, transform, None);
        }
    }

    let rgba = RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| render_error("pixmap conversion", &"buffer size mismatch"))?;
    Ok(DynamicImage::ImageRgba8(rgba).to_rgb8())
}

fn polygon_path(polygon: &Polygon) -> Option<tiny_skia::Path> {
    let (first, rest) = polygon.points().split_first()?;
    let mut builder = PathBuilder::new();
    builder.move_to(first.x as f32, first.y as f32);
    for point in rest {
        builder.line_to(point.x as f32, point.y as f32);
    }
    builder.close();
    builder.finish()
}

/// Rasterize a tiling and save it; the format follows the path extension
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_raster<P: AsRef<Path>>(
    tiling: &TilingResult,
    config: &RenderConfig,
    output_path: P,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let img = render_raster(tiling, config)?;

    create_parent_dir(output_path)?;
    img.save(output_path)
        .map_err(|e| TruchetError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    info!(
        "Wrote {}x{} raster to {}",
        img.width(),
        img.height(),
        output_path.display()
    );
    Ok(())
}

/// Create the parent directory of `path` if it has one
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e)),
        _ => Ok(()),
    }
}
