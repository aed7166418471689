//! SVG export of tilings

use std::path::Path;

use log::info;
use svg::Document;
use svg::node::element::{Group, Path as SvgPath};
use svg::node::element::path::Data;

use crate::geometry::polygon::Polygon;
use crate::geometry::tiling::TilingResult;
use crate::io::configuration::RenderConfig;
use crate::io::error::{Result, file_system_error};
use crate::io::image::create_parent_dir;

const FILL_COLOR: &str = "black";

/// Build an SVG document of the tiling
///
/// The view box is exactly the canvas. Drawing space has y upward, so every
/// point is emitted as `(x, height - y)`.
pub fn render_svg(tiling: &TilingResult, config: &RenderConfig) -> Document {
    let width = tiling.canvas.width;
    let height = tiling.canvas.height;

    let mut tiles = Group::new()
        .set("fill", FILL_COLOR)
        .set("stroke", FILL_COLOR)
        .set("stroke-width", config.outline_width)
        .set("stroke-linejoin", "miter");

    for polygon in &tiling.polygons {
        if let Some(data) = polygon_data(polygon, height) {
            tiles = tiles.add(SvgPath::new().set("d", data));
        }
    }

    Document::new()
        .set("viewBox", (0.0, 0.0, width, height))
        .set("width", width)
        .set("height", height)
        .set("preserveAspectRatio", "xMidYMid meet")
        .add(tiles)
}

fn polygon_data(polygon: &Polygon, height: f64) -> Option<Data> {
    let (first, rest) = polygon.points().split_first()?;
    let data = rest.iter().fold(
        Data::new().move_to((first.x, height - first.y)),
        |data, point| data.line_to((point.x, height - point.y)),
    );
    Some(data.close())
}

/// Write the tiling as an SVG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn export_svg<P: AsRef<Path>>(
    tiling: &TilingResult,
    config: &RenderConfig,
    output_path: P,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let document = render_svg(tiling, config);

    create_parent_dir(output_path)?;
    svg::save(output_path, &document)
        .map_err(|e| file_system_error(output_path, "write svg", e))?;

    info!(
        "Wrote {} polygons to {}",
        tiling.polygons.len(),
        output_path.display()
    );
    Ok(())
}
