/// Command-line parsing and batch file processing
pub mod cli;
/// Constants and runtime configuration
pub mod configuration;
/// Error types
pub mod error;
/// Image loading and raster export
pub mod image;
/// Progress display for batch runs
pub mod progress;
/// SVG export
pub mod vector;
