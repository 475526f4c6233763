use std::path::{Path, PathBuf};

use crate::geometry::{Point, Rect, Rgb, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub weight: Weight,
    /// Size in points
    pub size: f32,
}

impl FontSpec {
    pub fn regular(size: f32) -> Self {
        Self {
            weight: Weight::Regular,
            size,
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            weight: Weight::Bold,
            size,
        }
    }

    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("Failed to draw image {}: {message}", path.display())]
    Image { path: PathBuf, message: String },
}

/// Drawing surface the layout engine writes to
///
/// Coordinates are millimetres from the top-left corner of the current page.
pub trait Canvas {
    fn page_size(&self) -> Size;

    /// Start a new page; drawing before the first call is undefined
    fn add_page(&mut self);

    /// Stroke the outline of a rectangle
    fn stroke_rect(&mut self, rect: Rect, color: Rgb);

    fn line(&mut self, from: Point, to: Point, color: Rgb);

    /// Draw one line of text vertically centred in `bbox`
    fn text(&mut self, bbox: Rect, text: &str, font: FontSpec, align: Align);

    /// Advance width of `text` in millimetres
    fn text_width(&self, text: &str, font: FontSpec) -> f32;

    /// Draw the image at `path` inside `bbox`, keeping its aspect ratio
    fn image(&mut self, path: &Path, bbox: Rect) -> Result<(), CanvasError>;
}
