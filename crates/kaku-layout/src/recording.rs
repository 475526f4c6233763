use std::path::{Path, PathBuf};

use crate::canvas::{Align, Canvas, CanvasError, FontSpec};
use crate::geometry::{MM_PER_PT, Point, Rect, Rgb, Size};

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        rect: Rect,
        color: Rgb,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgb,
    },
    Text {
        bbox: Rect,
        text: String,
        font: FontSpec,
        align: Align,
    },
    Image {
        path: PathBuf,
        bbox: Rect,
    },
}

/// Canvas that keeps every call per page instead of producing output
///
/// Text widths use a fixed estimate: half an em for ASCII, a full em for
/// everything else.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    page_size: Size,
    pages: Vec<Vec<DrawOp>>,
}

impl RecordingCanvas {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            pages: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> &[DrawOp] {
        self.pages.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.pages.iter().flatten()
    }

    /// All text drawn, in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.ops()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, op: DrawOp) {
        match self.pages.last_mut() {
            Some(page) => page.push(op),
            None => tracing::warn!("Drawing before first page, dropping {:?}", op),
        }
    }
}

impl Canvas for RecordingCanvas {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb) {
        self.push(DrawOp::Rect { rect, color });
    }

    fn line(&mut self, from: Point, to: Point, color: Rgb) {
        self.push(DrawOp::Line { from, to, color });
    }

    fn text(&mut self, bbox: Rect, text: &str, font: FontSpec, align: Align) {
        self.push(DrawOp::Text {
            bbox,
            text: text.to_string(),
            font,
            align,
        });
    }

    fn text_width(&self, text: &str, font: FontSpec) -> f32 {
        let ems: f32 = text
            .chars()
            .map(|c| if c.is_ascii() { 0.5 } else { 1.0 })
            .sum();
        ems * font.size * MM_PER_PT
    }

    fn image(&mut self, path: &Path, bbox: Rect) -> Result<(), CanvasError> {
        self.push(DrawOp::Image {
            path: path.to_path_buf(),
            bbox,
        });
        Ok(())
    }
}
