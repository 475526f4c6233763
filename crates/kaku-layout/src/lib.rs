//! Worksheet layout: turns kanji records into drawing calls on a [`Canvas`].
//!
//! All lengths are millimetres with the origin at the top-left corner of the
//! page; font sizes are points.

pub mod block;
pub mod canvas;
pub mod engine;
pub mod frame;
pub mod geometry;
pub mod recording;
pub mod text;

pub use canvas::{Align, Canvas, CanvasError, FontSpec, Weight};
pub use engine::{LayoutSummary, Pager, Placement, RenderContext, render_document};
pub use geometry::{GRID_COLUMNS, MM_PER_PT, Metrics, Point, Rect, Rgb, Size};
pub use recording::{DrawOp, RecordingCanvas};
