use std::collections::HashMap;
use std::path::{Path, PathBuf};

use kaku_layout::{Align, Canvas, CanvasError, FontSpec, MM_PER_PT, Point, Rect, Rgb, Size, Weight};
use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{Content, Filter, Name, Pdf, Ref, Str};

use crate::error::PdfError;
use crate::fonts::{FontSet, PdfFont};
use crate::images::RasterImage;

/// Stroke width for borders and guides, 0.2mm
const LINE_WIDTH_MM: f32 = 0.2;

const REGULAR_RESOURCE: &str = "F1";
const BOLD_RESOURCE: &str = "F2";

struct PlacedImage {
    resource: String,
    id: Ref,
    mask: Option<Ref>,
    aspect: f32,
    raster: RasterImage,
}

/// [`Canvas`] that produces a PDF document
///
/// Pages are buffered as content streams and assembled by [`PdfCanvas::finish`].
pub struct PdfCanvas {
    page_size: Size,
    fonts: FontSet,
    pages: Vec<Vec<u8>>,
    current: Option<Content>,
    images: HashMap<PathBuf, PlacedImage>,
    next_id: i32,
}

impl PdfCanvas {
    pub fn new(page_size: Size, fonts: FontSet) -> Self {
        Self {
            page_size,
            fonts,
            pages: Vec::new(),
            current: None,
            images: HashMap::new(),
            // 1 and 2 are the catalog and page tree
            next_id: 3,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len() + usize::from(self.current.is_some())
    }

    fn alloc(&mut self) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn content(&mut self) -> &mut Content {
        self.current.get_or_insert_with(page_content)
    }

    fn font(&self, weight: Weight) -> &PdfFont {
        match (weight, &self.fonts.bold) {
            (Weight::Bold, Some(bold)) => bold,
            _ => &self.fonts.regular,
        }
    }

    fn font_mut(&mut self, weight: Weight) -> (&mut PdfFont, &'static str) {
        match (weight, &mut self.fonts.bold) {
            (Weight::Bold, Some(bold)) => (bold, BOLD_RESOURCE),
            _ => (&mut self.fonts.regular, REGULAR_RESOURCE),
        }
    }

    fn x(&self, x: f32) -> f32 {
        x / MM_PER_PT
    }

    /// Page-space y in points, measured up from the bottom edge
    fn y(&self, y: f32) -> f32 {
        (self.page_size.height - y) / MM_PER_PT
    }

    /// Assemble the document
    pub fn finish(mut self) -> Vec<u8> {
        if let Some(content) = self.current.take() {
            self.pages.push(content.finish());
        }
        if self.pages.is_empty() {
            self.pages.push(page_content().finish());
        }

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);

        let page_ids: Vec<_> = (0..self.pages.len()).map(|_| self.alloc()).collect();
        let content_ids: Vec<_> = (0..self.pages.len()).map(|_| self.alloc()).collect();
        let regular_ids: Vec<_> = (0..self.fonts.regular.object_count())
            .map(|_| self.alloc())
            .collect();
        let bold_count = self.fonts.bold.as_ref().map_or(0, PdfFont::object_count);
        let bold_ids: Vec<_> = (0..bold_count).map(|_| self.alloc()).collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        let media_box = pdf_writer::Rect::new(
            0.0,
            0.0,
            self.page_size.width / MM_PER_PT,
            self.page_size.height / MM_PER_PT,
        );
        let mut font_pairs = vec![(REGULAR_RESOURCE, regular_ids[0])];
        if let Some(id) = bold_ids.first() {
            font_pairs.push((BOLD_RESOURCE, *id));
        }

        for ((raw, page_id), content_id) in self.pages.iter().zip(&page_ids).zip(&content_ids) {
            let compressed = compress_to_vec_zlib(raw, 6);
            pdf.stream(*content_id, &compressed)
                .filter(Filter::FlateDecode);

            let mut page = pdf.page(*page_id);
            page.media_box(media_box)
                .parent(pages_id)
                .contents(*content_id);

            let mut resources = page.resources();
            {
                let mut fonts = resources.fonts();
                for (name, id) in &font_pairs {
                    fonts.pair(Name(name.as_bytes()), *id);
                }
            }
            if !self.images.is_empty() {
                let mut xobjects = resources.x_objects();
                for image in self.images.values() {
                    xobjects.pair(Name(image.resource.as_bytes()), image.id);
                }
            }
        }

        self.fonts.regular.write(&mut pdf, &regular_ids);
        if let Some(bold) = &self.fonts.bold {
            bold.write(&mut pdf, &bold_ids);
        }
        for image in self.images.values() {
            image.raster.write(&mut pdf, image.id, image.mask);
        }

        tracing::debug!(
            "Assembled PDF with {} pages and {} images",
            self.pages.len(),
            self.images.len()
        );

        pdf.finish()
    }

    /// Assemble the document and write it to `path`
    pub fn save(self, path: &Path) -> Result<(), PdfError> {
        std::fs::write(path, self.finish())?;
        Ok(())
    }

    fn set_stroke(&mut self, color: Rgb) {
        let Rgb(r, g, b) = color;
        self.content().set_stroke_rgb(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        );
    }

    /// Decode and register the image at `path` once, returning its aspect
    /// ratio and resource name
    fn load_image(&mut self, path: &Path) -> Result<(f32, String), CanvasError> {
        if let Some(image) = self.images.get(path) {
            return Ok((image.aspect, image.resource.clone()));
        }

        let raster = RasterImage::open(path).map_err(|e| CanvasError::Image {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let id = self.alloc();
        let mask = raster.has_alpha().then(|| self.alloc());
        let aspect = raster.aspect();
        let resource = format!("Im{}", self.images.len() + 1);

        tracing::debug!("Embedding image {} as {}", path.display(), resource);

        self.images.insert(
            path.to_path_buf(),
            PlacedImage {
                resource: resource.clone(),
                id,
                mask,
                aspect,
                raster,
            },
        );
        Ok((aspect, resource))
    }
}

fn page_content() -> Content {
    let mut content = Content::new();
    content.set_line_width(LINE_WIDTH_MM / MM_PER_PT);
    content
}

impl Canvas for PdfCanvas {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn add_page(&mut self) {
        if let Some(content) = self.current.replace(page_content()) {
            self.pages.push(content.finish());
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb) {
        self.set_stroke(color);
        let (x, y) = (self.x(rect.x), self.y(rect.bottom()));
        let (w, h) = (rect.width / MM_PER_PT, rect.height / MM_PER_PT);
        self.content().rect(x, y, w, h).stroke();
    }

    fn line(&mut self, from: Point, to: Point, color: Rgb) {
        self.set_stroke(color);
        let (x1, y1) = (self.x(from.x), self.y(from.y));
        let (x2, y2) = (self.x(to.x), self.y(to.y));
        self.content().move_to(x1, y1).line_to(x2, y2).stroke();
    }

    fn text(&mut self, bbox: Rect, text: &str, font: FontSpec, align: Align) {
        if text.is_empty() {
            return;
        }

        let width = self.font(font.weight).width(text, font.size);
        let (ascent, descent) = self.font(font.weight).vertical_metrics();
        let x = match align {
            Align::Left => self.x(bbox.x),
            Align::Center => self.x(bbox.x) + (bbox.width / MM_PER_PT - width) / 2.0,
        };
        let middle = self.y(bbox.center().y);
        let baseline = middle - (ascent + descent) / 2000.0 * font.size;

        let (pdf_font, resource) = self.font_mut(font.weight);
        let encoded = pdf_font.encode(text);

        let content = self.content();
        content.set_fill_rgb(0.0, 0.0, 0.0);
        content.begin_text();
        content.set_font(Name(resource.as_bytes()), font.size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, baseline]);
        content.show(Str(&encoded));
        content.end_text();
    }

    fn text_width(&self, text: &str, font: FontSpec) -> f32 {
        self.font(font.weight).width(text, font.size) * MM_PER_PT
    }

    fn image(&mut self, path: &Path, bbox: Rect) -> Result<(), CanvasError> {
        let (aspect, resource) = self.load_image(path)?;
        let target = bbox.fit_aspect(aspect);

        let (x, y) = (self.x(target.x), self.y(target.bottom()));
        let (w, h) = (target.width / MM_PER_PT, target.height / MM_PER_PT);

        let content = self.content();
        content.save_state();
        content.transform([w, 0.0, 0.0, h, x, y]);
        content.x_object(Name(resource.as_bytes()));
        content.restore_state();
        Ok(())
    }
}
