/// Millimetres per typographic point
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Grid columns across a page, including the two half-cell margins
pub const GRID_COLUMNS: f32 = 13.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Largest rect with the given aspect ratio centred inside this one
    pub fn fit_aspect(&self, aspect: f32) -> Rect {
        if aspect <= 0.0 || !aspect.is_finite() {
            return *self;
        }

        let (width, height) = if self.width / self.height > aspect {
            (self.height * aspect, self.height)
        } else {
            (self.width, self.width / aspect)
        };

        Rect::new(
            self.x + (self.width - width) / 2.0,
            self.y + (self.height - height) / 2.0,
            width,
            height,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GUIDE: Rgb = Rgb(188, 188, 188);
}

/// Grid module shared by every measurement on a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub page: Size,
    /// Side of one grid cell
    pub cell: f32,
    pub margin: f32,
    /// Vertical space available for blocks on one page
    pub usable_height: f32,
}

impl Metrics {
    pub fn for_page(page: Size) -> Self {
        let cell = page.width / GRID_COLUMNS;

        Self {
            page,
            cell,
            margin: cell / 2.0,
            usable_height: page.height - cell,
        }
    }

    /// Height of one dictionary text line
    pub fn text_line(&self) -> f32 {
        self.cell / 4.0
    }

    /// Padding inside the dictionary block
    pub fn padding(&self) -> f32 {
        self.cell / 10.0
    }

    /// Gap left under every block
    pub fn spacer(&self) -> f32 {
        self.cell * 0.25
    }

    /// Top-left corner of the content area
    pub fn content_origin(&self) -> Point {
        Point::new(self.margin, self.margin)
    }

    pub fn cells(&self, count: usize) -> f32 {
        self.cell * count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_metrics() {
        let m = Metrics::for_page(Size::new(210.0, 297.0));
        assert!((m.cell - 210.0 / 13.0).abs() < 1e-4);
        assert!((m.margin * 2.0 - m.cell).abs() < 1e-4);
        assert!((m.usable_height - (297.0 - m.cell)).abs() < 1e-4);
    }

    #[test]
    fn test_fit_aspect_wide_image() {
        let cell = Rect::new(0.0, 0.0, 20.0, 20.0);
        let fitted = cell.fit_aspect(2.0);
        assert_eq!(fitted, Rect::new(0.0, 5.0, 20.0, 10.0));
    }

    #[test]
    fn test_fit_aspect_tall_image() {
        let cell = Rect::new(10.0, 10.0, 20.0, 20.0);
        let fitted = cell.fit_aspect(0.5);
        assert_eq!(fitted, Rect::new(15.0, 10.0, 10.0, 20.0));
    }
}
