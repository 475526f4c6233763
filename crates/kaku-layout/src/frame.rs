use crate::geometry::{Point, Rect, Size};

/// Fixed-size box addressed with coordinates relative to its top-left corner
///
/// Content placed through a frame never moves the frame itself, so a block can
/// reserve its outer rectangle first and fill it with variable content after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    rect: Rect,
}

impl Frame {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Absolute position of a point given relative to the frame
    pub fn point(&self, dx: f32, dy: f32) -> Point {
        self.rect.origin().offset(dx, dy)
    }

    /// Absolute rect for a region given relative to the frame
    pub fn region(&self, dx: f32, dy: f32, width: f32, height: f32) -> Rect {
        Rect::at(self.point(dx, dy), Size::new(width, height))
    }

    /// Nested frame at a relative offset
    pub fn child(&self, dx: f32, dy: f32, width: f32, height: f32) -> Frame {
        Frame::new(self.region(dx, dy, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_is_relative() {
        let outer = Frame::new(Rect::new(10.0, 20.0, 100.0, 50.0));
        let inner = outer.child(5.0, 5.0, 30.0, 40.0);

        assert_eq!(inner.rect(), Rect::new(15.0, 25.0, 30.0, 40.0));
        assert_eq!(inner.region(1.0, 2.0, 3.0, 4.0), Rect::new(16.0, 27.0, 3.0, 4.0));
        assert_eq!(outer.rect(), Rect::new(10.0, 20.0, 100.0, 50.0));
    }
}
