use super::geometry::Rect;

/// Static level geometry. Created at level load and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    bounds: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}
