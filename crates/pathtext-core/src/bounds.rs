#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }
}

/// Reports the geometric bounds of a single path, measured on its own (no ancestor or own
/// transform), in user units.
pub trait BoundsProvider {
    fn path_bounds(&self, d: &str) -> Option<Rect>;
}

impl<T: BoundsProvider + ?Sized> BoundsProvider for &T {
    fn path_bounds(&self, d: &str) -> Option<Rect> {
        (**self).path_bounds(d)
    }
}

/// A provider for hosts without a geometry backend. Cropping is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBounds;

impl BoundsProvider for NoBounds {
    fn path_bounds(&self, _d: &str) -> Option<Rect> {
        None
    }
}
