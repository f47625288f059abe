use bevy::math::Vec2;

/// Visible play area in screen pixels. Origin top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

impl ScreenBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Axis-aligned box reported alongside a hand centroid, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl HandBox {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square box of side `size` centred on `center`.
    pub fn centered(center: Vec2, size: f32) -> Self {
        let half = size * 0.5;
        Self::new(center.x - half, center.y - half, size, size)
    }

    /// Strict containment. Boxes with non-positive extent contain nothing.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.x < p.x && p.x < self.x + self.w && self.y < p.y && p.y < self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_containment_is_strict() {
        let b = HandBox::new(10.0, 10.0, 20.0, 20.0);
        assert!(b.contains(Vec2::new(15.0, 25.0)));
        assert!(!b.contains(Vec2::new(10.0, 15.0)));
        assert!(!b.contains(Vec2::new(30.0, 15.0)));
    }

    #[test]
    fn negative_box_never_matches() {
        let b = HandBox::new(50.0, 50.0, -20.0, -20.0);
        assert!(!b.contains(Vec2::new(40.0, 40.0)));
        assert!(!b.contains(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn centered_box() {
        let b = HandBox::centered(Vec2::new(100.0, 100.0), 40.0);
        assert_eq!(b, HandBox::new(80.0, 80.0, 40.0, 40.0));
        assert_eq!(ScreenBounds::new(800.0, 600.0).center(), Vec2::new(400.0, 300.0));
    }
}
