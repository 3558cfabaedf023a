use crate::core::geo::ZonePosition;
use serde::{Deserialize, Serialize};

/// Represents the rectangular scene canvas zones are laid out on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub min: ZonePosition,
    pub max: ZonePosition,
}

impl CanvasBounds {
    /// Creates new bounds from two corner positions
    pub fn new(min: ZonePosition, max: ZonePosition) -> Self {
        Self { min, max }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(min_x: f64, min_z: f64, max_x: f64, max_z: f64) -> Self {
        Self::new(
            ZonePosition::new(min_x, min_z),
            ZonePosition::new(max_x, max_z),
        )
    }

    /// Creates a square canvas spanning `[min, max]` on both axes
    pub fn square(min: f64, max: f64) -> Self {
        Self::from_coords(min, min, max, max)
    }

    /// Gets the width of the canvas
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Gets the depth of the canvas
    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Gets the center position of the canvas
    pub fn center(&self) -> ZonePosition {
        ZonePosition::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Checks if the canvas contains a position
    pub fn contains(&self, position: &ZonePosition) -> bool {
        position.x >= self.min.x
            && position.x <= self.max.x
            && position.z >= self.min.z
            && position.z <= self.max.z
    }

    /// Clamps a position to lie within the canvas, each axis independently
    pub fn clamp(&self, position: &ZonePosition) -> ZonePosition {
        ZonePosition::new(
            position.x.clamp(self.min.x, self.max.x),
            position.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Checks if the bounds are valid (min <= max)
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.z <= self.max.z
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        use crate::core::constants::{CANVAS_MAX, CANVAS_MIN};
        Self::square(CANVAS_MIN, CANVAS_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_canvas() {
        let canvas = CanvasBounds::square(-100.0, 100.0);
        assert_eq!(canvas.width(), 200.0);
        assert_eq!(canvas.depth(), 200.0);
        assert_eq!(canvas.center(), ZonePosition::new(0.0, 0.0));
        assert!(canvas.is_valid());
    }

    #[test]
    fn test_contains() {
        let canvas = CanvasBounds::default();
        assert!(canvas.contains(&ZonePosition::new(0.0, -100.0)));
        assert!(!canvas.contains(&ZonePosition::new(100.01, 0.0)));
    }

    #[test]
    fn test_clamp_pulls_into_canvas() {
        let canvas = CanvasBounds::default();
        let clamped = canvas.clamp(&ZonePosition::new(140.0, -250.0));
        assert_eq!(clamped, ZonePosition::new(100.0, -100.0));
    }

    #[test]
    fn test_clamp_is_noop_inside() {
        let canvas = CanvasBounds::default();
        let inside = ZonePosition::new(12.34, -56.78);
        assert_eq!(canvas.clamp(&inside), inside);
    }
}
