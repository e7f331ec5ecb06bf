//! A 2D camera: translation plus per-axis zoom between screen and world
//! space.

use crate::geom::Point2;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera2 {
    /// World position shown at the screen origin.
    pub position: Point2,
    /// Screen pixels per world unit, per axis.
    pub scale: Point2,
}

impl Default for Camera2 {
    fn default() -> Self {
        Self {
            position: Point2::ZERO,
            scale: Point2::new(1.0, 1.0),
        }
    }
}

impl Camera2 {
    pub fn screen_to_world(&self, p: Point2) -> Point2 {
        Point2::new(
            p.x / self.scale.x + self.position.x,
            p.y / self.scale.y + self.position.y,
        )
    }

    pub fn world_to_screen(&self, p: Point2) -> Point2 {
        Point2::new(
            (p.x - self.position.x) * self.scale.x,
            (p.y - self.position.y) * self.scale.y,
        )
    }
}
