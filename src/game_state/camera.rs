//! # Camera
//!
//! The 2D view transform shared by drawing and pointer picking.
//!
//! World y grows upward while screen y grows downward, so the vertical mapping goes
//! through the viewport height:
//!
//! ```text
//! world_x = floor((screen_x + offset.x) / cell_size)
//! world_y = floor((viewport_height - screen_y + offset.y) / cell_size)
//! ```
//!
//! The offset is derived from the player position so that the player's cell sits at
//! the middle of the viewport.

use cgmath::{Point2, Vector2};

use crate::config::ViewConfig;

/// Pixel offset and scale of the visible part of the world.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera2D {
    /// Pixel position of the viewport's bottom-left corner in world pixels.
    pub offset: Vector2<f32>,
    pub cell_size: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Camera2D {
    pub fn new(view: &ViewConfig) -> Self {
        Camera2D {
            offset: Vector2::new(0.0, 0.0),
            cell_size: view.cell_size,
            viewport_width: view.viewport_width,
            viewport_height: view.viewport_height,
        }
    }

    /// Centers the view on a world position.
    pub fn follow(&mut self, position: Vector2<f32>) {
        self.offset = Vector2::new(
            position.x * self.cell_size - self.viewport_width / 2.0,
            position.y * self.cell_size - self.viewport_height / 2.0,
        );
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Maps a screen point to continuous world coordinates.
    pub fn screen_to_world(&self, screen: Point2<f32>) -> Point2<f32> {
        Point2::new(
            (screen.x + self.offset.x) / self.cell_size,
            (self.viewport_height - screen.y + self.offset.y) / self.cell_size,
        )
    }

    /// Maps a screen point to the world cell under it.
    pub fn screen_to_cell(&self, screen: Point2<f32>) -> Point2<i32> {
        let world = self.screen_to_world(screen);
        Point2::new(world.x.floor() as i32, world.y.floor() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_to_screen(camera: &Camera2D, world: Point2<f32>) -> Point2<f32> {
        Point2::new(
            world.x * camera.cell_size - camera.offset.x,
            camera.viewport_height - (world.y * camera.cell_size - camera.offset.y),
        )
    }

    fn camera() -> Camera2D {
        Camera2D::new(&ViewConfig::default())
    }

    #[test]
    fn viewport_center_maps_to_followed_cell() {
        let mut camera = camera();
        camera.follow(Vector2::new(10.5, 20.5));
        let cell = camera.screen_to_cell(Point2::new(640.0, 360.0));
        assert_eq!(cell, Point2::new(10, 20));
    }

    #[test]
    fn screen_y_grows_downward() {
        let mut camera = camera();
        camera.follow(Vector2::new(0.0, 0.0));
        let top = camera.screen_to_cell(Point2::new(640.0, 0.0));
        let bottom = camera.screen_to_cell(Point2::new(640.0, 719.0));
        assert!(top.y > bottom.y);
    }

    #[test]
    fn picking_uses_inverse_y_formula() {
        let mut camera = camera();
        camera.offset = Vector2::new(64.0, 32.0);
        // x: floor((100 + 64) / 32) = 5, y: floor((720 - 100 + 32) / 32) = 20
        assert_eq!(
            camera.screen_to_cell(Point2::new(100.0, 100.0)),
            Point2::new(5, 20)
        );
    }

    #[test]
    fn world_to_screen_inverts_screen_to_world() {
        let mut camera = camera();
        camera.follow(Vector2::new(-3.25, 41.0));
        let screen = Point2::new(200.0, 500.0);
        let back = world_to_screen(&camera, camera.screen_to_world(screen));
        assert!((back.x - screen.x).abs() < 1e-3);
        assert!((back.y - screen.y).abs() < 1e-3);
    }
}
