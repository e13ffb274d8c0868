//! Game objects and the z-ordered compositor that draws them into a world.

use std::path::Path;

use crate::asset;
use crate::error::Result;
use crate::types::{Color, Vec2};
use crate::world::World;

/// A positioned sprite.
///
/// Its top-left pixel lands at `position - pivot`. Pixel data is fixed at
/// construction; callers move the object by mutating `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameObject {
    pub position: Vec2,
    pub pivot: Vec2,
    pub z_index: i32,
    pub visible: bool,
    pixels: World,
}

impl GameObject {
    /// Visible object at the origin with z-index 0.
    pub fn new(pixels: World) -> Self {
        Self {
            position: Vec2::ZERO,
            pivot: Vec2::ZERO,
            z_index: 0,
            visible: true,
            pixels,
        }
    }

    /// Build from pixel rows; all rows must share one width.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        World::from_rows(rows).map(Self::new)
    }

    /// Load the sprite from a compressed pixel asset.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        asset::load_pixels(path).map(Self::new)
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &World {
        &self.pixels
    }

    /// World-space coordinate of the top-left pixel.
    pub fn origin(&self) -> Vec2 {
        self.position - self.pivot
    }

    /// Blend every pixel onto `world`. Invisible objects draw nothing.
    pub fn draw(&self, world: &mut World) {
        if !self.visible {
            return;
        }
        let origin = self.origin();
        for (ly, row) in self.pixels.rows().enumerate() {
            let wy = origin.y.saturating_add(ly as i32);
            for (lx, &color) in row.iter().enumerate() {
                world.set(origin.x.saturating_add(lx as i32), wy, color);
            }
        }
    }
}

/// Draws objects in ascending z-index order.
///
/// Ties keep their input order. The draw order is recomputed on every call;
/// the index buffer is reused between frames.
#[derive(Debug, Default)]
pub struct Compositor {
    order: Vec<usize>,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&mut self, world: &mut World, objects: &[GameObject]) {
        self.order.clear();
        self.order.extend(0..objects.len());
        // `sort_by_key` is stable.
        self.order.sort_by_key(|&i| objects[i].z_index);
        for &i in &self.order {
            objects[i].draw(world);
        }
    }

    /// Indices into the last drawn slice, in draw order.
    pub fn last_order(&self) -> &[usize] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(color: Color, w: usize, h: usize) -> GameObject {
        GameObject::from_rows(vec![vec![color; w]; h]).unwrap()
    }

    #[test]
    fn draw_places_pixels_relative_to_pivot() {
        let mut world = World::new(6, 6);
        world.clear(Color::WHITE);
        let red = Color::rgb(255, 0, 0);
        let obj = block(red, 2, 2)
            .with_position(Vec2::new(3, 3))
            .with_pivot(Vec2::new(1, 1));
        obj.draw(&mut world);

        assert_eq!(world.get(2, 2), Some(red));
        assert_eq!(world.get(3, 3), Some(red));
        assert_eq!(world.get(4, 4), Some(Color::WHITE));
        assert_eq!(world.get(1, 1), Some(Color::WHITE));
    }

    #[test]
    fn invisible_objects_are_skipped() {
        let mut world = World::new(2, 2);
        world.clear(Color::WHITE);
        let mut obj = block(Color::BLACK, 2, 2);
        obj.visible = false;
        let before = world.clone();
        obj.draw(&mut world);
        assert_eq!(world, before);
    }

    #[test]
    fn empty_object_draws_nothing() {
        let mut world = World::new(2, 2);
        world.clear(Color::WHITE);
        let before = world.clone();
        let obj = GameObject::from_rows(Vec::new()).unwrap();
        assert_eq!((obj.width(), obj.height()), (0, 0));
        obj.draw(&mut world);
        assert_eq!(world, before);
    }

    #[test]
    fn object_outside_world_is_harmless() {
        let mut world = World::new(4, 4);
        world.clear(Color::WHITE);
        let before = world.clone();
        for pos in [
            Vec2::new(-10, 0),
            Vec2::new(10, 1),
            Vec2::new(1, 50),
            Vec2::new(i32::MAX, i32::MAX),
            Vec2::new(i32::MIN + 1, 0),
        ] {
            block(Color::BLACK, 3, 3).with_position(pos).draw(&mut world);
        }
        assert_eq!(world, before);
    }

    #[test]
    fn compositor_draws_higher_z_on_top() {
        let mut world = World::new(1, 1);
        let red = Color::rgb(255, 0, 0);
        let green = Color::rgb(0, 255, 0);
        let objects = vec![block(red, 1, 1).with_z_index(5), block(green, 1, 1).with_z_index(1)];

        let mut compositor = Compositor::new();
        compositor.draw(&mut world, &objects);
        assert_eq!(world.get(0, 0), Some(red));
        assert_eq!(compositor.last_order(), &[1, 0]);
    }

    #[test]
    fn compositor_keeps_input_order_for_equal_z() {
        let a = block(Color::rgb(1, 1, 1), 1, 1).with_z_index(3);
        let b = block(Color::rgb(2, 2, 2), 1, 1).with_z_index(3);

        let mut compositor = Compositor::new();
        let mut world = World::new(1, 1);
        compositor.draw(&mut world, &[a.clone(), b.clone()]);
        assert_eq!(world.get(0, 0), Some(Color::rgb(2, 2, 2)));

        compositor.draw(&mut world, &[b, a]);
        assert_eq!(world.get(0, 0), Some(Color::rgb(1, 1, 1)));
    }

    #[test]
    fn translucent_sprite_blends_with_sprite_below() {
        let mut world = World::new(1, 1);
        world.clear(Color::BLACK);
        let base = block(Color::rgb(200, 0, 0), 1, 1).with_z_index(0);
        let glass = block(Color::rgba(0, 0, 255, 51), 1, 1).with_z_index(1);

        Compositor::new().draw(&mut world, &[glass, base]);
        // r: 200*204/255 = 160, b: 255*51/255 = 51
        assert_eq!(world.get(0, 0), Some(Color::rgb(160, 0, 51)));
    }
}
