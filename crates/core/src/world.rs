//! World: the row-major pixel grid everything is drawn into.
//!
//! The same type backs the full scene, camera views and sprite pixel blocks.

use crate::error::{Error, Result};
use crate::types::{blend, Color};

/// Row-major 2D grid of [`Color`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct World {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl World {
    /// A `width` x `height` grid of transparent black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Color::default(); width * height],
        }
    }

    /// Build a grid from rows. All rows must share the first row's width.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (row, pixels) in rows.into_iter().enumerate() {
            if pixels.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    found: pixels.len(),
                });
            }
            cells.extend(pixels);
        }
        // A zero-width block has no pixels, whatever its row count.
        let height = if width == 0 { 0 } else { height };
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from a flat row-major pixel buffer.
    pub fn from_pixels(width: usize, height: usize, cells: Vec<Color>) -> Result<Self> {
        let expected = width * height;
        if cells.len() != expected {
            return Err(Error::PixelCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn same_size(&self, other: &World) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Become a copy of `other`, reusing this grid's allocation.
    pub fn copy_from(&mut self, other: &World) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clone_from(&other.cells);
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= self.height()`. Use [`get`](Self::get) for checked access.
    pub fn row(&self, y: usize) -> &[Color] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks_exact(0) panics, and a zero-width grid has no visible rows anyway.
        self.cells.chunks_exact(self.width.max(1))
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Fill every cell with `color`, forced opaque.
    pub fn clear(&mut self, color: Color) {
        self.cells.fill(color.opaque());
    }

    /// Blend `color` over the cell at (`x`, `y`). Out-of-range writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = blend(self.cells[i], color);
        }
    }

    /// Copy the `w` x `h` rectangle at (`x`, `y`) into a new grid.
    ///
    /// Cells outside this grid stay transparent black. A non-positive size
    /// yields an empty 0x0 grid.
    pub fn sub_view(&self, x: i32, y: i32, w: i32, h: i32) -> World {
        if w <= 0 || h <= 0 {
            return World::new(0, 0);
        }
        let mut view = World::new(w as usize, h as usize);
        for vy in 0..h {
            let Some(sy) = y.checked_add(vy) else { break };
            if sy < 0 || sy as usize >= self.height {
                continue;
            }
            let src_row = self.row(sy as usize);
            let dst_start = vy as usize * view.width;
            for vx in 0..w {
                let Some(sx) = x.checked_add(vx) else { break };
                if sx < 0 || sx as usize >= self.width {
                    continue;
                }
                view.cells[dst_start + vx as usize] = src_row[sx as usize];
            }
        }
        view
    }
}
