use serde::{Deserialize, Serialize};

/// Square tile in grid space (always u32 coordinates)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRect {
    /// First column covered by the tile
    pub x: u32,
    /// First row covered by the tile
    pub y: u32,
    /// Edge length in pixels
    pub size: u32,
}

impl TileRect {
    pub fn new(x: u32, y: u32, size: u32) -> Self {
        Self { x, y, size }
    }

    /// Calculate area in pixels
    pub fn area(&self) -> u64 {
        self.size as u64 * self.size as u64
    }

    /// Check if grid cell (row, col) is inside the tile
    pub fn contains(&self, row: u32, col: u32) -> bool {
        col >= self.x && col < self.x + self.size && row >= self.y && row < self.y + self.size
    }

    /// Global row indices covered by the tile.
    pub fn rows(&self) -> std::ops::Range<usize> {
        self.y as usize..(self.y + self.size) as usize
    }

    /// Global column indices covered by the tile.
    pub fn columns(&self) -> std::ops::Range<usize> {
        self.x as usize..(self.x + self.size) as usize
    }
}

/// Row-major iterator over the tiles of a square grid.
#[derive(Clone, Debug)]
pub struct Tiles {
    tiles_per_side: u32,
    tile_size: u32,
    /// Tile count goes up to 2^32 for a u32 grid, so the cursor is u64
    next: u64,
}

impl Tiles {
    /// `grid_size` must be a multiple of `tile_size`; see `GridModel::tiles`.
    pub(crate) fn new(grid_size: u32, tile_size: u32) -> Self {
        Self {
            tiles_per_side: grid_size / tile_size,
            tile_size,
            next: 0,
        }
    }

    /// Number of tiles covering the grid.
    pub fn total(&self) -> u64 {
        self.tiles_per_side as u64 * self.tiles_per_side as u64
    }

    /// Tiles not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.total() - self.next
    }
}

impl Iterator for Tiles {
    type Item = TileRect;

    fn next(&mut self) -> Option<TileRect> {
        if self.next >= self.total() {
            return None;
        }
        let per_side = self.tiles_per_side as u64;
        // Both quotients are < tiles_per_side, so they fit in u32
        let tile_row = (self.next / per_side) as u32;
        let tile_col = (self.next % per_side) as u32;
        self.next += 1;
        Some(TileRect::new(
            tile_col * self.tile_size,
            tile_row * self.tile_size,
            self.tile_size,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for Tiles {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_rect_creation() {
        let tile = TileRect::new(64, 128, 64);
        assert_eq!(tile.x, 64);
        assert_eq!(tile.y, 128);
        assert_eq!(tile.size, 64);
    }

    #[test]
    fn test_tile_rect_area() {
        let tile = TileRect::new(0, 0, 64);
        assert_eq!(tile.area(), 4096);
    }

    #[test]
    fn test_tile_rect_contains() {
        let tile = TileRect::new(8, 16, 8);
        assert!(tile.contains(16, 8));
        assert!(tile.contains(23, 15));
        assert!(!tile.contains(24, 15));
        assert!(!tile.contains(16, 7));
    }

    #[test]
    fn test_tile_rect_ranges() {
        let tile = TileRect::new(4, 8, 4);
        assert_eq!(tile.rows(), 8..12);
        assert_eq!(tile.columns(), 4..8);
    }

    #[test]
    fn test_tiles_row_major_order() {
        let tiles: Vec<_> = Tiles::new(8, 4).collect();
        assert_eq!(
            tiles,
            vec![
                TileRect::new(0, 0, 4),
                TileRect::new(4, 0, 4),
                TileRect::new(0, 4, 4),
                TileRect::new(4, 4, 4),
            ]
        );
    }

    #[test]
    fn test_tile_area_of_full_u32_edge() {
        let tile = TileRect::new(0, 0, 65_536);
        assert_eq!(tile.area(), 1 << 32);
    }

    #[test]
    fn test_tiles_total_does_not_wrap() {
        // 65536 tiles per side: 2^32 tiles in total
        let mut tiles = Tiles::new(65_536, 1);
        assert_eq!(tiles.total(), 1 << 32);
        assert_eq!(tiles.remaining(), 1 << 32);
        assert_eq!(tiles.next(), Some(TileRect::new(0, 0, 1)));
        assert_eq!(tiles.next(), Some(TileRect::new(1, 0, 1)));
        assert_eq!(tiles.remaining(), (1 << 32) - 2);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_tiles_len_of_largest_grid() {
        let tiles = Tiles::new(65_536, 1);
        assert_eq!(tiles.len(), 1 << 32);
    }

    #[test]
    fn test_tiles_exact_size() {
        let mut tiles = Tiles::new(256, 64);
        assert_eq!(tiles.len(), 16);
        tiles.next();
        assert_eq!(tiles.len(), 15);
    }
}
