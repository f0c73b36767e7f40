//! Tile addressing.
//!
//! A `TileIndex` is a flat row-major cell index. Relative addressing uses
//! `TileOffset`. All arithmetic that turns an offset back into a tile goes
//! through `MapSize`, which bounds-checks against the map edges instead of
//! wrapping into the next row.

use std::ops::{Add, Mul, Sub};

use bevy::prelude::*;

use crate::config::{MAP_EDGE_MAX, MAP_SIZE_X, MAP_SIZE_Y, TILE_SIZE};
use crate::direction::DiagDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileIndex(pub u32);

/// Signed tile delta. Orders by `x`, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TileOffset {
    pub x: i32,
    pub y: i32,
}

impl TileOffset {
    pub const ZERO: TileOffset = TileOffset { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Quarter turn about the origin: `(x, y) -> (-y, x)`.
    pub fn rotated(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl Add for TileOffset {
    type Output = TileOffset;

    fn add(self, rhs: TileOffset) -> TileOffset {
        TileOffset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for TileOffset {
    type Output = TileOffset;

    fn sub(self, rhs: TileOffset) -> TileOffset {
        TileOffset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for TileOffset {
    type Output = TileOffset;

    fn mul(self, rhs: i32) -> TileOffset {
        TileOffset::new(self.x * rhs, self.y * rhs)
    }
}

/// Map dimensions in tiles.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSize {
    width: u32,
    height: u32,
}

impl Default for MapSize {
    fn default() -> Self {
        Self::new(MAP_SIZE_X, MAP_SIZE_Y)
    }
}

impl MapSize {
    /// Each edge is clamped to `1..=MAP_EDGE_MAX`, so index arithmetic never
    /// divides by zero or overflows.
    pub fn new(width: u32, height: u32) -> Self {
        let clamped = Self {
            width: width.clamp(1, MAP_EDGE_MAX),
            height: height.clamp(1, MAP_EDGE_MAX),
        };
        if clamped.width != width || clamped.height != height {
            warn!(
                "MapSize {}x{} out of range, clamped to {}x{}",
                width, height, clamped.width, clamped.height
            );
        }
        clamped
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn tile_count(&self) -> u32 {
        self.width * self.height
    }

    #[inline]
    pub fn contains(&self, tile: TileIndex) -> bool {
        tile.0 < self.tile_count()
    }

    /// Tile at `(x, y)`, or `None` off the map.
    pub fn tile_xy(&self, x: i32, y: i32) -> Option<TileIndex> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(TileIndex(y as u32 * self.width + x as u32))
    }

    #[inline]
    pub fn tile_x(&self, tile: TileIndex) -> u32 {
        tile.0 % self.width
    }

    #[inline]
    pub fn tile_y(&self, tile: TileIndex) -> u32 {
        tile.0 / self.width
    }

    pub fn coords(&self, tile: TileIndex) -> Option<(i32, i32)> {
        if !self.contains(tile) {
            return None;
        }
        Some((self.tile_x(tile) as i32, self.tile_y(tile) as i32))
    }

    /// `tile + offset`, bounds-checked on both axes.
    pub fn add_offset(&self, tile: TileIndex, offset: TileOffset) -> Option<TileIndex> {
        let (x, y) = self.coords(tile)?;
        self.tile_xy(x.checked_add(offset.x)?, y.checked_add(offset.y)?)
    }

    /// Neighbour across the given edge.
    pub fn step(&self, tile: TileIndex, dir: DiagDirection) -> Option<TileIndex> {
        self.add_offset(tile, dir.offset())
    }

    /// Offset that takes `from` to `to`.
    pub fn offset_between(&self, from: TileIndex, to: TileIndex) -> TileOffset {
        let (fx, fy) = (self.tile_x(from) as i32, self.tile_y(from) as i32);
        let (tx, ty) = (self.tile_x(to) as i32, self.tile_y(to) as i32);
        TileOffset::new(tx - fx, ty - fy)
    }

    /// Screen-space position of the tile centre on flat ground.
    pub fn tile_pixel_center(&self, tile: TileIndex) -> Option<IVec2> {
        let (x, y) = self.coords(tile)?;
        let wx = x * TILE_SIZE + TILE_SIZE / 2;
        let wy = y * TILE_SIZE + TILE_SIZE / 2;
        Some(IVec2::new((wy - wx) * 2, wy + wx))
    }
}

/// Inclusive rectangle of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileArea {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl TileArea {
    /// Rectangle spanned by two opposite corners, in either order.
    pub fn from_corners(map: &MapSize, a: TileIndex, b: TileIndex) -> Option<Self> {
        let (ax, ay) = map.coords(a)?;
        let (bx, by) = map.coords(b)?;
        Some(Self {
            min_x: ax.min(bx),
            min_y: ay.min(by),
            max_x: ax.max(bx),
            max_y: ay.max(by),
        })
    }

    pub fn single(map: &MapSize, tile: TileIndex) -> Option<Self> {
        Self::from_corners(map, tile, tile)
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }

    /// Grow by `margin` tiles on every side. Not clipped; `tiles` clips.
    pub fn expanded(self, margin: i32) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Tiles in row-major order (y outer, x inner), skipping off-map cells.
    pub fn tiles<'a>(&self, map: &'a MapSize) -> impl Iterator<Item = TileIndex> + 'a {
        let area = *self;
        (area.min_y..=area.max_y)
            .flat_map(move |y| (area.min_x..=area.max_x).map(move |x| (x, y)))
            .filter_map(move |(x, y)| map.tile_xy(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_xy_roundtrip() {
        let map = MapSize::new(64, 32);
        let tile = map.tile_xy(10, 20).unwrap();
        assert_eq!(tile, TileIndex(20 * 64 + 10));
        assert_eq!(map.tile_x(tile), 10);
        assert_eq!(map.tile_y(tile), 20);
    }

    #[test]
    fn test_tile_xy_out_of_bounds() {
        let map = MapSize::new(64, 32);
        assert!(map.tile_xy(-1, 0).is_none());
        assert!(map.tile_xy(0, -1).is_none());
        assert!(map.tile_xy(64, 0).is_none());
        assert!(map.tile_xy(0, 32).is_none());
    }

    #[test]
    fn test_add_offset_does_not_wrap_rows() {
        let map = MapSize::new(64, 32);
        let edge = map.tile_xy(63, 5).unwrap();
        // A flat index + 1 would land on (0, 6); the checked add refuses.
        assert!(map.add_offset(edge, TileOffset::new(1, 0)).is_none());
        assert_eq!(
            map.add_offset(edge, TileOffset::new(-3, 2)),
            map.tile_xy(60, 7)
        );
    }

    #[test]
    fn test_offset_between_inverts_add_offset() {
        let map = MapSize::default();
        let a = map.tile_xy(40, 90).unwrap();
        let b = map.tile_xy(12, 101).unwrap();
        let delta = map.offset_between(a, b);
        assert_eq!(delta, TileOffset::new(-28, 11));
        assert_eq!(map.add_offset(a, delta), Some(b));
    }

    #[test]
    fn test_offset_ordering_is_x_then_y() {
        let mut offsets = vec![
            TileOffset::new(1, -5),
            TileOffset::new(0, 3),
            TileOffset::new(1, -7),
            TileOffset::new(-2, 9),
        ];
        offsets.sort();
        assert_eq!(
            offsets,
            vec![
                TileOffset::new(-2, 9),
                TileOffset::new(0, 3),
                TileOffset::new(1, -7),
                TileOffset::new(1, -5),
            ]
        );
    }

    #[test]
    fn test_step_follows_direction_offsets() {
        let map = MapSize::default();
        let tile = map.tile_xy(5, 5).unwrap();
        assert_eq!(map.step(tile, DiagDirection::NE), map.tile_xy(4, 5));
        assert_eq!(map.step(tile, DiagDirection::SE), map.tile_xy(5, 6));
        assert_eq!(map.step(tile, DiagDirection::SW), map.tile_xy(6, 5));
        assert_eq!(map.step(tile, DiagDirection::NW), map.tile_xy(5, 4));
        let corner = map.tile_xy(0, 0).unwrap();
        assert!(map.step(corner, DiagDirection::NE).is_none());
    }

    #[test]
    fn test_area_iterates_row_major_and_clips() {
        let map = MapSize::new(8, 8);
        let a = map.tile_xy(6, 1).unwrap();
        let b = map.tile_xy(7, 2).unwrap();
        let area = TileArea::from_corners(&map, b, a).unwrap();
        assert_eq!(area.width(), 2);
        assert_eq!(area.height(), 2);
        let tiles: Vec<_> = area.tiles(&map).collect();
        assert_eq!(tiles, vec![TileIndex(14), TileIndex(15), TileIndex(22), TileIndex(23)]);

        let grown: Vec<_> = area.expanded(1).tiles(&map).collect();
        // 4x4 requested, but column x=8 is off the map.
        assert_eq!(grown.len(), 12);
    }

    #[test]
    fn test_pixel_center_is_isometric() {
        let map = MapSize::default();
        let origin = map.tile_pixel_center(TileIndex(0)).unwrap();
        assert_eq!(origin, IVec2::new(0, 16));
        let east = map.tile_pixel_center(map.tile_xy(1, 0).unwrap()).unwrap();
        assert_eq!(east.x - origin.x, -2 * TILE_SIZE);
        assert!(map.tile_pixel_center(TileIndex(map.tile_count())).is_none());
    }

    #[test]
    fn test_map_size_clamps_degenerate_edges() {
        let flat = MapSize::new(0, 8);
        assert_eq!(flat.width(), 1);
        assert_eq!(flat.tile_count(), 8);
        let a = flat.tile_xy(0, 2).unwrap();
        let b = flat.tile_xy(0, 7).unwrap();
        assert_eq!(flat.offset_between(a, b), TileOffset::new(0, 5));

        let huge = MapSize::new(u32::MAX, 100_000);
        assert_eq!(huge.width(), MAP_EDGE_MAX);
        assert_eq!(huge.height(), MAP_EDGE_MAX);
        assert_eq!(huge.tile_count(), MAP_EDGE_MAX * MAP_EDGE_MAX);
    }
}
