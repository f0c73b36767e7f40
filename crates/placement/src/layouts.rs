//! Static airport and industry layout tables.
//!
//! The game owns the real tables; the host copies the layouts it wants to
//! preview into this resource. Lookups for unknown type/layout pairs return
//! `None` and the preview simply shows nothing for them.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::tile::TileOffset;
use crate::types::{AirportType, IndustryType, StationGfx};

/// One tile of a multi-tile layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutTile {
    pub offset: TileOffset,
    pub gfx: StationGfx,
}

impl LayoutTile {
    pub fn new(x: i32, y: i32, gfx: u8) -> Self {
        Self {
            offset: TileOffset::new(x, y),
            gfx: StationGfx(gfx),
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct LayoutTables {
    airports: HashMap<(AirportType, u8), Vec<LayoutTile>>,
    industries: HashMap<(IndustryType, u32), Vec<LayoutTile>>,
}

impl LayoutTables {
    pub fn register_airport(&mut self, airport: AirportType, layout: u8, tiles: Vec<LayoutTile>) {
        self.airports.insert((airport, layout), tiles);
    }

    pub fn register_industry(
        &mut self,
        industry: IndustryType,
        layout: u32,
        tiles: Vec<LayoutTile>,
    ) {
        self.industries.insert((industry, layout), tiles);
    }

    pub fn airport_layout(&self, airport: AirportType, layout: u8) -> Option<&[LayoutTile]> {
        self.airports.get(&(airport, layout)).map(Vec::as_slice)
    }

    pub fn industry_layout(&self, industry: IndustryType, layout: u32) -> Option<&[LayoutTile]> {
        self.industries.get(&(industry, layout)).map(Vec::as_slice)
    }
}

/// Bounding offsets `(min, max)` of a layout, or `None` when it is empty.
pub fn layout_extent(tiles: &[LayoutTile]) -> Option<(TileOffset, TileOffset)> {
    let first = tiles.first()?.offset;
    Some(tiles.iter().fold((first, first), |(lo, hi), t| {
        (
            TileOffset::new(lo.x.min(t.offset.x), lo.y.min(t.offset.y)),
            TileOffset::new(hi.x.max(t.offset.x), hi.y.max(t.offset.y)),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_layout_is_none() {
        let tables = LayoutTables::default();
        assert!(tables.airport_layout(AirportType(0), 0).is_none());
        assert!(tables.industry_layout(IndustryType(4), 1).is_none());
    }

    #[test]
    fn test_registered_layout_lookup() {
        let mut tables = LayoutTables::default();
        tables.register_airport(
            AirportType(1),
            0,
            vec![LayoutTile::new(0, 0, 5), LayoutTile::new(1, 0, 6)],
        );
        let layout = tables.airport_layout(AirportType(1), 0).unwrap();
        assert_eq!(layout.len(), 2);
        assert_eq!(layout[1].gfx, StationGfx(6));
        assert!(tables.airport_layout(AirportType(1), 1).is_none());
    }

    #[test]
    fn test_layout_extent() {
        let tiles = [
            LayoutTile::new(0, 0, 0),
            LayoutTile::new(3, -1, 0),
            LayoutTile::new(1, 2, 0),
        ];
        assert_eq!(
            layout_extent(&tiles),
            Some((TileOffset::new(0, -1), TileOffset::new(3, 2)))
        );
        assert_eq!(layout_extent(&[]), None);
    }
}
