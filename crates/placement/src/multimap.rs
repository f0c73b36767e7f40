//! Ordered tile -> highlight multimap.
//!
//! Several overlays may legitimately share one tile (two crossing tracks, a
//! signal on a track), so inserting never replaces. Per-tile entries keep
//! insertion order; tiles iterate in ascending index order.

use std::collections::BTreeMap;

use crate::tile::TileIndex;
use crate::tile_highlight::ObjectTileHighlight;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileMultimap {
    entries: BTreeMap<TileIndex, Vec<ObjectTileHighlight>>,
}

impl TileMultimap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tile: TileIndex, highlight: ObjectTileHighlight) {
        self.entries.entry(tile).or_default().push(highlight);
    }

    /// All highlights on `tile`, in insertion order.
    pub fn get(&self, tile: TileIndex) -> &[ObjectTileHighlight] {
        self.entries.get(&tile).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_tile(&self, tile: TileIndex) -> bool {
        self.entries.contains_key(&tile)
    }

    /// Total number of entries, counting duplicates per tile.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct tiles.
    pub fn tile_count(&self) -> usize {
        self.entries.len()
    }

    pub fn tiles(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileIndex, &ObjectTileHighlight)> + '_ {
        self.entries
            .iter()
            .flat_map(|(tile, list)| list.iter().map(move |hl| (*tile, hl)))
    }

    pub fn extend(&mut self, other: TileMultimap) {
        for (tile, list) in other.entries {
            self.entries.entry(tile).or_default().extend(list);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PALETTE_TINT_WHITE;
    use crate::direction::Track;

    #[test]
    fn test_insert_keeps_duplicates() {
        let mut map = TileMultimap::new();
        let x = ObjectTileHighlight::make_rail_track(PALETTE_TINT_WHITE, Track::X);
        let y = ObjectTileHighlight::make_rail_track(PALETTE_TINT_WHITE, Track::Y);
        map.insert(TileIndex(5), x);
        map.insert(TileIndex(5), y);
        map.insert(TileIndex(5), x);
        assert_eq!(map.get(TileIndex(5)), &[x, y, x]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.tile_count(), 1);
    }

    #[test]
    fn test_missing_tile_is_empty_slice() {
        let map = TileMultimap::new();
        assert!(map.get(TileIndex(1)).is_empty());
        assert!(map.is_empty());
        assert!(!map.contains_tile(TileIndex(1)));
    }

    #[test]
    fn test_extend_merges_per_tile() {
        let point = ObjectTileHighlight::make_point(PALETTE_TINT_WHITE);
        let mut a = TileMultimap::new();
        a.insert(TileIndex(2), point);
        let mut b = TileMultimap::new();
        b.insert(TileIndex(2), point);
        b.insert(TileIndex(9), point);
        a.extend(b);
        assert_eq!(a.get(TileIndex(2)).len(), 2);
        assert_eq!(a.tiles().collect::<Vec<_>>(), vec![TileIndex(2), TileIndex(9)]);
        assert_eq!(a.iter().count(), 3);
    }
}
