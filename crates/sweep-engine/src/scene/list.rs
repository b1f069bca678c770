use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// The face rebuilds the list from scratch on every redraw; `clear()` keeps
/// the allocations warm so steady-state frames do not allocate.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn list_with_discs(zs: &[i32]) -> DrawList {
        let mut dl = DrawList::new();
        for (i, &z) in zs.iter().enumerate() {
            dl.push_disc(ZIndex::new(z), Vec2::zero(), 1.0 + i as f32, Color::WHITE);
        }
        dl
    }

    fn radii_in_paint_order(dl: &mut DrawList) -> Vec<f32> {
        dl.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Disc(c) => c.radius,
                _ => panic!("expected disc"),
            })
            .collect()
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn lower_z_paints_first() {
        let mut dl = list_with_discs(&[5, 1, 3]);
        assert_eq!(radii_in_paint_order(&mut dl), vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn equal_z_preserves_insertion_order() {
        let mut dl = list_with_discs(&[0, 0, 0]);
        assert_eq!(radii_in_paint_order(&mut dl), vec![1.0, 2.0, 3.0]);
    }

    // ── reuse ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_resets_items_and_order() {
        let mut dl = list_with_discs(&[1, 2]);
        dl.clear();
        assert!(dl.is_empty());

        dl.push_disc(ZIndex::new(0), Vec2::zero(), 7.0, Color::BLACK);
        assert_eq!(dl.items().len(), 1);
        assert_eq!(dl.items()[0].key.order, 0);
    }
}
