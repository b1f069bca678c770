use core::cmp::Ordering;

/// Z-layer of a draw item. Higher layers paint over lower ones; the face
/// keeps the dial disc below the sector this way.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Paint-order key: z-layer first, then insertion index within the layer.
/// The second component keeps sorting stable without relying on the sort
/// algorithm itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    /// Insertion index assigned by the draw list.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.z.cmp(&other.z).then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_dominates_insertion_order() {
        let early_high = SortKey::new(ZIndex::new(5), 0);
        let late_low = SortKey::new(ZIndex::new(1), 9);
        assert!(late_low < early_high);
    }

    #[test]
    fn equal_z_falls_back_to_insertion_order() {
        let first = SortKey::new(ZIndex::new(0), 0);
        let second = SortKey::new(ZIndex::new(0), 1);
        assert!(first < second);
    }
}
