use std::fmt;

use crate::geometry::Rect;

/// An input to the rectangle packing routines.
///
/// `InputItem` is just a 2D size. Items are packed in the order they're given
/// and each one comes back as an [`OutputItem`] carrying its position in that
/// order, which consumers can use to associate results with their own objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputItem {
    pub(crate) size: (u32, u32),
}

impl InputItem {
    #[inline]
    pub fn new(size: (u32, u32)) -> Self {
        Self { size }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// The larger of the item's width and height.
    #[inline]
    pub fn max_side(&self) -> u32 {
        self.size.0.max(self.size.1)
    }

    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.size.0) * u64::from(self.size.1)
    }
}

/// Sorts items so the ones with the longest side come first.
///
/// The growing packer never reorders its input, and it produces its squarest
/// results, and never fails, when given items in this order. The sort is
/// stable, so items with the same longest side keep their relative order.
pub fn sort_by_max_side(items: &mut [InputItem]) {
    items.sort_by(|a, b| b.max_side().cmp(&a.max_side()));
}

/// An item that was placed by a packing function.
///
/// `OutputItem` corresponds 1:1 to `InputItem` objects that were passed into
/// the packing function. They expose the index of the input, as well as
/// position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputItem {
    pub(crate) index: usize,
    pub(crate) rect: Rect,
}

impl OutputItem {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.rect.size
    }

    #[inline]
    pub fn min(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn max(&self) -> (u32, u32) {
        self.rect.max()
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// The results from running the growing packer: the size of the area every
/// item was packed into, and where each item ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOutput {
    pub(crate) size: (u32, u32),
    pub(crate) items: Vec<OutputItem>,
}

impl PackOutput {
    /// The bounding box of all packed items, anchored at the origin. This is
    /// `(0, 0)` if nothing was packed.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Packed items, in the same order as the inputs.
    #[inline]
    pub fn items(&self) -> &[OutputItem] {
        &self.items
    }

    /// The share of the bounding box covered by items, between 0 and 1.
    pub fn efficiency(&self) -> f64 {
        let total = u64::from(self.size.0) * u64::from(self.size.1);
        if total == 0 {
            return 1.0;
        }

        let used: u64 = self.items.iter().map(|item| item.rect.area()).sum();
        used as f64 / total as f64
    }
}

impl fmt::Display for PackOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.size.0, self.size.1)?;

        for item in &self.items {
            let (x, y) = item.position();
            let (width, height) = item.size();

            write!(f, "\n{}: {}x{} at ({}, {})", item.index, width, height, x, y)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sizes(items: &[InputItem]) -> Vec<(u32, u32)> {
        items.iter().map(InputItem::size).collect()
    }

    #[test]
    fn sort_puts_longest_side_first() {
        let mut items = vec![
            InputItem::new((4, 4)),
            InputItem::new((1, 30)),
            InputItem::new((16, 2)),
            InputItem::new((30, 1)),
        ];

        sort_by_max_side(&mut items);

        assert_eq!(sizes(&items), vec![(1, 30), (30, 1), (16, 2), (4, 4)]);
    }

    #[test]
    fn efficiency_of_empty_output() {
        let output = PackOutput {
            size: (0, 0),
            items: Vec::new(),
        };

        assert_eq!(output.efficiency(), 1.0);
    }

    #[test]
    fn efficiency_counts_item_area() {
        let output = PackOutput {
            size: (20, 20),
            items: vec![
                OutputItem {
                    index: 0,
                    rect: Rect::new((0, 0), (10, 10)),
                },
                OutputItem {
                    index: 1,
                    rect: Rect::new((10, 0), (10, 10)),
                },
            ],
        };

        assert_eq!(output.efficiency(), 0.5);
    }

    #[test]
    fn output_item_corners() {
        let item = OutputItem {
            index: 3,
            rect: Rect::new((5, 7), (10, 2)),
        };

        assert_eq!(item.min(), (5, 7));
        assert_eq!(item.max(), (15, 9));
        assert_eq!(item.index(), 3);
    }
}
