//! Property tests for the layouts produced by the growing packer.
//!
//! Random block lists are packed both through `GrowingPacker` and through the
//! raw `Packable` interface, and every successful layout is checked for
//! overlaps, containment and a tight bounding box.

use binpack::{pack, sort_by_max_side, GrowingPacker, InputItem, PackError, Packable, Rect};
use proptest::prelude::*;

/// Blocks stored the way a caller would store them, with positions written
/// back in place.
struct Tiles {
    sizes: Vec<(u32, u32)>,
    positions: Vec<Option<(u32, u32)>>,
    order: Vec<usize>,
}

impl Tiles {
    fn new(sizes: &[(u32, u32)]) -> Self {
        Self {
            sizes: sizes.to_vec(),
            positions: vec![None; sizes.len()],
            order: Vec::new(),
        }
    }
}

impl Packable for Tiles {
    fn count(&self) -> usize {
        self.sizes.len()
    }

    fn dimensions(&self, index: usize) -> (u32, u32) {
        self.sizes[index]
    }

    fn place(&mut self, index: usize, position: (u32, u32)) {
        assert!(
            self.positions[index].is_none(),
            "block {} placed twice",
            index
        );

        self.positions[index] = Some(position);
        self.order.push(index);
    }
}

fn sizes() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((1u32..=64, 1u32..=64), 0..48)
}

fn sorted_items(sizes: &[(u32, u32)]) -> Vec<InputItem> {
    let mut items: Vec<_> = sizes.iter().map(|&size| InputItem::new(size)).collect();
    sort_by_max_side(&mut items);
    items
}

/// Checks that `rects` fit in `bounds` without overlapping and that `bounds`
/// is no larger than it needs to be.
fn check_layout(bounds: (u32, u32), rects: &[Rect]) -> Result<(), TestCaseError> {
    if rects.is_empty() {
        prop_assert_eq!(bounds, (0, 0));
        return Ok(());
    }

    let area = Rect::new((0, 0), bounds);

    for (i, rect) in rects.iter().enumerate() {
        prop_assert!(area.contains(rect), "{:?} is outside of {:?}", rect, bounds);

        for other in &rects[i + 1..] {
            prop_assert!(!rect.intersects(other), "{:?} overlaps {:?}", rect, other);
        }
    }

    let max_x = rects.iter().map(|rect| rect.max().0).max();
    let max_y = rects.iter().map(|rect| rect.max().1).max();
    prop_assert_eq!(max_x, Some(bounds.0));
    prop_assert_eq!(max_y, Some(bounds.1));

    Ok(())
}

proptest! {
    #[test]
    fn sorted_blocks_always_pack(sizes in sizes()) {
        let items = sorted_items(&sizes);
        let output = GrowingPacker::new().pack(items.clone());
        prop_assert!(output.is_ok(), "{:?}", output);

        let output = output.unwrap();
        prop_assert_eq!(output.items().len(), items.len());

        for (index, (item, input)) in output.items().iter().zip(&items).enumerate() {
            prop_assert_eq!(item.index(), index);
            prop_assert_eq!(item.size(), input.size());
        }

        let rects: Vec<_> = output.items().iter().map(|item| item.rect()).collect();
        check_layout(output.size(), &rects)?;
    }

    #[test]
    fn unsorted_blocks_pack_or_fail_cleanly(sizes in sizes()) {
        let mut tiles = Tiles::new(&sizes);

        match pack(&mut tiles) {
            Ok(bounds) => {
                let expected: Vec<_> = (0..sizes.len()).collect();
                prop_assert_eq!(&tiles.order, &expected);

                let rects: Vec<_> = tiles
                    .positions
                    .iter()
                    .zip(&tiles.sizes)
                    .map(|(position, &size)| Rect::new(position.unwrap(), size))
                    .collect();
                check_layout(bounds, &rects)?;
            }
            Err(PackError::Ungrowable { index, size, root }) => {
                // Blocks are placed in order up to the one that failed, which
                // has to be larger than the packed area on both axes.
                let expected: Vec<_> = (0..index).collect();
                prop_assert_eq!(&tiles.order, &expected);
                prop_assert_eq!(size, sizes[index]);
                prop_assert!(size.0 > root.0 && size.1 > root.1);
            }
            Err(err) => prop_assert!(false, "unexpected error: {}", err),
        }
    }

    #[test]
    fn packing_is_deterministic(sizes in sizes()) {
        let first = GrowingPacker::new().pack(sizes.iter().map(|&size| InputItem::new(size)));
        let second = GrowingPacker::new().pack(sizes.iter().map(|&size| InputItem::new(size)));

        prop_assert_eq!(first, second);
    }

    #[test]
    fn earlier_placements_never_move(sizes in sizes()) {
        let items = sorted_items(&sizes);
        let full = GrowingPacker::new().pack(items.clone()).unwrap();

        // Packing a prefix of the input has to place those blocks exactly
        // where the full run did.
        let half = items.len() / 2;
        let prefix = GrowingPacker::new().pack(items[..half].iter().copied()).unwrap();

        prop_assert_eq!(prefix.items(), &full.items()[..half]);
    }

    #[test]
    fn max_size_is_respected(sizes in sizes(), limit in 64u32..=512) {
        let items = sorted_items(&sizes);

        match GrowingPacker::new().max_size((limit, limit)).pack(items) {
            Ok(output) => {
                prop_assert!(output.size().0 <= limit && output.size().1 <= limit);

                let rects: Vec<_> = output.items().iter().map(|item| item.rect()).collect();
                check_layout(output.size(), &rects)?;
            }
            Err(PackError::ExceedsMaxSize { max_size, .. }) => {
                prop_assert_eq!(max_size, (limit, limit));
            }
            Err(err) => prop_assert!(false, "unexpected error: {}", err),
        }
    }
}

#[test]
fn impossible_block_reports_failure() {
    let mut tiles = Tiles::new(&[(10, 10), (20, 20)]);

    let err = pack(&mut tiles).unwrap_err();

    assert_eq!(
        err,
        PackError::Ungrowable {
            index: 1,
            size: (20, 20),
            root: (10, 10),
        }
    );
    assert_eq!(tiles.order, vec![0]);
}

#[test]
fn error_messages() {
    let err = PackError::EmptyBlock {
        index: 4,
        size: (0, 3),
    };

    assert_eq!(err.to_string(), "block 4 has an empty size (0, 3)");
}
