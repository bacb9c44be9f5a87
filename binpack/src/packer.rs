use crate::{
    error::PackError,
    geometry::Rect,
    node::{Growth, Node},
    types::{InputItem, OutputItem, PackOutput},
};

/// A collection of blocks that can be packed by [`pack`].
///
/// Implementors own the blocks; the packer only reads their sizes and reports
/// back where each one should go.
pub trait Packable {
    /// The total number of blocks.
    fn count(&self) -> usize;

    /// The width and height of the block at `index`. Both must be non-zero.
    fn dimensions(&self, index: usize) -> (u32, u32);

    /// Records the top-left position of the block at `index`.
    ///
    /// Called exactly once per block, in increasing index order.
    fn place(&mut self, index: usize, position: (u32, u32));
}

/// Packs `blocks` with a [`GrowingPacker`] using the default configuration,
/// returning the size of the area that holds every block.
pub fn pack<P: Packable + ?Sized>(blocks: &mut P) -> Result<(u32, u32), PackError> {
    GrowingPacker::new().pack_blocks(blocks)
}

/// Packs rectangles into an area that starts out the size of the first block
/// and grows to the right or downwards whenever the next block doesn't fit.
///
/// Blocks are packed in the order given. Sorting them by decreasing
/// `max(width, height)` first, for example with
/// [`sort_by_max_side`][crate::sort_by_max_side], gives the squarest results
/// and guarantees that growth never gets stuck.
#[derive(Debug, Clone, Default)]
pub struct GrowingPacker {
    max_size: Option<(u32, u32)>,
}

impl GrowingPacker {
    pub fn new() -> Self {
        Self { max_size: None }
    }

    /// Limits the packed area to `max_size`. Packing fails with
    /// [`PackError::ExceedsMaxSize`] when a block can't be placed without
    /// exceeding it.
    pub fn max_size(self, max_size: (u32, u32)) -> Self {
        Self {
            max_size: Some(max_size),
        }
    }

    /// Packs `items` in iteration order.
    pub fn pack<I: IntoIterator<Item = InputItem>>(
        &self,
        items: I,
    ) -> Result<PackOutput, PackError> {
        let inputs: Vec<_> = items.into_iter().collect();
        let mut blocks = ItemBlocks {
            inputs: &inputs,
            outputs: Vec::with_capacity(inputs.len()),
        };

        let size = self.pack_blocks(&mut blocks)?;

        Ok(PackOutput {
            size,
            items: blocks.outputs,
        })
    }

    /// Packs every block of `blocks`, returning the size of the area that
    /// holds them all. An empty collection packs into `(0, 0)`.
    pub fn pack_blocks<P: Packable + ?Sized>(
        &self,
        blocks: &mut P,
    ) -> Result<(u32, u32), PackError> {
        let num_blocks = blocks.count();
        log::trace!("Packing {} blocks", num_blocks);

        if num_blocks == 0 {
            return Ok((0, 0));
        }

        let first = Self::dimensions(blocks, 0)?;
        if let Some(max_size) = self.max_size {
            if !Rect::new((0, 0), max_size).fits(first) {
                return Err(PackError::ExceedsMaxSize {
                    index: 0,
                    size: first,
                    max_size,
                });
            }
        }

        // The root starts out exactly as large as the first block, which
        // occupies all of it.
        let mut root = Node::leaf((0, 0), first);
        let placed = root.split(first);
        blocks.place(0, placed.pos);

        for index in 1..num_blocks {
            let size = Self::dimensions(blocks, index)?;

            let placed = match root.insert(size) {
                Some(placed) => {
                    log::trace!("Block {} ({}x{}) fit in free space", index, size.0, size.1);
                    placed
                }
                None => {
                    let growth = self.growth(&root, index, size)?;
                    let (grown_root, placed) = root.grow(size, growth);
                    root = grown_root;

                    log::trace!(
                        "Grew {:?} for block {} ({}x{}), packed area is now {:?}",
                        growth,
                        index,
                        size.0,
                        size.1,
                        root.rect().size
                    );

                    placed
                }
            };

            log::trace!("Placed block {} at {:?}", index, placed.pos);
            blocks.place(index, placed.pos);
        }

        let size = root.rect().size;
        log::debug!(
            "Finished packing {} blocks into {}x{}",
            num_blocks,
            size.0,
            size.1
        );

        Ok(size)
    }

    fn dimensions<P: Packable + ?Sized>(
        blocks: &P,
        index: usize,
    ) -> Result<(u32, u32), PackError> {
        let size = blocks.dimensions(index);

        if size.0 == 0 || size.1 == 0 {
            return Err(PackError::EmptyBlock { index, size });
        }

        Ok(size)
    }

    fn growth(&self, root: &Node, index: usize, size: (u32, u32)) -> Result<Growth, PackError> {
        if let Some(growth) = root.growth(size, self.max_size) {
            return Ok(growth);
        }

        log::trace!("Block {} ({}x{}) cannot be packed", index, size.0, size.1);

        // Tell apart blocks that only fail because of the size limit from
        // blocks that could never be packed in this order.
        match self.max_size {
            Some(max_size) if root.growth(size, None).is_some() => {
                Err(PackError::ExceedsMaxSize {
                    index,
                    size,
                    max_size,
                })
            }
            _ => Err(PackError::Ungrowable {
                index,
                size,
                root: root.rect().size,
            }),
        }
    }
}

/// Adapts a list of `InputItem` values to the `Packable` interface, collecting
/// the placements as `OutputItem` values.
struct ItemBlocks<'a> {
    inputs: &'a [InputItem],
    outputs: Vec<OutputItem>,
}

impl Packable for ItemBlocks<'_> {
    fn count(&self) -> usize {
        self.inputs.len()
    }

    fn dimensions(&self, index: usize) -> (u32, u32) {
        self.inputs[index].size
    }

    fn place(&mut self, index: usize, position: (u32, u32)) {
        debug_assert_eq!(index, self.outputs.len());

        self.outputs.push(OutputItem {
            index,
            rect: Rect::new(position, self.inputs[index].size),
        });
    }
}
