//! The free-space tree that backs the growing packer.
//!
//! Every node covers a rectangle of the packed area. Leaves are free space.
//! Split nodes hold a placed block in their top-left corner and own the two
//! leftover strips: `right` is the strip beside the block, only as tall as the
//! block, and `down` is the strip below it, spanning the node's full width.

use crate::geometry::Rect;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    rect: Rect,
    children: Option<Box<Children>>,
}

#[derive(Debug, Clone)]
struct Children {
    right: Node,
    down: Node,
}

/// Which edge of the packed area gets extended to make room for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Growth {
    Right,
    Down,
}

impl Node {
    pub fn leaf(pos: (u32, u32), size: (u32, u32)) -> Self {
        Self {
            rect: Rect::new(pos, size),
            children: None,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Finds the first free leaf that can hold `size`, visiting the `right`
    /// subtree of every split node before its `down` subtree.
    ///
    /// Packing results depend on this exact visiting order.
    pub fn find(&mut self, size: (u32, u32)) -> Option<&mut Node> {
        if self.is_leaf() {
            return if self.rect.fits(size) {
                Some(self)
            } else {
                None
            };
        }

        let Children { right, down } = self.children.as_deref_mut()?;
        match right.find(size) {
            Some(found) => Some(found),
            None => down.find(size),
        }
    }

    /// Occupies the top-left `size` corner of this leaf and returns the
    /// rectangle handed out for it.
    ///
    /// The leaf must be able to hold `size`.
    pub fn split(&mut self, size: (u32, u32)) -> Rect {
        debug_assert!(self.is_leaf(), "split called on an occupied node");
        debug_assert!(self.rect.fits(size), "split called with an oversized block");

        let Rect {
            pos: (x, y),
            size: (width, height),
        } = self.rect;

        let right = Node::leaf((x + size.0, y), (width - size.0, size.1));
        let down = Node::leaf((x, y + size.1), (width, height - size.1));

        self.children = Some(Box::new(Children { right, down }));

        Rect::new(self.rect.pos, size)
    }

    /// Places `size` into existing free space, if any leaf is large enough.
    pub fn insert(&mut self, size: (u32, u32)) -> Option<Rect> {
        self.find(size).map(|leaf| leaf.split(size))
    }

    /// Picks the edge to extend so that a block of `size` fits, trying to keep
    /// the packed area roughly square. Only this node's own dimensions are
    /// considered, so it should be called on the root.
    ///
    /// Growing in a direction is only possible when the block is no larger
    /// than the root along the other axis, and when the grown root stays
    /// within `max_size`, if given.
    pub fn growth(&self, size: (u32, u32), max_size: Option<(u32, u32)>) -> Option<Growth> {
        let (width, height) = self.rect.size;
        let (max_width, max_height) = max_size.unwrap_or((u32::MAX, u32::MAX));

        let grown_width = width.checked_add(size.0).filter(|&w| w <= max_width);
        let grown_height = height.checked_add(size.1).filter(|&h| h <= max_height);

        let can_grow_down = size.0 <= width && grown_height.is_some();
        let can_grow_right = size.1 <= height && grown_width.is_some();

        // Prefer widening when the area is much taller than it is wide, and the
        // other way around.
        let should_grow_right = can_grow_right && grown_width.map_or(false, |w| height >= w);
        let should_grow_down = can_grow_down && grown_height.map_or(false, |h| width >= h);

        if should_grow_right {
            Some(Growth::Right)
        } else if should_grow_down {
            Some(Growth::Down)
        } else if can_grow_right {
            Some(Growth::Right)
        } else if can_grow_down {
            Some(Growth::Down)
        } else {
            None
        }
    }

    /// Wraps this root in a larger one, extended along `growth` by exactly the
    /// block's extent, and places the block in the new strip.
    ///
    /// The old tree keeps its coordinates. `growth` must come from
    /// [`Node::growth`] for the same `size`, and no leaf in the old tree may be
    /// able to hold `size`.
    pub fn grow(self, size: (u32, u32), growth: Growth) -> (Node, Rect) {
        let (width, height) = self.rect.size;

        let (rect, mut children) = match growth {
            Growth::Right => {
                let strip = Node::leaf((width, 0), (size.0, height));
                let children = Children {
                    right: strip,
                    down: self,
                };

                (Rect::new((0, 0), (width + size.0, height)), children)
            }
            Growth::Down => {
                let strip = Node::leaf((0, height), (width, size.1));
                let children = Children {
                    right: self,
                    down: strip,
                };

                (Rect::new((0, 0), (width, height + size.1)), children)
            }
        };

        // The fresh strip is the first leaf a search of the new root would
        // reach that can hold the block.
        let placed = match growth {
            Growth::Right => children.right.split(size),
            Growth::Down => children.down.split(size),
        };

        let root = Node {
            rect,
            children: Some(Box::new(children)),
        };

        (root, placed)
    }
}
