//! Binpack is a small library for packing rectangles into a single area that
//! grows as rectangles are added. It's meant for building texture atlases and
//! tilesets, where the final image size isn't known up front.
//!
//! The packer keeps a binary tree of free space. The area starts out as large
//! as the first block and, whenever a block fits nowhere, is extended either to
//! the right or downwards, whichever keeps it closer to a square. Blocks that
//! were already placed never move.
//!
//! Blocks are packed in the order they're given. For good results, and to make
//! sure packing can't fail, sort them by decreasing `max(width, height)` first,
//! for example with [`sort_by_max_side`][sort_by_max_side].
//!
//! ## Example
//! ```
//! use binpack::{sort_by_max_side, GrowingPacker, InputItem};
//!
//! # fn main() -> Result<(), binpack::PackError> {
//! let mut items = vec![
//!     InputItem::new((64, 64)),
//!     InputItem::new((128, 64)),
//!     InputItem::new((1, 100)),
//! ];
//! sort_by_max_side(&mut items);
//!
//! let output = GrowingPacker::new().pack(items)?;
//! assert_eq!(output.size(), (128, 164));
//!
//! for item in output.items() {
//!     println!("{:?} goes at {:?}", item.size(), item.position());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Collections that already own their blocks can implement
//! [`Packable`][Packable] and be passed to [`pack`][pack] directly, which
//! writes positions back through [`Packable::place`].
//!
//! [sort_by_max_side]: fn.sort_by_max_side.html
//! [Packable]: trait.Packable.html
//! [pack]: fn.pack.html

mod error;
mod geometry;
mod node;
mod packer;
mod types;

pub use error::*;
pub use geometry::Rect;
pub use packer::*;
pub use types::*;
