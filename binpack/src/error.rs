use thiserror::Error;

/// The reasons a packing run can fail. Any of these aborts the whole run; no
/// partial layout is usable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackError {
    #[error(
        "block {index} of size {size:?} is wider and taller than the packed area {root:?}, \
         sort blocks by decreasing max(width, height) to avoid this"
    )]
    Ungrowable {
        index: usize,
        size: (u32, u32),
        root: (u32, u32),
    },

    #[error("block {index} has an empty size {size:?}")]
    EmptyBlock { index: usize, size: (u32, u32) },

    #[error(
        "block {index} of size {size:?} cannot be packed without exceeding the maximum size {max_size:?}"
    )]
    ExceedsMaxSize {
        index: usize,
        size: (u32, u32),
        max_size: (u32, u32),
    },
}

impl PackError {
    /// The index of the block that could not be packed.
    pub fn index(&self) -> usize {
        match self {
            PackError::Ungrowable { index, .. }
            | PackError::EmptyBlock { index, .. }
            | PackError::ExceedsMaxSize { index, .. } => *index,
        }
    }
}
