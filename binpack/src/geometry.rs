/// An axis-aligned rectangle in packing space, anchored at its top-left
/// corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub pos: (u32, u32),
    pub size: (u32, u32),
}

impl Rect {
    #[inline]
    pub fn new(pos: (u32, u32), size: (u32, u32)) -> Self {
        Self { pos, size }
    }

    /// The exclusive bottom-right corner.
    #[inline]
    pub fn max(&self) -> (u32, u32) {
        (self.pos.0 + self.size.0, self.pos.1 + self.size.1)
    }

    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.size.0) * u64::from(self.size.1)
    }

    /// Tells whether `size` could be carved out of this rectangle.
    #[inline]
    pub fn fits(&self, size: (u32, u32)) -> bool {
        size.0 <= self.size.0 && size.1 <= self.size.1
    }

    /// Tells whether `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        let (max_x, max_y) = self.max();
        let (other_max_x, other_max_y) = other.max();

        other.pos.0 >= self.pos.0
            && other.pos.1 >= self.pos.1
            && other_max_x <= max_x
            && other_max_y <= max_y
    }

    /// Tells whether the two rectangles share any area. Rectangles that only
    /// touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (max_x, max_y) = self.max();
        let (other_max_x, other_max_y) = other.max();

        let x_overlap = self.pos.0 < other_max_x && other.pos.0 < max_x;
        let y_overlap = self.pos.1 < other_max_y && other.pos.1 < max_y;

        x_overlap && y_overlap
    }
}
