//! Indexed triangle.

use core::hash::{Hash, Hasher};

/// A triangle referencing three vertices of a vertex buffer by index.
///
/// The winding `first → second → third` defines the outward normal
/// `(v[second] - v[first]) × (v[third] - v[first])`.
///
/// Two triangles compare equal if they reference the same vertices in the same cyclic order,
/// i.e., if one is a rotation of the other. A triangle and its [reversed](Self::reversed)
/// version are not equal.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Triangle {
    /// The index of the first vertex.
    pub first: u32,
    /// The index of the second vertex.
    pub second: u32,
    /// The index of the third vertex.
    pub third: u32,
}

impl Triangle {
    /// Creates a triangle from three vertex indices.
    #[inline]
    pub const fn new(first: u32, second: u32, third: u32) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// The three vertex indices, in winding order.
    #[inline]
    pub const fn indices(&self) -> [u32; 3] {
        [self.first, self.second, self.third]
    }

    /// The same triangle with its winding flipped.
    #[inline]
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.first, self.third, self.second)
    }

    /// Rotates the indices one step to the right: `(a, b, c)` becomes `(c, a, b)`.
    #[inline]
    #[must_use]
    pub const fn right_shift(&self) -> Self {
        Self::new(self.third, self.first, self.second)
    }

    /// Rotates the indices one step to the left: `(a, b, c)` becomes `(b, c, a)`.
    #[inline]
    #[must_use]
    pub const fn left_shift(&self) -> Self {
        Self::new(self.second, self.third, self.first)
    }

    /// Does this triangle reference the vertex `index`?
    #[inline]
    pub fn contains_vertex(&self, index: u32) -> bool {
        self.first == index || self.second == index || self.third == index
    }

    /// The rotation of this triangle that starts with the vertex `index`, if it references it.
    #[inline]
    pub fn starting_at(&self, index: u32) -> Option<Self> {
        if self.first == index {
            Some(*self)
        } else if self.second == index {
            Some(self.left_shift())
        } else if self.third == index {
            Some(self.right_shift())
        } else {
            None
        }
    }

    /// The three directed edges of this triangle, following its winding.
    #[inline]
    pub const fn edges(&self) -> [(u32, u32); 3] {
        [
            (self.first, self.second),
            (self.second, self.third),
            (self.third, self.first),
        ]
    }

    /// Does this triangle reference the same vertex twice?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.first == self.second || self.second == self.third || self.third == self.first
    }

    /// Is `other` a correctly oriented neighbor of `self`?
    ///
    /// This is the case if both triangles share an edge, traversed in opposite directions. A
    /// shared edge traversed in the same direction by both triangles means they have opposite
    /// orientations: use `self.shares_edge_with(&other.reversed())` to detect it.
    pub fn shares_edge_with(&self, other: &Triangle) -> bool {
        self.edges().iter().any(|&(a, b)| {
            other
                .edges()
                .iter()
                .any(|&(other_a, other_b)| a == other_b && b == other_a)
        })
    }

    /// The rotation of `self` with the smallest index first.
    fn canonical(&self) -> [u32; 3] {
        let min = self.first.min(self.second).min(self.third);
        // `min` is always one of the three indices.
        self.starting_at(min).unwrap_or(*self).indices()
    }
}

impl PartialEq for Triangle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state)
    }
}

impl From<[u32; 3]> for Triangle {
    #[inline]
    fn from(idx: [u32; 3]) -> Self {
        Self::new(idx[0], idx[1], idx[2])
    }
}

impl From<Triangle> for [u32; 3] {
    #[inline]
    fn from(tri: Triangle) -> Self {
        tri.indices()
    }
}
