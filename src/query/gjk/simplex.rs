use crate::query::gjk::CSOPoint;
use arrayvec::ArrayVec;

/// The maximum number of vertices of a simplex in 3D.
pub const MAX_SIMPLEX_LEN: usize = 4;

/// A point, segment, triangle or tetrahedron of CSO points.
///
/// Vertices are stored newest first: index 0 is the last pushed vertex, usually called `A`,
/// followed by `B`, `C` and `D`.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    vertices: ArrayVec<CSOPoint, MAX_SIMPLEX_LEN>,
}

impl Simplex {
    /// A simplex with a single vertex.
    pub fn new(point: CSOPoint) -> Self {
        let mut vertices = ArrayVec::new();
        vertices.push(point);
        Self { vertices }
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Does this simplex have no vertex?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertices of this simplex, newest first.
    #[inline]
    pub fn vertices(&self) -> &[CSOPoint] {
        &self.vertices
    }

    /// Adds `point` as the newest vertex, evicting the oldest one if the simplex is full.
    pub fn push(&mut self, point: CSOPoint) {
        if self.vertices.is_full() {
            let _ = self.vertices.pop();
        }

        self.vertices.insert(0, point);
    }

    /// Removes the `i`-th vertex, keeping the order of the others.
    #[inline]
    pub fn remove(&mut self, i: usize) {
        let _ = self.vertices.remove(i);
    }

    /// Swaps the `i`-th and `j`-th vertices.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.vertices.swap(i, j)
    }

    /// Keeps the `len` newest vertices.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.vertices.truncate(len)
    }

    /// The vertex closest to the origin of the CSO.
    pub fn closest_to_origin(&self) -> Option<&CSOPoint> {
        self.vertices.iter().min_by(|a, b| {
            a.point
                .coords
                .norm_squared()
                .total_cmp(&b.point.coords.norm_squared())
        })
    }
}

impl core::ops::Index<usize> for Simplex {
    type Output = CSOPoint;

    #[inline]
    fn index(&self, i: usize) -> &CSOPoint {
        &self.vertices[i]
    }
}
