use crate::bounding_volume::{BoundingBox, BoundingSphere, Bounds};
use crate::mass_properties::MassPropertiesError;
use crate::math::{CFrame, GlobalCFrame, Point, Real, Rotation, Vector};
use crate::shape::{SupportMap, Triangle};
use std::borrow::Cow;
use std::collections::HashMap;

/// Indicates an inconsistency in the topology of a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// Found a triangle with two or three identical vertices.
    #[error("the triangle {0} has at least two identical vertices.")]
    BadTriangle(u32),
    /// Two triangles traverse the same edge in the same direction.
    ///
    /// Either they are adjacent with inconsistent windings, or the edge is shared by more
    /// than two triangles.
    #[error("the triangles {triangle1} and {triangle2} traverse the edge {edge:?} in the same direction.")]
    BadAdjacentTrianglesOrientation {
        /// The first triangle traversing `edge`.
        triangle1: u32,
        /// The second triangle traversing `edge`.
        triangle2: u32,
        /// The edge shared between the two triangles.
        edge: (u32, u32),
    },
    /// An edge isn't traversed in the opposite direction by any other triangle: the mesh isn't
    /// closed.
    #[error("the edge {edge:?} of the triangle {triangle} has no adjacent triangle.")]
    MissingAdjacentTriangle {
        /// The triangle owning the edge.
        triangle: u32,
        /// The unmatched edge.
        edge: (u32, u32),
    },
}

/// Error raised while building a shape or one of its transformed views.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A shape must contain at least one vertex.
    #[error("a shape must contain at least one vertex.")]
    EmptyVertices,
    /// A shape must contain at least one triangle.
    #[error("a shape must contain at least one triangle.")]
    EmptyTriangles,
    /// A triangle references a vertex past the end of the vertex buffer.
    #[error("the triangle {triangle} references the vertex {index} which doesn't exist.")]
    IndexOutOfBounds {
        /// The offending triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
    },
    /// The number of normals provided doesn't match the number of vertices.
    #[error("expected {expected} normals, found {found}.")]
    NormalCountMismatch {
        /// The number of vertices.
        expected: usize,
        /// The number of normals provided.
        found: usize,
    },
    /// An output vertex buffer doesn't have the same length as the source vertex buffer.
    #[error("the output buffer must hold exactly {expected} vertices, found {found}.")]
    BufferLengthMismatch {
        /// The number of vertices of the source shape.
        expected: usize,
        /// The length of the output buffer.
        found: usize,
    },
    /// The shape's mass properties needed for the operation are undefined.
    #[error(transparent)]
    MassProperties(#[from] MassPropertiesError),
}

/// A triangle mesh viewing caller-owned vertex and index buffers.
///
/// The shape never owns its vertices nor its triangles. Per-vertex normals are computed on
/// construction unless the caller provides them with [`Shape::with_normals`].
///
/// Mass properties, [point containment](Shape::contains_point) and volume-related queries are
/// only meaningful if the mesh is a closed, consistently oriented manifold (see
/// [`Shape::validate`]). This is a precondition and is not checked by the queries themselves.
#[derive(Clone, Debug)]
pub struct Shape<'a> {
    vertices: &'a [Point<Real>],
    triangles: &'a [Triangle],
    normals: Cow<'a, [Vector<Real>]>,
}

impl<'a> Shape<'a> {
    /// Creates a shape over the given buffers and computes its vertex normals.
    pub fn new(vertices: &'a [Point<Real>], triangles: &'a [Triangle]) -> Result<Self, ShapeError> {
        check_buffers(vertices, triangles)?;
        let normals = compute_normals(vertices, triangles);
        Ok(Self {
            vertices,
            triangles,
            normals: Cow::Owned(normals),
        })
    }

    /// Creates a shape over the given buffers, reusing precomputed vertex normals.
    pub fn with_normals(
        vertices: &'a [Point<Real>],
        triangles: &'a [Triangle],
        normals: &'a [Vector<Real>],
    ) -> Result<Self, ShapeError> {
        check_buffers(vertices, triangles)?;

        if normals.len() != vertices.len() {
            return Err(ShapeError::NormalCountMismatch {
                expected: vertices.len(),
                found: normals.len(),
            });
        }

        Ok(Self {
            vertices,
            triangles,
            normals: Cow::Borrowed(normals),
        })
    }

    /// The vertex buffer of this shape.
    #[inline]
    pub fn vertices(&self) -> &'a [Point<Real>] {
        self.vertices
    }

    /// The index buffer of this shape.
    #[inline]
    pub fn triangles(&self) -> &'a [Triangle] {
        self.triangles
    }

    /// The unit normal of each vertex.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// Recomputes the vertex normals from the current vertex positions.
    ///
    /// Each vertex normal is the sum of the normals of its incident triangles, weighted by
    /// the angle these triangles subtend at the vertex, then normalized. Vertices without
    /// any non-degenerate incident triangle get a zero normal.
    pub fn compute_normals(&self) -> Vec<Vector<Real>> {
        compute_normals(self.vertices, self.triangles)
    }

    /// The three vertices of the `i`-th triangle.
    #[inline]
    pub fn triangle_vertices(&self, i: usize) -> [Point<Real>; 3] {
        let tri = &self.triangles[i];
        [
            self.vertices[tri.first as usize],
            self.vertices[tri.second as usize],
            self.vertices[tri.third as usize],
        ]
    }

    /// The non-normalized normal of the `i`-th triangle.
    ///
    /// Its length is twice the triangle area.
    #[inline]
    pub fn triangle_normal(&self, i: usize) -> Vector<Real> {
        let [a, b, c] = self.triangle_vertices(i);
        (b - a).cross(&(c - a))
    }

    /// The vertex of this shape with the largest dot product with `dir`.
    ///
    /// Ties are resolved in favor of the first vertex of the buffer.
    pub fn furthest_in_direction(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut best = self.vertices[0];
        let mut best_dot = best.coords.dot(dir);

        for pt in &self.vertices[1..] {
            let dot = pt.coords.dot(dir);
            if dot > best_dot {
                best = *pt;
                best_dot = dot;
            }
        }

        best
    }

    /// The local-space axis-aligned bounding box of this shape.
    #[inline]
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertices)
    }

    /// The world-space bounds of this shape placed in the world by `frame`.
    pub fn world_bounds(&self, frame: &GlobalCFrame) -> Bounds {
        Bounds::from_positions(self.vertices.iter().map(|pt| frame.local_to_global(pt)))
    }

    /// The sphere circumscribing the bounding box of this shape.
    pub fn circumscribed_sphere(&self) -> BoundingSphere {
        let bounds = self.bounds();
        BoundingSphere::new(bounds.center(), bounds.half_extents().norm())
    }

    /// Checks that this shape is a closed, consistently oriented manifold.
    ///
    /// Every edge must be traversed exactly once in each direction. Returns the first
    /// violation found.
    pub fn validate(&self) -> Result<(), TopologyError> {
        let mut edge_owners = HashMap::with_capacity(self.triangles.len() * 3);

        for (tid, tri) in self.triangles.iter().enumerate() {
            if tri.is_degenerate() {
                return Err(TopologyError::BadTriangle(tid as u32));
            }

            for edge in tri.edges() {
                if let Some(existing) = edge_owners.insert(edge, tid as u32) {
                    // Two triangles traversing the same edge in the same direction.
                    return Err(TopologyError::BadAdjacentTrianglesOrientation {
                        triangle1: existing,
                        triangle2: tid as u32,
                        edge,
                    });
                }
            }
        }

        for (tid, tri) in self.triangles.iter().enumerate() {
            for (a, b) in tri.edges() {
                if !edge_owners.contains_key(&(b, a)) {
                    return Err(TopologyError::MissingAdjacentTriangle {
                        triangle: tid as u32,
                        edge: (a, b),
                    });
                }
            }
        }

        Ok(())
    }

    /// Is this shape a closed, consistently oriented manifold?
    ///
    /// Logs the first violation found, if any.
    pub fn is_valid(&self) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Invalid shape: {}", err);
                false
            }
        }
    }

    /// This shape translated by `offset`, with its vertices written to `buf`.
    pub fn translated<'b>(
        &self,
        offset: &Vector<Real>,
        buf: &'b mut [Point<Real>],
    ) -> Result<Shape<'b>, ShapeError>
    where
        'a: 'b,
    {
        self.mapped(buf, |pt| pt + offset, self.normals.clone())
    }

    /// This shape rotated by `rotation` about the local origin, with its vertices written
    /// to `buf`.
    pub fn rotated<'b>(
        &self,
        rotation: &Rotation<Real>,
        buf: &'b mut [Point<Real>],
    ) -> Result<Shape<'b>, ShapeError>
    where
        'a: 'b,
    {
        let normals = self.normals.iter().map(|n| rotation * n).collect();
        self.mapped(buf, |pt| rotation * pt, Cow::Owned(normals))
    }

    /// This shape expressed in the global space of `frame`, its vertices being expressed in
    /// the local space of `frame`.
    pub fn local_to_global<'b>(
        &self,
        frame: &CFrame,
        buf: &'b mut [Point<Real>],
    ) -> Result<Shape<'b>, ShapeError>
    where
        'a: 'b,
    {
        let normals = self
            .normals
            .iter()
            .map(|n| frame.local_to_relative(n))
            .collect();
        self.mapped(buf, |pt| frame.local_to_global(pt), Cow::Owned(normals))
    }

    /// This shape expressed in the local space of `frame`, its vertices being expressed in
    /// the global space of `frame`.
    pub fn global_to_local<'b>(
        &self,
        frame: &CFrame,
        buf: &'b mut [Point<Real>],
    ) -> Result<Shape<'b>, ShapeError>
    where
        'a: 'b,
    {
        let normals = self
            .normals
            .iter()
            .map(|n| frame.relative_to_local(n))
            .collect();
        self.mapped(buf, |pt| frame.global_to_local(pt), Cow::Owned(normals))
    }

    /// Writes the image of every vertex by `map` to `buf` and builds a shape sharing the
    /// triangles of `self`.
    fn mapped<'b>(
        &self,
        buf: &'b mut [Point<Real>],
        map: impl Fn(&Point<Real>) -> Point<Real>,
        normals: Cow<'b, [Vector<Real>]>,
    ) -> Result<Shape<'b>, ShapeError>
    where
        'a: 'b,
    {
        if buf.len() != self.vertices.len() {
            return Err(ShapeError::BufferLengthMismatch {
                expected: self.vertices.len(),
                found: buf.len(),
            });
        }

        for (out, pt) in buf.iter_mut().zip(self.vertices) {
            *out = map(pt);
        }

        Ok(Shape {
            vertices: buf,
            triangles: self.triangles,
            normals,
        })
    }
}

impl SupportMap for Shape<'_> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.furthest_in_direction(dir)
    }
}

fn check_buffers(vertices: &[Point<Real>], triangles: &[Triangle]) -> Result<(), ShapeError> {
    if vertices.is_empty() {
        return Err(ShapeError::EmptyVertices);
    }

    if triangles.is_empty() {
        return Err(ShapeError::EmptyTriangles);
    }

    let len = vertices.len();

    for (tid, tri) in triangles.iter().enumerate() {
        if let Some(index) = tri.indices().into_iter().find(|i| *i as usize >= len) {
            return Err(ShapeError::IndexOutOfBounds {
                triangle: tid as u32,
                index,
            });
        }
    }

    Ok(())
}

fn compute_normals(vertices: &[Point<Real>], triangles: &[Triangle]) -> Vec<Vector<Real>> {
    let mut normals = vec![Vector::zeros(); vertices.len()];

    for tri in triangles {
        let idx = tri.indices();
        let pts = idx.map(|i| vertices[i as usize]);
        let cross = (pts[1] - pts[0]).cross(&(pts[2] - pts[0]));
        let area2 = cross.norm();

        if area2 == 0.0 {
            continue;
        }

        let normal = cross / area2;

        for k in 0..3 {
            let e1 = pts[(k + 1) % 3] - pts[k];
            let e2 = pts[(k + 2) % 3] - pts[k];
            // The cross product of any two edges has the same norm.
            let sin = (area2 / (e1.norm() * e2.norm())).min(1.0);
            normals[idx[k] as usize] += normal * sin.asin();
        }
    }

    for n in &mut normals {
        *n = n.try_normalize(0.0).unwrap_or_else(Vector::zeros);
    }

    normals
}
