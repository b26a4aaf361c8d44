/*!
physkit3d
=========

**physkit3d** is the geometric core of a 3-dimensional rigid-body simulation written with
the rust programming language. It covers:

- triangle-mesh [shapes](shape) viewed over caller-owned vertex and index buffers,
- closed-form [mass properties](mass_properties) (volume, center of mass, inertia tensor),
- a [GJK](query::gjk) intersection test between two shapes,
- a 4-ary [bounds tree](partitioning) used as a broad-phase.

Every operation is synchronous and never spawns threads. Shapes are read-only views and can
be queried from several threads at once. The bounds tree performs no locking: callers
serialize mutations themselves.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod mass_properties;
pub mod math;
pub mod partitioning;
pub mod query;
pub mod shape;
