//! Convex polygon geometry and SAT overlap testing
//!
//! A polygon is an ordered sequence of vertices; the last vertex wraps around
//! to the first, and consecutive pairs define the edges used for axis
//! projection. Vertices are expected to be distinct and wound
//! counter-clockwise; `random_regular` produces polygons that satisfy both by
//! construction.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use thiserror::Error;

use crate::array::{ArrayError, DynArray};
use crate::{consts, perp};

/// Failure modes for polygon operations
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Fewer than 3 vertices cannot form an area
    #[error("polygon needs at least 3 vertices, got {0}")]
    Degenerate(usize),
}

/// Ordered vertex sequence forming a convex polygon
#[derive(Debug, Default)]
pub struct Polygon {
    verts: DynArray<Vec2>,
}

impl Polygon {
    /// An empty polygon (no vertices, no allocation)
    pub fn new() -> Self {
        Self {
            verts: DynArray::new(),
        }
    }

    /// Build a polygon from a vertex slice, in order
    pub fn from_vertices(vertices: &[Vec2]) -> Result<Self, ArrayError> {
        let mut verts = DynArray::new();
        verts.reserve(vertices.len())?;
        for &v in vertices {
            verts.push(v)?;
        }
        Ok(Self { verts })
    }

    /// Generate a regular polygon centred on the origin with a uniformly
    /// chosen vertex count, vertices spaced 2π/n apart starting on the
    /// positive x axis and winding counter-clockwise.
    pub fn random_regular(radius: f32, rng: &mut impl Rng) -> Result<Self, ArrayError> {
        let n = rng.random_range(consts::MIN_VERTICES..=consts::MAX_VERTICES);
        let step = TAU / n as f32;

        let mut verts = DynArray::new();
        verts.reserve(n as usize)?;
        let mut angle = 0.0f32;
        for _ in 0..n {
            let (sin, cos) = angle.sin_cos();
            verts.push(Vec2::new(radius * cos, radius * sin))?;
            angle += step;
        }
        Ok(Self { verts })
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// The vertices in winding order
    pub fn vertices(&self) -> &[Vec2] {
        self.verts.as_slice()
    }

    /// Clone the polygon; fails only on allocation
    pub fn try_clone(&self) -> Result<Self, ArrayError> {
        Ok(Self {
            verts: self.verts.try_clone()?,
        })
    }

    /// Overwrite this polygon with `local` rotated by `angle` and translated
    /// by `offset`. Both polygons must have the same vertex count; this is
    /// the world-cache update path where the cache was cloned from the local
    /// shape at creation.
    pub fn set_transformed_from(&mut self, local: &Polygon, angle: f32, offset: Vec2) {
        debug_assert_eq!(self.len(), local.len());
        for (world, &v) in self.verts.iter_mut().zip(local.verts.iter()) {
            *world = crate::rotate(v, angle) + offset;
        }
    }

    /// SAT overlap test against another polygon.
    ///
    /// Projects both vertex sets onto every edge normal of both polygons; a
    /// single axis with disjoint projection intervals proves separation.
    /// Intervals that exactly touch count as separated. Fails if either
    /// polygon has fewer than 3 vertices.
    pub fn overlaps(&self, other: &Polygon) -> Result<bool, GeometryError> {
        let a = self.vertices();
        let b = other.vertices();
        if a.len() < 3 {
            return Err(GeometryError::Degenerate(a.len()));
        }
        if b.len() < 3 {
            return Err(GeometryError::Degenerate(b.len()));
        }
        Ok(!separated_on_edge_axes(a, b) && !separated_on_edge_axes(b, a))
    }
}

/// Test the axes perpendicular to `a`'s edges; true if any axis separates
/// the two vertex sets.
fn separated_on_edge_axes(a: &[Vec2], b: &[Vec2]) -> bool {
    for i in 0..a.len() {
        let edge = a[(i + 1) % a.len()] - a[i];
        // Coincident vertices contribute no usable axis.
        if edge.length_squared() <= f32::EPSILON {
            continue;
        }
        let axis = perp(edge).normalize();

        let (a_min, a_max) = project_interval(axis, a);
        let (b_min, b_max) = project_interval(axis, b);
        if a_max <= b_min || b_max <= a_min {
            return true;
        }
    }
    false
}

/// Project every vertex onto `axis` and return the covered interval
fn project_interval(axis: Vec2, vertices: &[Vec2]) -> (f32, f32) {
    let mut min = axis.dot(vertices[0]);
    let mut max = min;
    for &v in &vertices[1..] {
        let projection = axis.dot(v);
        if projection > max {
            max = projection;
        } else if projection < min {
            min = projection;
        }
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn unit_square(center: Vec2) -> Polygon {
        Polygon::from_vertices(&[
            center + Vec2::new(-0.5, -0.5),
            center + Vec2::new(0.5, -0.5),
            center + Vec2::new(0.5, 0.5),
            center + Vec2::new(-0.5, 0.5),
        ])
        .unwrap()
    }

    #[test]
    fn test_distant_squares_do_not_overlap() {
        let a = unit_square(Vec2::ZERO);
        let b = unit_square(Vec2::new(3.0, 3.0));
        assert!(!a.overlaps(&b).unwrap());
    }

    #[test]
    fn test_close_squares_overlap() {
        let a = unit_square(Vec2::ZERO);
        let b = unit_square(Vec2::new(0.5, 0.0));
        assert!(a.overlaps(&b).unwrap());
    }

    #[test]
    fn test_polygon_overlaps_itself() {
        let a = unit_square(Vec2::ZERO);
        let b = unit_square(Vec2::ZERO);
        assert!(a.overlaps(&b).unwrap());
        assert!(a.overlaps(&a).unwrap());
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = unit_square(Vec2::ZERO);
        for offset in [Vec2::new(0.3, 0.4), Vec2::new(1.7, 0.0), Vec2::new(0.9, 0.9)] {
            let b = unit_square(offset);
            assert_eq!(a.overlaps(&b).unwrap(), b.overlaps(&a).unwrap());
        }
    }

    #[test]
    fn test_touching_edges_count_as_separated() {
        let a = unit_square(Vec2::ZERO);
        let b = unit_square(Vec2::new(1.0, 0.0));
        assert!(!a.overlaps(&b).unwrap());
    }

    #[test]
    fn test_degenerate_polygon_is_an_error() {
        let line = Polygon::from_vertices(&[Vec2::ZERO, Vec2::X]).unwrap();
        let square = unit_square(Vec2::ZERO);
        assert!(matches!(
            line.overlaps(&square),
            Err(GeometryError::Degenerate(2))
        ));
        assert!(matches!(
            square.overlaps(&line),
            Err(GeometryError::Degenerate(2))
        ));
    }

    #[test]
    fn test_random_regular_shape() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            let polygon = Polygon::random_regular(1.0, &mut rng).unwrap();
            let n = polygon.len();
            assert!((3..=10).contains(&n));
            for v in polygon.vertices() {
                assert!((v.length() - 1.0).abs() < 1e-5);
            }
            // First vertex sits on the positive x axis.
            let first = polygon.vertices()[0];
            assert!((first.x - 1.0).abs() < 1e-5 && first.y.abs() < 1e-5);
        }
    }

    #[test]
    fn test_transform_rotates_then_translates() {
        let local = unit_square(Vec2::ZERO);
        let mut world = local.try_clone().unwrap();
        world.set_transformed_from(&local, std::f32::consts::PI, Vec2::new(10.0, 0.0));
        // A half turn maps (0.5, 0.5) to (-0.5, -0.5) before the offset.
        let v = world.vertices()[2];
        assert!((v.x - 9.5).abs() < 1e-5);
        assert!((v.y + 0.5).abs() < 1e-5);
    }
}
