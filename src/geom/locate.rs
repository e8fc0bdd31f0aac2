use geo::{BoundingRect, Contains, MultiPolygon, Point};
use rstar::{RTree, AABB};

use super::RegionEnvelope;

/// Point-in-region lookup over screen-space region shapes.
#[derive(Debug, Clone)]
pub struct RegionLocator {
    shapes: Vec<MultiPolygon<f64>>,
    rtree: RTree<RegionEnvelope>,
}

impl Default for RegionLocator {
    fn default() -> Self {
        Self { shapes: Vec::new(), rtree: RTree::new() }
    }
}

impl RegionLocator {
    /// Index `shapes` by position; empty shapes are never hit.
    pub fn new(shapes: Vec<MultiPolygon<f64>>) -> Self {
        Self {
            rtree: RTree::bulk_load(
                shapes.iter().enumerate()
                    .filter_map(|(i, shape)| shape.bounding_rect().map(|rect| RegionEnvelope::new(i, rect)))
                    .collect()
            ),
            shapes,
        }
    }

    #[inline] pub fn len(&self) -> usize { self.shapes.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.shapes.is_empty() }

    /// Index of the region containing `(x, y)`. Overlaps resolve to the
    /// region drawn last, matching what the pointer sees on screen.
    pub fn locate(&self, x: f64, y: f64) -> Option<usize> {
        let point = Point::new(x, y);
        self.rtree.locate_in_envelope_intersecting(&AABB::from_point([x, y]))
            .map(|candidate| candidate.region())
            .filter(|&i| self.shapes[i].contains(&point))
            .max()
    }
}
