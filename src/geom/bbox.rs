use geo::Rect;
use rstar::{RTreeObject, AABB};

/// R-tree entry: the screen-space envelope of the region drawn at `region`.
#[derive(Debug, Clone)]
pub(super) struct RegionEnvelope {
    region: usize,
    envelope: AABB<[f64; 2]>,
}

impl RegionEnvelope {
    pub(super) fn new(region: usize, rect: Rect<f64>) -> Self {
        Self { region, envelope: AABB::from_corners(rect.min().into(), rect.max().into()) }
    }

    #[inline] pub(super) fn region(&self) -> usize { self.region }
}

impl RTreeObject for RegionEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope { self.envelope }
}
