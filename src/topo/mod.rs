//! TopoJSON decoding: fine-region shapes and the dissolved coarse outline.

mod arcs;
mod feature;
mod mesh;
mod stitch;
mod topology;

use geo::{BoundingRect, Coord, MultiLineString, Rect};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use feature::RegionShape;
pub use mesh::MeshFilter;
pub use topology::{Geometry, GeometryKind, Topology, Transform};

use arcs::Arcs;

/// Names of the two layers a choropleth topology must carry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerNames {
    /// Fine regions, one filled path each.
    pub regions: String,
    /// Coarse regions, drawn only as an outline.
    pub outline: String,
}

impl Default for LayerNames {
    fn default() -> Self {
        Self { regions: "counties".to_string(), outline: "states".to_string() }
    }
}

/// Drawable geometry derived from one topology payload.
#[derive(Clone, Debug)]
pub struct RegionGeometry {
    pub regions: Vec<RegionShape>,
    pub outline: MultiLineString<f64>,
}

impl RegionGeometry {
    /// Bounding rectangle over regions and outline.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.regions.iter()
            .filter_map(|shape| shape.geometry.bounding_rect())
            .chain(self.outline.bounding_rect())
            .reduce(|a, b| Rect::new(
                Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            ))
    }
}

/// Expand the region layer and extract the outline mesh.
///
/// Returns `None` (map not ready) when either layer is missing, an arc
/// position or reference is malformed, or the region layer yields no shapes.
pub fn build_geometry(topology: &Topology, layers: &LayerNames, outline_filter: MeshFilter) -> Option<RegionGeometry> {
    let Some(region_layer) = topology.object(&layers.regions) else {
        warn!(layer = %layers.regions, "topology is missing the region layer");
        return None;
    };
    let Some(outline_layer) = topology.object(&layers.outline) else {
        warn!(layer = %layers.outline, "topology is missing the outline layer");
        return None;
    };

    let Some(arcs) = Arcs::decode(topology) else {
        warn!("topology has malformed arc positions");
        return None;
    };

    let Some(regions) = feature::features(&arcs, region_layer) else {
        warn!(layer = %layers.regions, "region layer references missing arcs");
        return None;
    };
    if regions.is_empty() {
        warn!(layer = %layers.regions, "region layer has no drawable features");
        return None;
    }

    let Some(outline) = mesh::mesh(&arcs, outline_layer, outline_filter) else {
        warn!(layer = %layers.outline, "outline layer references missing arcs");
        return None;
    };

    debug!(regions = regions.len(), outline_lines = outline.0.len(), "expanded topology");
    Some(RegionGeometry { regions, outline })
}
