use geo::{LineString, MultiPolygon, Polygon};
use tracing::debug;

use crate::stats::RegionId;

use super::{arcs::Arcs, Geometry, GeometryKind};

/// A drawable fine region: its id and planar boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionShape {
    /// `None` for a feature without an id; it is drawn but never joined.
    pub id: Option<RegionId>,
    pub geometry: MultiPolygon<f64>,
}

/// Build a polygon from arc-referenced rings (first ring is the exterior).
fn polygon(arcs: &Arcs, rings: &[Vec<i64>]) -> Option<Option<Polygon<f64>>> {
    let mut rings = rings.iter()
        .map(|ring| arcs.ring(ring).map(LineString::new))
        .collect::<Option<Vec<_>>>()?
        .into_iter();

    Some(rings.next().map(|exterior| Polygon::new(exterior, rings.collect())))
}

/// Expand one geometry into polygons. `None` means a dangling arc reference.
fn polygons(arcs: &Arcs, geometry: &Geometry) -> Option<Vec<Polygon<f64>>> {
    match &geometry.kind {
        GeometryKind::Polygon { arcs: rings } => Some(polygon(arcs, rings)?.into_iter().collect()),
        GeometryKind::MultiPolygon { arcs: polys } => {
            let mut out = Vec::with_capacity(polys.len());
            for rings in polys {
                out.extend(polygon(arcs, rings)?);
            }
            Some(out)
        }
        GeometryKind::GeometryCollection { geometries } => {
            let mut out = Vec::new();
            for child in geometries {
                out.extend(polygons(arcs, child)?);
            }
            Some(out)
        }
        GeometryKind::LineString { .. }
        | GeometryKind::MultiLineString { .. }
        | GeometryKind::Point { .. }
        | GeometryKind::MultiPoint { .. }
        | GeometryKind::Null => Some(Vec::new()),
    }
}

/// Expand every feature of `layer` into a [`RegionShape`], in declaration
/// order, one shape per feature. Features without an id or with a null
/// geometry still get a (possibly empty) shape; a dangling arc reference
/// anywhere in the layer makes the whole layer malformed (`None`).
pub(crate) fn features(arcs: &Arcs, layer: &Geometry) -> Option<Vec<RegionShape>> {
    let members: Vec<&Geometry> = match &layer.kind {
        GeometryKind::GeometryCollection { geometries } => geometries.iter().collect(),
        _ => vec![layer],
    };

    let mut shapes = Vec::with_capacity(members.len());
    for member in members {
        let parts = polygons(arcs, member)?;
        if member.id.is_none() {
            debug!(index = shapes.len(), "feature without an id");
        }
        shapes.push(RegionShape { id: member.id.clone(), geometry: MultiPolygon::new(parts) });
    }
    Some(shapes)
}
