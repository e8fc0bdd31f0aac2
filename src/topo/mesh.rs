use geo::MultiLineString;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{arcs::Arcs, stitch::stitch_lines, Geometry};

/// Which arcs of a layer end up in its mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeshFilter {
    /// Every arc of the layer, once.
    All,
    /// Arcs separating two distinct geometries: borders between states,
    /// without the coastline or national frame.
    #[default]
    Interior,
    /// Arcs on the outer frame (referenced by a single geometry).
    Exterior,
}

impl MeshFilter {
    #[inline]
    fn accepts(self, first: usize, last: usize) -> bool {
        match self {
            MeshFilter::All => true,
            MeshFilter::Interior => first != last,
            MeshFilter::Exterior => first == last,
        }
    }
}

/// Extract the boundary mesh of `layer`: each shared arc is kept at most once
/// (in the direction of its first reference) and kept arcs are stitched into
/// maximal lines. `None` if the layer references an arc that doesn't exist.
pub(crate) fn mesh(arcs: &Arcs, layer: &Geometry, filter: MeshFilter) -> Option<MultiLineString<f64>> {
    // For every arc: (signed reference, owning leaf geometry) in traversal order.
    let mut refs_by_arc: Vec<SmallVec<[(i64, usize); 2]>> = vec![SmallVec::new(); arcs.len()];
    for (geom, leaf) in layer.leaves().into_iter().enumerate() {
        for arc in leaf.arc_refs() {
            let (index, _) = arcs.resolve(arc)?;
            refs_by_arc[index].push((arc, geom));
        }
    }

    let lines = refs_by_arc.iter()
        .filter_map(|refs| {
            let (&(arc, first), &(_, last)) = (refs.first()?, refs.last()?);
            filter.accepts(first, last).then_some(arc)
        })
        .map(|arc| arcs.points(arc))
        .collect::<Option<Vec<_>>>()?;

    Some(stitch_lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topo::Topology;

    /// Two states (unit squares) sharing the arc x = 1.
    fn states() -> (Topology, Arcs) {
        let topology = Topology::from_json_str(r#"{
            "type": "Topology",
            "arcs": [
                [[1, 0], [1, 1]],
                [[1, 1], [0, 1], [0, 0], [1, 0]],
                [[1, 0], [2, 0], [2, 1], [1, 1]]
            ],
            "objects": {
                "states": {"type": "GeometryCollection", "geometries": [
                    {"type": "Polygon", "id": "A", "arcs": [[0, 1]]},
                    {"type": "Polygon", "id": "B", "arcs": [[2, -1]]}
                ]}
            }
        }"#).unwrap();
        let arcs = Arcs::decode(&topology).unwrap();
        (topology, arcs)
    }

    fn total_length(lines: &MultiLineString<f64>) -> f64 {
        lines.0.iter()
            .flat_map(|line| line.lines())
            .map(|segment| segment.dx().hypot(segment.dy()))
            .sum()
    }

    #[test]
    fn interior_keeps_only_shared_arcs() {
        let (topology, arcs) = states();
        let lines = mesh(&arcs, topology.object("states").unwrap(), MeshFilter::Interior).unwrap();
        assert_eq!(lines.0.len(), 1);
        assert!((total_length(&lines) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn exterior_keeps_only_frame_arcs() {
        let (topology, arcs) = states();
        let lines = mesh(&arcs, topology.object("states").unwrap(), MeshFilter::Exterior).unwrap();
        // Frame arcs meet at (1,0) and (1,1), so they stitch into one closed loop.
        assert_eq!(lines.0.len(), 1);
        assert!((total_length(&lines) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn all_draws_each_arc_once() {
        let (topology, arcs) = states();
        let lines = mesh(&arcs, topology.object("states").unwrap(), MeshFilter::All).unwrap();
        assert!((total_length(&lines) - 7.0).abs() < 1e-12);
    }
}
