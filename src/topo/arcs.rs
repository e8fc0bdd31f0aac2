use geo::Coord;

use super::Topology;

/// Arcs of a topology decoded to absolute coordinates.
#[derive(Clone, Debug, Default)]
pub(crate) struct Arcs(Vec<Vec<Coord<f64>>>);

impl Arcs {
    /// Decode every arc, undoing delta encoding when a transform is present.
    /// Returns `None` if any position has fewer than two components.
    pub(crate) fn decode(topology: &Topology) -> Option<Self> {
        let arcs = topology.arcs.iter()
            .map(|arc| {
                let (mut x, mut y) = (0.0, 0.0);
                arc.iter()
                    .map(|position| {
                        let (&px, &py) = (position.first()?, position.get(1)?);
                        Some(match topology.transform {
                            Some(t) => {
                                x += px;
                                y += py;
                                Coord { x: x * t.scale[0] + t.translate[0], y: y * t.scale[1] + t.translate[1] }
                            }
                            None => Coord { x: px, y: py },
                        })
                    })
                    .collect::<Option<Vec<_>>>()
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self(arcs))
    }

    #[inline] pub(crate) fn len(&self) -> usize { self.0.len() }

    /// Resolve a signed arc reference into its index and direction.
    #[inline]
    pub(crate) fn resolve(&self, arc: i64) -> Option<(usize, bool)> {
        let (index, reversed) = if arc < 0 { (!arc, true) } else { (arc, false) };
        let index = usize::try_from(index).ok()?;
        (index < self.0.len()).then_some((index, reversed))
    }

    /// Coordinates of a signed arc reference, oriented by its sign.
    pub(crate) fn points(&self, arc: i64) -> Option<Vec<Coord<f64>>> {
        let (index, reversed) = self.resolve(arc)?;
        let mut points = self.0[index].clone();
        if reversed { points.reverse() }
        Some(points)
    }

    /// Concatenate arcs into one ring, dropping the shared endpoint between
    /// consecutive arcs. Rings shorter than four points are padded with the
    /// first point so they stay valid closed rings.
    pub(crate) fn ring(&self, arcs: &[i64]) -> Option<Vec<Coord<f64>>> {
        let mut ring: Vec<Coord<f64>> = Vec::new();
        for &arc in arcs {
            let points = self.points(arc)?;
            if !ring.is_empty() { ring.pop(); }
            ring.extend(points);
        }

        if let Some(&first) = ring.first() {
            while ring.len() < 4 { ring.push(first) }
        }
        Some(ring)
    }

    /// Concatenate arcs into one open line.
    pub(crate) fn line(&self, arcs: &[i64]) -> Option<Vec<Coord<f64>>> {
        let mut line: Vec<Coord<f64>> = Vec::new();
        for &arc in arcs {
            let points = self.points(arc)?;
            if !line.is_empty() { line.pop(); }
            line.extend(points);
        }
        Some(line)
    }
}
