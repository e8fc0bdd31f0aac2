use ahash::AHashMap;
use geo::{Coord, LineString, MultiLineString};

/// Quantization scale for endpoint matching. Arcs decoded from the same
/// topology share bit-identical endpoints, so this only absorbs float noise.
const Q_SCALE: f64 = 1e7;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct QuantizedPoint(pub i64, pub i64);

#[inline]
pub(crate) fn qpt(c: &Coord<f64>) -> QuantizedPoint {
    QuantizedPoint((c.x * Q_SCALE).round() as i64, (c.y * Q_SCALE).round() as i64)
}

struct Fragment {
    coords: Vec<Coord<f64>>,
    start: QuantizedPoint,
    end: QuantizedPoint,
    live: bool,
}

/// Remove `key` from `map` only if it still points at fragment `idx`.
fn unregister(map: &mut AHashMap<QuantizedPoint, usize>, key: QuantizedPoint, idx: usize) {
    if map.get(&key) == Some(&idx) { map.remove(&key); }
}

/// Join directed polylines end-to-start into maximal lines.
///
/// A line is appended to a fragment ending at its start, or prepended to a
/// fragment starting at its end; after either join the fragment on the other
/// side is merged in too. Lines are never reversed, so output direction
/// follows input direction. Output order follows fragment creation order.
pub(crate) fn stitch_lines(lines: Vec<Vec<Coord<f64>>>) -> MultiLineString<f64> {
    let mut fragments: Vec<Fragment> = Vec::new();
    let mut by_start: AHashMap<QuantizedPoint, usize> = AHashMap::new();
    let mut by_end: AHashMap<QuantizedPoint, usize> = AHashMap::new();

    for line in lines {
        let (Some(first), Some(last)) = (line.first(), line.last()) else { continue };
        let (start, end) = (qpt(first), qpt(last));

        if let Some(f) = by_end.get(&start).copied() {
            unregister(&mut by_end, start, f);
            unregister(&mut by_start, fragments[f].start, f);
            fragments[f].coords.extend_from_slice(&line[1..]);
            fragments[f].end = end;

            if let Some(g) = by_start.get(&end).copied().filter(|&g| g != f) {
                unregister(&mut by_start, end, g);
                unregister(&mut by_end, fragments[g].end, g);
                let tail = std::mem::take(&mut fragments[g].coords);
                fragments[g].live = false;
                fragments[f].coords.extend_from_slice(&tail[1..]);
                fragments[f].end = fragments[g].end;
            }

            by_start.insert(fragments[f].start, f);
            by_end.insert(fragments[f].end, f);
        } else if let Some(f) = by_start.get(&end).copied() {
            unregister(&mut by_start, end, f);
            unregister(&mut by_end, fragments[f].end, f);
            let mut coords = line;
            coords.extend_from_slice(&fragments[f].coords[1..]);
            fragments[f].coords = coords;
            fragments[f].start = start;

            if let Some(g) = by_end.get(&start).copied().filter(|&g| g != f) {
                unregister(&mut by_end, start, g);
                unregister(&mut by_start, fragments[g].start, g);
                let mut head = std::mem::take(&mut fragments[g].coords);
                fragments[g].live = false;
                head.extend_from_slice(&fragments[f].coords[1..]);
                fragments[f].coords = head;
                fragments[f].start = fragments[g].start;
            }

            by_start.insert(fragments[f].start, f);
            by_end.insert(fragments[f].end, f);
        } else {
            let idx = fragments.len();
            fragments.push(Fragment { coords: line, start, end, live: true });
            by_start.insert(start, idx);
            by_end.insert(end, idx);
        }
    }

    MultiLineString::new(
        fragments.into_iter()
            .filter(|f| f.live)
            .map(|f| LineString::new(f.coords))
            .collect()
    )
}
