use std::fmt::Write;

use geo::{Coord, CoordsIter, LineString, MapCoords, MultiLineString, MultiPolygon};

use super::Projection;

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
pub fn multipolygon_to_path(shape: &MultiPolygon<f64>, project: &dyn Projection) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        push_line(&mut out, polygon.exterior(), project, true);
        for interior in polygon.interiors() {
            push_line(&mut out, interior, project, true);
        }
    }

    out.trim_start().to_string()
}

/// Build an open SVG path string for each line of a mesh.
pub fn multilinestring_to_path(lines: &MultiLineString<f64>, project: &dyn Projection) -> String {
    let mut out = String::new();
    for line in &lines.0 {
        push_line(&mut out, line, project, false);
    }
    out.trim_start().to_string()
}

/// Project a shape into screen space, for hit testing against pointer positions.
pub fn project_multipolygon(shape: &MultiPolygon<f64>, project: &dyn Projection) -> MultiPolygon<f64> {
    shape.map_coords(|coord| {
        let (x, y) = project.project(&coord);
        Coord { x, y }
    })
}

fn push_line(out: &mut String, line: &LineString<f64>, project: &dyn Projection, close: bool) {
    let mut coords = line.coords_iter()
        .map(|coord| project.project(&coord));
    if let Some((x, y)) = coords.next() {
        let _ = write!(out, " M{x:.3},{y:.3}");
        for (x, y) in coords {
            let _ = write!(out, " L{x:.3},{y:.3}");
        }
        if close { out.push('Z') }
    }
}
