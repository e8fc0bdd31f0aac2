//! Shared test payloads.

/// Two unit-square counties (ids 1 and 2) inside one state.
///
/// ```text
/// (0,1)---(1,1)---(2,1)
///   |   1   |   2   |
/// (0,0)---(1,0)---(2,0)
/// ```
pub(crate) const TWO_COUNTIES: &str = r#"{
    "type": "Topology",
    "arcs": [
        [[1, 0], [1, 1]],
        [[1, 1], [0, 1], [0, 0], [1, 0]],
        [[1, 0], [2, 0], [2, 1], [1, 1]]
    ],
    "objects": {
        "counties": {"type": "GeometryCollection", "geometries": [
            {"type": "Polygon", "id": 1, "arcs": [[0, 1]]},
            {"type": "Polygon", "id": 2, "arcs": [[2, -1]]}
        ]},
        "states": {"type": "GeometryCollection", "geometries": [
            {"type": "Polygon", "id": 10, "arcs": [[1, 2]]}
        ]}
    }
}"#;

/// Statistics for [`TWO_COUNTIES`].
pub(crate) const TWO_COUNTY_STATS: &str = r#"[
    {"fips": 1, "state": "TS", "area_name": "Low County", "bachelorsOrHigher": 10},
    {"fips": 2, "state": "TS", "area_name": "High County", "bachelorsOrHigher": 90}
]"#;
