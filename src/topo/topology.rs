use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

use crate::stats::RegionId;

/// A TopoJSON document: shared arcs plus named geometry layers.
#[derive(Clone, Debug, Deserialize)]
pub struct Topology {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub transform: Option<Transform>,
    #[serde(default)]
    pub bbox: Option<Vec<f64>>,
    pub arcs: Vec<Vec<Vec<f64>>>,
    pub objects: BTreeMap<String, Geometry>,
}

/// Quantization transform: positions are delta-encoded integers to be
/// scaled and translated back into source coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Clone, Debug)]
pub struct Geometry {
    pub id: Option<RegionId>,
    pub kind: GeometryKind,
}

/// A geometry whose `type` is `null` (or absent) is a [`GeometryKind::Null`].
impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = Value::deserialize(deserializer)?;
        let id = match value.get_mut("id").map(Value::take) {
            Some(id) => Option::<RegionId>::deserialize(id).map_err(D::Error::custom)?,
            None => None,
        };
        let kind = match value.get("type") {
            None | Some(Value::Null) => GeometryKind::Null,
            Some(_) => GeometryKind::deserialize(value).map_err(D::Error::custom)?,
        };
        Ok(Self { id, kind })
    }
}

/// Geometry variants; arc references are signed (`!i` means arc `i` reversed).
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum GeometryKind {
    GeometryCollection { geometries: Vec<Geometry> },
    Polygon { arcs: Vec<Vec<i64>> },
    MultiPolygon { arcs: Vec<Vec<Vec<i64>>> },
    LineString { arcs: Vec<i64> },
    MultiLineString { arcs: Vec<Vec<i64>> },
    Point { coordinates: Vec<f64> },
    MultiPoint { coordinates: Vec<Vec<f64>> },
    /// A feature with no geometry.
    #[serde(skip)]
    Null,
}

impl Topology {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("[io::json] Failed to parse topology")
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).context("[io::json] Failed to parse topology")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[io::json] Failed to open topology file {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[io::json] Failed to parse topology file {}", path.display()))
    }

    /// Look up a named layer.
    #[inline]
    pub fn object(&self, name: &str) -> Option<&Geometry> { self.objects.get(name) }
}

impl Geometry {
    /// Leaf geometries in declaration order (collections are flattened).
    pub(crate) fn leaves(&self) -> Vec<&Geometry> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Geometry>) {
        match &self.kind {
            GeometryKind::GeometryCollection { geometries } => {
                geometries.iter().for_each(|g| g.collect_leaves(out));
            }
            _ => out.push(self),
        }
    }

    /// Every signed arc reference of this geometry, in traversal order.
    pub(crate) fn arc_refs(&self) -> Vec<i64> {
        match &self.kind {
            GeometryKind::GeometryCollection { geometries } => {
                geometries.iter().flat_map(|g| g.arc_refs()).collect()
            }
            GeometryKind::Polygon { arcs } | GeometryKind::MultiLineString { arcs } => {
                arcs.iter().flatten().copied().collect()
            }
            GeometryKind::MultiPolygon { arcs } => {
                arcs.iter().flatten().flatten().copied().collect()
            }
            GeometryKind::LineString { arcs } => arcs.clone(),
            GeometryKind::Point { .. }
            | GeometryKind::MultiPoint { .. }
            | GeometryKind::Null => Vec::new(),
        }
    }
}
