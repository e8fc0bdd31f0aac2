use std::{fs::File, io::BufReader, path::Path, time::Duration};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    geom::ProjectionKind,
    render::{LegendLayout, VIEW_BOX},
    scale::Palette,
    tooltip::{TooltipBox, TooltipTuning},
    topo::{LayerNames, MeshFilter},
};

/// Map settings. Every field is optional in the JSON form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Object names of the region and outline layers in the topology.
    pub layers: LayerNames,
    pub palette: Palette,
    /// Which outline arcs to draw.
    pub outline: MeshFilter,
    pub projection: ProjectionKind,
    /// Map viewBox width and height.
    pub view_box: (f64, f64),
    pub legend: LegendLayout,
    pub tooltip: TooltipTuning,
    /// Tooltip box assumed when it cannot be measured.
    pub fallback_box: TooltipBox,
    pub resize_debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layers: LayerNames::default(),
            palette: Palette::default(),
            outline: MeshFilter::default(),
            projection: ProjectionKind::default(),
            view_box: VIEW_BOX,
            legend: LegendLayout::default(),
            tooltip: TooltipTuning::default(),
            fallback_box: TooltipBox::FALLBACK,
            resize_debounce_ms: 100,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str::<Self>(json)
            .context("[config] Failed to parse configuration")?
            .validated()
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[config] Failed to open {}", path.display()))?;
        serde_json::from_reader::<_, Self>(BufReader::new(file))
            .with_context(|| format!("[config] Failed to parse {}", path.display()))?
            .validated()
    }

    #[inline]
    pub fn resize_debounce(&self) -> Duration { Duration::from_millis(self.resize_debounce_ms) }

    fn validated(self) -> Result<Self> {
        let (width, height) = self.view_box;
        if !(width > 0.0 && height > 0.0) {
            bail!("[config] view_box must be positive, got {width}x{height}");
        }
        if self.palette.colors().len() < 2 {
            bail!("[config] palette needs at least 2 colors");
        }
        Ok(self)
    }
}
