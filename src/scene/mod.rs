//! Retained scene graph for the map: keyed layers of SVG elements plus the
//! hover targets needed to route pointer events back to regions.

mod element;
mod writer;

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

pub use element::Element;

use crate::{geom::RegionLocator, stats::RegionId};
use writer::{create_svg_file, svg_string, write_svg_footer, write_svg_header, write_svg_styles};

/// What a region path carries for the tooltip: its identifier and statistic.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HoverTarget {
    /// Position of the region in draw order.
    pub index: usize,
    /// `None` when the feature carries no id.
    pub id: Option<RegionId>,
    pub value: Option<f64>,
}

/// A fixed-viewBox drawing surface organised in named layers.
///
/// Setting a layer replaces its previous contents, so rendering twice with
/// the same inputs yields the same scene.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    width: f64,
    height: f64,
    layers: Vec<(&'static str, Vec<Element>)>,
    hover: Vec<HoverTarget>,
    locator: RegionLocator,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Default::default() }
    }

    #[inline] pub fn width(&self) -> f64 { self.width }

    #[inline] pub fn height(&self) -> f64 { self.height }

    /// Replace (or append, on first use) the layer called `key`.
    pub fn set_layer(&mut self, key: &'static str, elements: Vec<Element>) {
        match self.layers.iter_mut().find(|(k, _)| *k == key) {
            Some(layer) => layer.1 = elements,
            None => self.layers.push((key, elements)),
        }
    }

    pub fn layer(&self, key: &str) -> Option<&[Element]> {
        self.layers.iter().find(|(k, _)| *k == key).map(|(_, elements)| elements.as_slice())
    }

    pub fn layer_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.layers.iter().map(|(k, _)| *k)
    }

    /// All elements in draw order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.layers.iter().flat_map(|(_, elements)| elements)
    }

    pub fn set_hover(&mut self, targets: Vec<HoverTarget>, locator: RegionLocator) {
        self.hover = targets;
        self.locator = locator;
    }

    #[inline] pub fn hover_targets(&self) -> &[HoverTarget] { &self.hover }

    #[inline] pub fn hover_target(&self, index: usize) -> Option<&HoverTarget> { self.hover.get(index) }

    /// Hover target under a scene-space point.
    pub fn locate(&self, x: f64, y: f64) -> Option<&HoverTarget> {
        self.locator.locate(x, y).and_then(|index| self.hover.get(index))
    }

    /// Serialize the whole scene as a standalone SVG document.
    pub fn write_svg(&self, writer: &mut impl Write) -> Result<()> {
        write_svg_header(writer, self.width, self.height)?;
        write_svg_styles(writer)?;
        for (key, elements) in &self.layers {
            writeln!(writer, r#"<g class="layer" data-layer="{key}">"#)?;
            for element in elements {
                element.write_to(writer, 1)?;
            }
            writeln!(writer, "</g>")?;
        }
        write_svg_footer(writer)
    }

    pub fn to_svg_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_svg(&mut buffer)?;
        svg_string(buffer)
    }

    pub fn write_svg_file(&self, path: &Path) -> Result<()> {
        let mut writer = create_svg_file(path)?;
        self.write_svg(&mut writer)?;
        writer.flush()
            .with_context(|| format!("[scene::svg] Failed to flush {}", path.display()))
    }
}
