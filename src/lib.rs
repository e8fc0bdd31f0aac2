#![doc = "Choropleth maps from TopoJSON regions and per-region statistics"]
mod config;
mod geom;
mod io;
mod legend;
mod render;
mod scale;
mod scene;
mod session;
mod stats;
mod tooltip;
mod topo;

#[cfg(test)]
mod fixtures;

#[doc(inline)]
pub use config::Config;

#[doc(inline)]
pub use geom::{FitExtent, Identity, Projection, ProjectionKind, RegionLocator};

#[doc(inline)]
pub use io::{load_payloads, Source};

pub use legend::{render as render_legend, LegendOptions};

#[doc(inline)]
pub use render::{render_map, tick_label, LegendLayout, LEGEND_LAYER, OUTLINE_LAYER, REGION_LAYER, VIEW_BOX};

#[doc(inline)]
pub use scale::{LinearScale, Palette, QuantizeScale, Rgb, Scheme};

#[doc(inline)]
pub use scene::{Element, HoverTarget, Scene};

#[doc(inline)]
pub use session::{Choropleth, Debouncer, JoinBarrier, Payload, Pointer, RenderSession, Status};

#[doc(inline)]
pub use stats::{read_statistics_from_file, read_statistics_from_slice, Extent, RegionId, StatRecord, StatisticIndex};

#[doc(inline)]
pub use tooltip::{place, Measure, TooltipBox, TooltipState, TooltipTuning, Translate, Unmeasured};

#[doc(inline)]
pub use topo::{build_geometry, Geometry, GeometryKind, LayerNames, MeshFilter, RegionGeometry, RegionShape, Topology, Transform};
