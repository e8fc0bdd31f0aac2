use std::{sync::Arc, time::Instant};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    geom::{FitExtent, Identity, ProjectionKind},
    render::render_map,
    scene::Scene,
    stats::StatRecord,
    tooltip::{Measure, TooltipState},
    topo::{build_geometry, RegionGeometry, Topology},
};

use super::{Debouncer, JoinBarrier, RenderSession};

/// Margin around the map when fitting unprojected coordinates.
const FIT_MARGIN: f64 = 10.0;

/// Lifecycle of the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Waiting for one or both payloads, or holding an unusable one.
    Loading,
    /// A payload could not be fetched or read.
    Failed(String),
    /// The map has been drawn.
    Ready,
}

/// One of the two startup payloads.
#[derive(Clone, Debug)]
pub enum Payload {
    Topology(Topology),
    Statistics(Vec<StatRecord>),
}

/// Pointer position in both scene (viewBox) and page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub scene_x: f64,
    pub scene_y: f64,
    pub page_x: f64,
    pub page_y: f64,
}

impl Pointer {
    /// A pointer over a scene drawn at page origin and unit scale.
    pub fn at(x: f64, y: f64) -> Self {
        Self { scene_x: x, scene_y: y, page_x: x, page_y: y }
    }
}

/// Owns the map through its lifetime: joins the payloads, renders once
/// both are usable, and routes pointer and resize events to the tooltip.
pub struct Choropleth {
    config: Config,
    measure: Box<dyn Measure>,
    status: Status,
    barrier: JoinBarrier<Arc<RegionGeometry>, Vec<StatRecord>>,
    session: Option<RenderSession>,
    scene: Scene,
    tooltip: TooltipState,
    hovered: Option<usize>,
    viewport_width: f64,
    resize: Debouncer<f64>,
}

impl Choropleth {
    pub fn new(config: Config, measure: Box<dyn Measure>, viewport_width: f64) -> Self {
        let (width, height) = config.view_box;
        let tooltip = TooltipState::new(measure.as_ref(), config.fallback_box);
        Self {
            resize: Debouncer::new(config.resize_debounce()),
            scene: Scene::new(width, height),
            config,
            measure,
            status: Status::Loading,
            barrier: JoinBarrier::default(),
            session: None,
            tooltip,
            hovered: None,
            viewport_width,
        }
    }

    /// Accept a payload (or its fetch failure) in whatever order it arrives.
    pub fn deliver(&mut self, payload: Result<Payload>) -> bool {
        match payload {
            Ok(Payload::Topology(topology)) => self.topology_loaded(&topology),
            Ok(Payload::Statistics(records)) => self.statistics_loaded(records),
            Err(err) => {
                warn!(error = %format!("{err:#}"), "payload failed to load");
                self.status = Status::Failed(format!("{err:#}"));
                false
            }
        }
    }

    /// Expand the topology into region geometry and try to render.
    /// A malformed topology replaces any earlier one and leaves the map
    /// loading until a drawable topology arrives.
    pub fn topology_loaded(&mut self, topology: &Topology) -> bool {
        match build_geometry(topology, &self.config.layers, self.config.outline) {
            Some(geometry) => self.barrier.supply_first(Arc::new(geometry)),
            None => {
                warn!("topology is not drawable; map stays loading");
                self.barrier.clear_first();
                self.clear_drawing();
                if !matches!(self.status, Status::Failed(_)) {
                    self.status = Status::Loading;
                }
            }
        }
        self.try_render()
    }

    pub fn statistics_loaded(&mut self, records: Vec<StatRecord>) -> bool {
        self.barrier.supply_second(records);
        self.try_render()
    }

    /// Render if both payloads are present and usable. Returns whether the
    /// map is drawn afterwards; a no-op until then.
    pub fn try_render(&mut self) -> bool {
        if matches!(self.status, Status::Failed(_)) {
            return false;
        }
        let Some((geometry, records)) = self.barrier.joined() else {
            debug!(
                topology = self.barrier.has_first(),
                statistics = self.barrier.has_second(),
                "waiting for payloads"
            );
            return false;
        };

        let Some(session) = RenderSession::build(
            Arc::clone(geometry),
            records.clone(),
            &self.config.palette,
            self.config.legend.clone(),
        ) else {
            return false;
        };

        match self.config.projection {
            ProjectionKind::Identity => render_map(&mut self.scene, &session, &Identity),
            ProjectionKind::Fit => {
                let Some(bounds) = session.geometry().bounds() else { return false };
                let (width, height) = self.config.view_box;
                let fit = FitExtent::new(bounds, width, height, FIT_MARGIN, true);
                render_map(&mut self.scene, &session, &fit);
            }
        }

        info!(regions = session.geometry().regions.len(), "map ready");
        self.session = Some(session);
        self.hovered = None;
        self.tooltip.hide();
        self.status = Status::Ready;
        true
    }

    /// Forget everything received so far and wait for fresh payloads.
    pub fn retry(&mut self) {
        self.barrier.clear();
        self.clear_drawing();
        self.resize.cancel();
        self.status = Status::Loading;
    }

    fn clear_drawing(&mut self) {
        let (width, height) = self.config.view_box;
        self.session = None;
        self.scene = Scene::new(width, height);
        self.hovered = None;
        self.tooltip.hide();
    }

    /// Pointer entered region `index` (in draw order).
    pub fn hover_enter(&mut self, index: usize, page_x: f64, page_y: f64) {
        let record = self.scene.hover_target(index)
            .zip(self.session.as_ref())
            .and_then(|(target, session)| session.statistics().get(target.id.as_ref()?));

        match record {
            Some(record) => {
                self.tooltip.show((page_x, page_y), record, self.viewport_width, &self.config.tooltip);
                self.hovered = Some(index);
            }
            None => {
                self.tooltip.hide();
                self.hovered = self.scene.hover_target(index).map(|target| target.index);
            }
        }
    }

    pub fn hover_leave(&mut self) {
        self.tooltip.hide();
        self.hovered = None;
    }

    /// Route a pointer position to enter/leave transitions.
    pub fn pointer_move(&mut self, pointer: Pointer) {
        let under = self.scene.locate(pointer.scene_x, pointer.scene_y).map(|target| target.index);
        if under == self.hovered {
            return;
        }
        match under {
            Some(index) => self.hover_enter(index, pointer.page_x, pointer.page_y),
            None => self.hover_leave(),
        }
    }

    /// Record a viewport resize; applied once events settle.
    pub fn resize(&mut self, now: Instant, viewport_width: f64) {
        self.resize.schedule(now, viewport_width);
    }

    /// Apply a settled resize: new viewport width and a fresh tooltip box.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(width) = self.resize.poll(now) else { return false };
        self.viewport_width = width;
        self.tooltip.remeasure(self.measure.as_ref(), self.config.fallback_box);
        debug!(viewport_width = width, bbox = ?self.tooltip.bbox(), "applied resize");
        true
    }

    #[inline] pub fn status(&self) -> &Status { &self.status }

    #[inline] pub fn is_ready(&self) -> bool { self.status == Status::Ready }

    #[inline] pub fn scene(&self) -> &Scene { &self.scene }

    #[inline] pub fn session(&self) -> Option<&RenderSession> { self.session.as_ref() }

    #[inline] pub fn tooltip(&self) -> &TooltipState { &self.tooltip }

    #[inline] pub fn hovered(&self) -> Option<usize> { self.hovered }

    #[inline] pub fn viewport_width(&self) -> f64 { self.viewport_width }

    #[inline] pub fn config(&self) -> &Config { &self.config }
}
