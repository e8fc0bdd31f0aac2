//! Draws a [`RenderSession`] into the map [`Scene`]: legend, filled regions
//! and the coarse outline, each in its own replaceable layer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    geom::{multilinestring_to_path, multipolygon_to_path, project_multipolygon, Projection, RegionLocator},
    legend::{self, LegendOptions},
    scene::{Element, HoverTarget, Scene},
    session::RenderSession,
};

pub const LEGEND_LAYER: &str = "legend";
pub const REGION_LAYER: &str = "regions";
pub const OUTLINE_LAYER: &str = "states";

/// Width and height of the map viewBox, in source units.
pub const VIEW_BOX: (f64, f64) = (975.0, 610.0);

/// Where and how the legend sits on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendLayout {
    pub title: String,
    pub width: f64,
    pub translate: (f64, f64),
    pub tick_size: f64,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self {
            title: "Percentage (%)".to_string(),
            width: 260.0,
            translate: (610.0, 20.0),
            tick_size: 6.0,
        }
    }
}

impl LegendLayout {
    pub fn options(&self) -> LegendOptions {
        LegendOptions {
            title: self.title.clone(),
            width: self.width,
            ..LegendOptions::with_tick_size(self.tick_size)
        }
    }
}

/// Legend tick label: the threshold rounded to a whole percentage.
pub fn tick_label(threshold: f64, _: usize) -> String {
    format!("{}", threshold.round())
}

/// Render `session` into `scene`, replacing any earlier drawing.
pub fn render_map(scene: &mut Scene, session: &RenderSession, projection: &dyn Projection) {
    let layout = session.legend();
    let (tx, ty) = layout.translate;
    let legend = Element::new("g")
        .attr("transform", format!("translate({tx},{ty})"))
        .child(legend::render(session.scale(), &layout.options(), tick_label));
    scene.set_layer(LEGEND_LAYER, vec![legend]);

    let regions = &session.geometry().regions;
    let mut paths = Vec::with_capacity(regions.len());
    let mut targets = Vec::with_capacity(regions.len());
    let mut projected = Vec::with_capacity(regions.len());
    let mut missing = 0;

    for (index, shape) in regions.iter().enumerate() {
        let record = shape.id.as_ref().and_then(|id| session.statistics().get(id));
        let value = record.map(|r| r.value);
        let fill = value.and_then(|v| session.scale().color(v));

        let mut path = Element::new("path")
            .attr("d", multipolygon_to_path(&shape.geometry, projection));
        if let Some(id) = &shape.id {
            path = path.attr("data-fips", id);
        }
        path = match (fill, value) {
            (Some(fill), Some(value)) => path
                .attr("class", "map__region")
                .attr("fill", fill)
                .attr("data-education", value),
            _ => {
                missing += 1;
                path.attr("class", "map__region map__region--missing")
            }
        };

        paths.push(path);
        targets.push(HoverTarget { index, id: shape.id.clone(), value });
        projected.push(project_multipolygon(&shape.geometry, projection));
    }
    scene.set_layer(REGION_LAYER, paths);
    scene.set_hover(targets, RegionLocator::new(projected));

    let outline = Element::new("path")
        .attr("class", "map__state")
        .attr("fill", "none")
        .attr("d", multilinestring_to_path(&session.geometry().outline, projection));
    scene.set_layer(OUTLINE_LAYER, vec![outline]);

    debug!(regions = regions.len(), missing, "rendered map");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use geo::Coord;

    use super::*;
    use crate::{
        fixtures::{TWO_COUNTIES, TWO_COUNTY_STATS},
        geom::Identity,
        scale::{Palette, Rgb},
        stats::{read_statistics_from_slice, RegionId, StatRecord},
        topo::{build_geometry, LayerNames, MeshFilter, Topology},
    };

    fn palette() -> Palette {
        Palette::Colors(vec![Rgb::from_u32(0xaaaaaa), Rgb::from_u32(0x555555), Rgb::from_u32(0x000000)])
    }

    fn session(records: Vec<StatRecord>) -> RenderSession {
        let topology = Topology::from_json_str(TWO_COUNTIES).unwrap();
        let geometry = build_geometry(&topology, &LayerNames::default(), MeshFilter::All).unwrap();
        RenderSession::build(Arc::new(geometry), records, &palette(), LegendLayout::default()).unwrap()
    }

    fn scaled(c: &Coord<f64>) -> (f64, f64) { (c.x * 100.0, c.y * 100.0) }

    #[test]
    fn fills_regions_by_bucket() {
        let records = read_statistics_from_slice(TWO_COUNTY_STATS.as_bytes()).unwrap();
        let mut scene = Scene::new(VIEW_BOX.0, VIEW_BOX.1);
        render_map(&mut scene, &session(records), &scaled);

        let regions = scene.layer(REGION_LAYER).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].get("fill"), Some("#aaaaaa"));
        assert_eq!(regions[0].get("data-fips"), Some("1"));
        assert_eq!(regions[0].get("data-education"), Some("10"));
        assert_eq!(regions[1].get("fill"), Some("#000000"));

        let outline = scene.layer(OUTLINE_LAYER).unwrap();
        assert_eq!(outline.len(), 1);
        assert!(outline[0].has_class("map__state"));
        assert_eq!(outline[0].get("fill"), Some("none"));
    }

    #[test]
    fn missing_statistic_gets_neutral_fill() {
        let records = vec![StatRecord::new(1, "Low County", "TS", 10.0), StatRecord::new(99, "Elsewhere", "TS", 50.0)];
        let mut scene = Scene::new(VIEW_BOX.0, VIEW_BOX.1);
        render_map(&mut scene, &session(records), &scaled);

        let regions = scene.layer(REGION_LAYER).unwrap();
        assert!(regions[1].has_class("map__region--missing"));
        assert_eq!(regions[1].get("fill"), None);
        assert_eq!(regions[1].get("data-education"), None);
        assert_eq!(scene.hover_target(1).unwrap().value, None);
    }

    #[test]
    fn region_without_id_is_drawn_unjoined() {
        let topology = Topology::from_json_str(&TWO_COUNTIES.replace(r#""id": 2, "#, "")).unwrap();
        let geometry = build_geometry(&topology, &LayerNames::default(), MeshFilter::All).unwrap();
        let records = read_statistics_from_slice(TWO_COUNTY_STATS.as_bytes()).unwrap();
        let session = RenderSession::build(Arc::new(geometry), records, &palette(), LegendLayout::default()).unwrap();
        let mut scene = Scene::new(VIEW_BOX.0, VIEW_BOX.1);
        render_map(&mut scene, &session, &scaled);

        let regions = scene.layer(REGION_LAYER).unwrap();
        assert_eq!(regions.len(), 2);
        assert!(regions[1].has_class("map__region--missing"));
        assert_eq!(regions[1].get("data-fips"), None);
        assert!(!regions[1].get("d").unwrap().is_empty());

        let target = scene.locate(150.0, 50.0).unwrap();
        assert_eq!((target.index, target.id.as_ref(), target.value), (1, None, None));
    }

    #[test]
    fn rerender_replaces_layers() {
        let records = read_statistics_from_slice(TWO_COUNTY_STATS.as_bytes()).unwrap();
        let session = session(records);
        let mut scene = Scene::new(VIEW_BOX.0, VIEW_BOX.1);
        render_map(&mut scene, &session, &Identity);
        let first = scene.to_svg_string().unwrap();
        render_map(&mut scene, &session, &Identity);

        assert_eq!(scene.elements().count(), 4);
        assert_eq!(scene.to_svg_string().unwrap(), first);
    }

    #[test]
    fn legend_is_placed_and_titled() {
        let records = read_statistics_from_slice(TWO_COUNTY_STATS.as_bytes()).unwrap();
        let mut scene = Scene::new(VIEW_BOX.0, VIEW_BOX.1);
        render_map(&mut scene, &session(records), &Identity);

        let legend = &scene.layer(LEGEND_LAYER).unwrap()[0];
        assert_eq!(legend.get("transform"), Some("translate(610,20)"));
        let title = legend.find_all(|e| e.has_class("title"));
        assert_eq!(title[0].text_content(), Some("Percentage (%)"));

        let labels = legend.find_all(|e| e.tag() == "text" && !e.has_class("title"))
            .iter().map(|t| t.text_content().unwrap().to_string()).collect::<Vec<_>>();
        assert_eq!(labels, ["37", "63"]);
    }

    #[test]
    fn hover_targets_follow_projection() {
        let records = read_statistics_from_slice(TWO_COUNTY_STATS.as_bytes()).unwrap();
        let mut scene = Scene::new(VIEW_BOX.0, VIEW_BOX.1);
        render_map(&mut scene, &session(records), &scaled);

        let target = scene.locate(150.0, 50.0).unwrap();
        assert_eq!(target.id, Some(RegionId::Num(2)));
        assert_eq!(target.value, Some(90.0));
        assert_eq!(scene.locate(50.0, 50.0).unwrap().index, 0);
        assert!(scene.locate(250.0, 50.0).is_none());
    }
}
