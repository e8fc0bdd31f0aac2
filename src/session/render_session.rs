use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    render::LegendLayout,
    scale::{Palette, QuantizeScale},
    stats::{StatisticIndex, StatRecord},
    topo::RegionGeometry,
};

/// Everything a render needs, built once both payloads have arrived.
///
/// Immutable: a new payload produces a new session rather than mutating
/// this one.
#[derive(Clone, Debug)]
pub struct RenderSession {
    geometry: Arc<RegionGeometry>,
    statistics: Arc<StatisticIndex>,
    scale: QuantizeScale,
    legend: LegendLayout,
}

impl RenderSession {
    /// Join geometry with statistics and derive the color scale.
    ///
    /// Returns `None` while the statistics are empty (no extent to scale
    /// over) or the palette cannot build a scale.
    pub fn build(
        geometry: Arc<RegionGeometry>,
        records: Vec<StatRecord>,
        palette: &Palette,
        legend: LegendLayout,
    ) -> Option<Self> {
        let (statistics, extent) = StatisticIndex::build(records);
        let Some(extent) = extent else {
            warn!("statistics payload has no finite values; map not ready");
            return None;
        };

        let scale = match QuantizeScale::new(extent, palette.colors()) {
            Ok(scale) => scale,
            Err(err) => {
                warn!(error = %err, "could not build color scale");
                return None;
            }
        };

        debug!(min = extent.min, max = extent.max, thresholds = ?scale.thresholds(), "built color scale");
        Some(Self { geometry, statistics: Arc::new(statistics), scale, legend })
    }

    #[inline] pub fn geometry(&self) -> &RegionGeometry { &self.geometry }

    #[inline] pub fn statistics(&self) -> &StatisticIndex { &self.statistics }

    #[inline] pub fn scale(&self) -> &QuantizeScale { &self.scale }

    #[inline] pub fn legend(&self) -> &LegendLayout { &self.legend }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fixtures::{TWO_COUNTIES, TWO_COUNTY_STATS},
        scale::Rgb,
        stats::read_statistics_from_slice,
        topo::{build_geometry, LayerNames, MeshFilter, Topology},
    };

    fn geometry() -> Arc<RegionGeometry> {
        let topology = Topology::from_json_str(TWO_COUNTIES).unwrap();
        Arc::new(build_geometry(&topology, &LayerNames::default(), MeshFilter::All).unwrap())
    }

    #[test]
    fn builds_scale_over_statistics() {
        let records = read_statistics_from_slice(TWO_COUNTY_STATS.as_bytes()).unwrap();
        let palette = Palette::Colors(vec![Rgb::from_u32(0x111111), Rgb::from_u32(0x222222), Rgb::from_u32(0x333333)]);
        let session = RenderSession::build(geometry(), records, &palette, LegendLayout::default()).unwrap();

        assert_eq!(session.statistics().len(), 2);
        let thresholds = session.scale().thresholds();
        assert!((thresholds[0] - 36.666_666).abs() < 1e-5);
        assert!((thresholds[1] - 63.333_333).abs() < 1e-5);
    }

    #[test]
    fn empty_statistics_are_not_ready() {
        assert!(RenderSession::build(geometry(), vec![], &Palette::default(), LegendLayout::default()).is_none());
    }

    #[test]
    fn single_color_palette_is_not_ready() {
        let records = read_statistics_from_slice(TWO_COUNTY_STATS.as_bytes()).unwrap();
        let palette = Palette::Colors(vec![Rgb::from_u32(0x000000)]);
        assert!(RenderSession::build(geometry(), records, &palette, LegendLayout::default()).is_none());
    }
}
