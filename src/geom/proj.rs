use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};

/// Maps source coordinates onto the screen-space viewBox.
pub trait Projection {
    fn project(&self, coord: &Coord<f64>) -> (f64, f64);
}

impl<F: Fn(&Coord<f64>) -> (f64, f64)> Projection for F {
    fn project(&self, coord: &Coord<f64>) -> (f64, f64) { self(coord) }
}

/// Source coordinates are already in screen space (pre-projected topology).
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Projection for Identity {
    #[inline]
    fn project(&self, coord: &Coord<f64>) -> (f64, f64) { (coord.x, coord.y) }
}

/// Uniformly scale `bounds` to fit a `width × height` viewBox minus a margin,
/// centred, optionally flipping y for lon/lat input.
#[derive(Clone, Copy, Debug)]
pub struct FitExtent {
    bounds: Rect<f64>,
    scale: f64,
    offset: (f64, f64),
    flip_y: bool,
}

impl FitExtent {
    pub fn new(bounds: Rect<f64>, width: f64, height: f64, margin: f64, flip_y: bool) -> Self {
        let (inner_w, inner_h) = ((width - 2.0 * margin).max(0.0), (height - 2.0 * margin).max(0.0));
        let scale_x = (bounds.width() > 0.0).then(|| inner_w / bounds.width());
        let scale_y = (bounds.height() > 0.0).then(|| inner_h / bounds.height());
        let scale = match (scale_x, scale_y) {
            (Some(sx), Some(sy)) => sx.min(sy),
            (Some(s), None) | (None, Some(s)) => s,
            (None, None) => 1.0,
        };

        let offset = (
            margin + (inner_w - bounds.width() * scale) / 2.0,
            margin + (inner_h - bounds.height() * scale) / 2.0,
        );
        Self { bounds, scale, offset, flip_y }
    }

    #[inline] pub fn scale(&self) -> f64 { self.scale }
}

impl Projection for FitExtent {
    fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let x = self.offset.0 + (coord.x - self.bounds.min().x) * self.scale;
        let y = if self.flip_y {
            self.offset.1 + (self.bounds.max().y - coord.y) * self.scale // invert vertically
        } else {
            self.offset.1 + (coord.y - self.bounds.min().y) * self.scale
        };
        (x, y)
    }
}

/// How region coordinates reach the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    /// Coordinates are already screen-space.
    #[default]
    Identity,
    /// Fit the topology's bounds into the viewBox, y up.
    Fit,
}
