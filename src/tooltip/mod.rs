//! Hover tooltip: text, measured box and a viewport-aware offset.

use serde::{Deserialize, Serialize};

use crate::stats::StatRecord;

/// Rendered box of the tooltip element, relative to its container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TooltipBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl TooltipBox {
    /// Used when the element cannot be measured.
    pub const FALLBACK: TooltipBox = TooltipBox { top: 0.0, left: 0.0, width: 172.0, height: 66.0 };
}

impl Default for TooltipBox {
    fn default() -> Self { Self::FALLBACK }
}

/// Measures the mounted tooltip element.
pub trait Measure {
    fn measure(&self) -> Option<TooltipBox>;
}

impl<F: Fn() -> Option<TooltipBox>> Measure for F {
    fn measure(&self) -> Option<TooltipBox> { self() }
}

/// A measurer with nothing to measure; always falls back.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unmeasured;

impl Measure for Unmeasured {
    fn measure(&self) -> Option<TooltipBox> { None }
}

/// Placement constants, as fractions of the tooltip box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipTuning {
    /// Extra horizontal room required beyond the box width.
    pub clearance: f64,
    /// Shift left by this share of the width when there is room to the right.
    pub near: f64,
    /// Shift left by this share of the width when there is not.
    pub flip: f64,
    /// Further shift, as a share of the padded width, if still overflowing.
    pub nudge: f64,
    /// Raise above the pointer by this multiple of the height.
    pub lift: f64,
}

impl Default for TooltipTuning {
    fn default() -> Self {
        Self { clearance: 24.0, near: 0.2, flip: 0.8, nudge: 0.2, lift: 1.2 }
    }
}

/// Offset applied to the tooltip, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Translate {
    pub x: f64,
    pub y: f64,
}

/// Offset for a tooltip of size `bbox` shown at `pointer`.
pub fn place(pointer: (f64, f64), bbox: &TooltipBox, viewport_width: f64, tuning: &TooltipTuning) -> Translate {
    let (px, py) = pointer;
    let padded = bbox.width + tuning.clearance;

    let mut x = if px + padded < viewport_width {
        px - bbox.left - tuning.near * bbox.width
    } else {
        px - bbox.left - tuning.flip * bbox.width
    };
    if x + padded >= viewport_width {
        x -= tuning.nudge * padded;
    }

    Translate {
        x: x.max(0.0),
        y: py - (bbox.top + tuning.lift * bbox.height),
    }
}

/// Tooltip content and placement. Starts hidden.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TooltipState {
    text: String,
    #[serde(rename = "box")]
    bbox: TooltipBox,
    translate: Translate,
    visible: bool,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            text: "Template County,\nTM: 00.0%".to_string(),
            bbox: TooltipBox::FALLBACK,
            translate: Translate::default(),
            visible: false,
        }
    }
}

impl TooltipState {
    pub fn new(measure: &dyn Measure, fallback: TooltipBox) -> Self {
        let mut state = Self::default();
        state.remeasure(measure, fallback);
        state
    }

    /// Refresh the cached box, keeping `fallback` when measurement fails.
    pub fn remeasure(&mut self, measure: &dyn Measure, fallback: TooltipBox) {
        self.bbox = measure.measure().unwrap_or(fallback);
    }

    /// Show `record` next to the pointer.
    pub fn show(&mut self, pointer: (f64, f64), record: &StatRecord, viewport_width: f64, tuning: &TooltipTuning) {
        self.text = format!("{},\n{}: {}%", record.display_name, record.parent_label, record.value);
        self.translate = place(pointer, &self.bbox, viewport_width, tuning);
        self.visible = true;
    }

    /// Hide and reset the offset. Text and box are kept for the next hover.
    pub fn hide(&mut self) {
        self.translate = Translate::default();
        self.visible = false;
    }

    #[inline] pub fn text(&self) -> &str { &self.text }

    #[inline] pub fn bbox(&self) -> TooltipBox { self.bbox }

    #[inline] pub fn translate(&self) -> Translate { self.translate }

    #[inline] pub fn is_visible(&self) -> bool { self.visible }

    #[inline] pub fn opacity(&self) -> f64 { if self.visible { 1.0 } else { 0.0 } }

    /// CSS transform for the current offset.
    pub fn transform(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.translate.x, self.translate.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(width: f64, height: f64) -> TooltipBox {
        TooltipBox { top: 0.0, left: 0.0, width, height }
    }

    #[test]
    fn places_right_of_pointer_when_room() {
        let t = place((200.0, 300.0), &bbox(100.0, 50.0), 1000.0, &TooltipTuning::default());
        assert_eq!(t, Translate { x: 180.0, y: 240.0 });
    }

    #[test]
    fn flips_left_near_right_edge() {
        // 950 + 124 >= 1000, so shift by 0.8w; 870 + 124 < 1000, no nudge.
        let t = place((950.0, 300.0), &bbox(100.0, 50.0), 1000.0, &TooltipTuning::default());
        assert_eq!(t.x, 870.0);
    }

    #[test]
    fn nudges_when_still_overflowing() {
        // 990 - 80 = 910; 910 + 124 >= 1000, so nudge by 0.2 * 124.
        let t = place((990.0, 300.0), &bbox(100.0, 50.0), 1000.0, &TooltipTuning::default());
        assert!((t.x - 885.2).abs() < 1e-9);
    }

    #[test]
    fn clamps_to_left_edge() {
        let t = place((5.0, 10.0), &bbox(100.0, 50.0), 1000.0, &TooltipTuning::default());
        assert_eq!(t.x, 0.0);
        assert_eq!(t.y, -50.0);
    }

    #[test]
    fn offset_accounts_for_box_origin() {
        let bbox = TooltipBox { top: 10.0, left: 20.0, width: 100.0, height: 50.0 };
        let t = place((200.0, 300.0), &bbox, 1000.0, &TooltipTuning::default());
        assert_eq!(t, Translate { x: 160.0, y: 230.0 });
    }

    #[test]
    fn show_then_hide() {
        let mut state = TooltipState::new(&|| Some(bbox(100.0, 50.0)), TooltipBox::FALLBACK);
        assert!(!state.is_visible());

        let record = StatRecord::new(1, "Autauga County", "AL", 24.5);
        state.show((200.0, 300.0), &record, 1000.0, &TooltipTuning::default());
        assert_eq!(state.text(), "Autauga County,\nAL: 24.5%");
        assert_eq!(state.opacity(), 1.0);
        assert_eq!(state.transform(), "translate3d(180px, 240px, 0)");

        state.hide();
        assert_eq!(state.translate(), Translate::default());
        assert_eq!(state.opacity(), 0.0);
        assert_eq!(state.text(), "Autauga County,\nAL: 24.5%");
    }

    #[test]
    fn hide_is_idempotent() {
        let mut state = TooltipState::default();
        state.hide();
        let once = state.clone();
        state.hide();
        assert_eq!(state, once);
    }

    #[test]
    fn failed_measurement_uses_fallback() {
        let state = TooltipState::new(&Unmeasured, TooltipBox::FALLBACK);
        assert_eq!(state.bbox(), TooltipBox { top: 0.0, left: 0.0, width: 172.0, height: 66.0 });
    }
}
