//! Threshold legend: a strip of palette swatches with an axis of bucket
//! boundaries underneath.

use serde::{Deserialize, Serialize};

use crate::{scale::{LinearScale, QuantizeScale}, scene::Element};

/// Layout of a legend strip, in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    pub title: String,
    pub tick_size: f64,
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self::with_tick_size(6.0)
    }
}

impl LegendOptions {
    /// Defaults whose height and bottom margin grow with the tick length.
    pub fn with_tick_size(tick_size: f64) -> Self {
        Self {
            title: String::new(),
            tick_size,
            width: 320.0,
            height: 44.0 + tick_size,
            margin_top: 18.0,
            margin_right: 0.0,
            margin_bottom: 16.0 + tick_size,
            margin_left: 0.0,
        }
    }
}

/// Draw the legend for `scale`. Tick `i` sits on threshold `i` and is
/// labelled `tick_format(threshold, i)`.
pub fn render(scale: &QuantizeScale, options: &LegendOptions, tick_format: impl Fn(f64, usize) -> String) -> Element {
    let n = scale.range().len();
    let x = LinearScale::rounded(
        (-1.0, n as f64 - 1.0),
        (options.margin_left, options.width - options.margin_right),
    );
    let at = |i: usize| x.apply(i as f64);

    let swatches = scale.range().iter().enumerate().map(|(i, color)| {
        let x0 = x.apply(i as f64 - 1.0);
        Element::new("rect")
            .attr("x", x0)
            .attr("y", options.margin_top)
            .attr("width", at(i) - x0)
            .attr("height", options.height - options.margin_top - options.margin_bottom)
            .attr("fill", color)
    });

    // Tick lines reach up through the swatches to their top edge.
    let line_top = options.margin_top + options.margin_bottom - options.height;
    let ticks = scale.thresholds().iter().enumerate().map(|(i, &threshold)| {
        Element::new("g")
            .attr("class", "tick")
            .attr("opacity", 1)
            .attr("transform", format!("translate({},0)", at(i)))
            .child(Element::new("line")
                .attr("stroke", "currentColor")
                .attr("y2", options.tick_size)
                .attr("y1", line_top))
            .child(Element::new("text")
                .attr("fill", "currentColor")
                .attr("y", options.tick_size + 3.0)
                .attr("dy", "0.71em")
                .text(tick_format(threshold, i)))
    });

    let axis = Element::new("g")
        .attr("transform", format!("translate(0,{})", options.height - options.margin_bottom))
        .attr("fill", "none")
        .attr("font-size", 10)
        .attr("font-family", "sans-serif")
        .attr("text-anchor", "middle")
        .children_from(ticks)
        .child(Element::new("text")
            .attr("class", "title")
            .attr("x", options.margin_left)
            .attr("y", line_top - 6.0)
            .attr("fill", "currentColor")
            .attr("text-anchor", "start")
            .attr("font-weight", "bold")
            .attr("font-size", "14px")
            .text(options.title.as_str()));

    Element::new("svg")
        .attr("class", "legend")
        .attr("width", options.width)
        .attr("height", options.height)
        .attr("viewBox", format!("0 0 {} {}", options.width, options.height))
        .attr("style", "overflow: visible; display: block;")
        .child(Element::new("g").children_from(swatches))
        .child(axis)
}
