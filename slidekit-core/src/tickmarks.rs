//! Tickmark and label geometry.
//!
//! Tickmarks are expressed as a repeating pattern (one mark every
//! `step / (max - min)` of the track) so the render layer can draw them at
//! any resolution. Labels sit under every `label_interval`-th tickmark; each
//! label is one tick-group wide and the row is shifted left by half a label
//! so every label centers under its mark.

use serde::Serialize;

use crate::config::SliderConfig;

/// Width of a single tickmark line, in pixels.
pub const TICKMARK_WIDTH_PX: f64 = 1.0;

/// Repeating tickmark pattern across the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickmarkPattern {
    pub span: f64,
    pub step: f64,
    pub tick_width_px: f64,
}

impl TickmarkPattern {
    /// Number of step intervals across the track. May be fractional.
    pub fn tick_count(&self) -> f64 {
        self.span / self.step
    }

    /// Width of one pattern repetition as a fraction of the track.
    pub fn repeat_fraction(&self) -> f64 {
        self.step / self.span
    }

    /// CSS `background` value that draws this pattern.
    pub fn to_css(&self) -> String {
        let w = self.tick_width_px;
        format!(
            "linear-gradient(to right, currentColor {w}px, transparent 0) \
             0 center / calc((100% - {w}px) / ({span} / {step})) 100% repeat-x",
            span = self.span,
            step = self.step,
        )
    }

    /// Offsets of every whole tickmark from the track's left edge, for a
    /// track `width` units wide. The last mark lands at `width - tick_width`
    /// when the span is a whole number of steps.
    pub fn tick_offsets(&self, width: f64, tick_width: f64) -> Vec<f64> {
        let count = self.tick_count();
        let spacing = (width - tick_width) / count;
        (0..=count.floor() as usize)
            .map(|i| i as f64 * spacing)
            .collect()
    }
}

/// Tickmark pattern for `config`, or `None` when there is nothing to draw
/// (continuous mode or an empty range).
pub fn tickmark_pattern(config: &SliderConfig) -> Option<TickmarkPattern> {
    let span = config.span();
    if config.step <= 0.0 || span <= 0.0 {
        return None;
    }
    Some(TickmarkPattern {
        span,
        step: config.step,
        tick_width_px: TICKMARK_WIDTH_PX,
    })
}

/// One label under a tickmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub value: f64,
    /// Label width as a fraction of the track width.
    pub width_fraction: f64,
}

/// The full label row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelLayout {
    pub labels: Vec<Label>,
    /// `(max - min) / (step * label_interval)`; fractional when the range is
    /// not a whole number of label groups.
    pub number_of_labels: f64,
    /// Width of each label in track units (`total_width / number_of_labels`).
    pub label_width: f64,
    /// Row offset from the track's left edge (`-label_width / 2`).
    pub offset_left: f64,
    /// Row width: the track plus one label.
    pub container_width: f64,
}

impl LabelLayout {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Label count `config` would render, or `None` when labels are off.
pub fn label_count(config: &SliderConfig) -> Option<usize> {
    number_of_labels(config).map(|n| n.floor() as usize + 1)
}

fn number_of_labels(config: &SliderConfig) -> Option<f64> {
    if config.label_interval == 0 || config.step <= 0.0 || config.span() <= 0.0 {
        return None;
    }
    Some(config.span() / (config.step * f64::from(config.label_interval)))
}

/// True when every label of `config` would be at least one unit wide on a
/// track `total_width` units wide. Always true with labels off.
pub fn labels_fit(config: &SliderConfig, total_width: f64) -> bool {
    number_of_labels(config).map_or(true, |n| n <= total_width)
}

/// Label row for a track `total_width` units wide.
pub fn label_layout(config: &SliderConfig, total_width: f64) -> Option<LabelLayout> {
    let n = number_of_labels(config)?;
    let interval_value = config.step * f64::from(config.label_interval);
    let origin = round_half_up(config.min);
    let label_width = total_width / n;
    let width_fraction = 1.0 / n;

    let labels = (0..=n.floor() as usize)
        .map(|i| {
            let value = i as f64 * interval_value + origin;
            Label {
                text: format_label(value),
                value,
                width_fraction,
            }
        })
        .collect();

    Some(LabelLayout {
        labels,
        number_of_labels: n,
        label_width,
        offset_left: -label_width / 2.0,
        container_width: total_width + label_width,
    })
}

/// Round to nearest, ties toward positive infinity.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

fn format_label(v: f64) -> String {
    // -0 prints as "0"
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}")
}
