//! Value mapping — pointer position → domain value, step snapping, clipping.
//!
//! Pure functions with explicit parameters. The controller calls
//! [`value_from_interaction`] on every press and move; everything else is the
//! pipeline it composes:
//!
//! ```text
//! page_x_from_event → value_from_page_x → snap_to_step → clip
//! ```

use crate::domain::{BoundingBox, PointerEvent};

/// Horizontal page coordinate of a pointer event.
///
/// First touch contact if any, otherwise the event's own `page_x`.
pub fn page_x_from_event(event: &PointerEvent) -> f64 {
    match event.touches.first() {
        Some(touch) => touch.page_x,
        None => event.page_x,
    }
}

/// Linear map from `page_x` into `[min, max]` across the bounding box.
///
/// The fraction is not clamped: a pointer left of the box yields a value
/// below `min`, right of the box above `max`. Clipping happens last in
/// [`value_from_interaction`].
///
/// Precondition: `bounds.width != 0`.
pub fn value_from_page_x(page_x: f64, min: f64, max: f64, bounds: &BoundingBox) -> f64 {
    let relative_x = page_x - bounds.left;
    let fraction = relative_x / bounds.width;
    min + fraction * (max - min)
}

/// Round `value` to the nearest point of the grid `min + k * step`.
///
/// `step == 0` is continuous mode and returns `value` unchanged. Exact ties
/// (`remainder * 2 == step`) snap up to the farther grid line.
///
/// The remainder is Euclidean so values below `min` snap toward the same
/// grid as values above it. Always returns a number, including when float
/// error puts the remainder at exactly `step`.
pub fn snap_to_step(value: f64, step: f64, min: f64) -> f64 {
    if step == 0.0 {
        return value;
    }

    let remainder = (value - min).rem_euclid(step).abs();
    if remainder == 0.0 {
        value
    } else if remainder * 2.0 >= step {
        value + (step - remainder)
    } else {
        value - remainder
    }
}

/// Constrain `value` to `[min, max]`.
pub fn clip(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Full pipeline: event → page x → raw value → snapped → clipped.
pub fn value_from_interaction(
    event: &PointerEvent,
    step: f64,
    min: f64,
    max: f64,
    bounds: &BoundingBox,
) -> f64 {
    let page_x = page_x_from_event(event);
    let raw = value_from_page_x(page_x, min, max, bounds);
    let stepped = snap_to_step(raw, step, min);
    clip(stepped, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(0.0, 50.0)
    }

    #[test]
    fn first_touch_wins_over_mouse_position() {
        let mut event = PointerEvent::touch([12.0, 80.0]);
        event.page_x = 99.0;
        assert_eq!(page_x_from_event(&event), 12.0);
    }

    #[test]
    fn mouse_position_without_touches() {
        assert_eq!(page_x_from_event(&PointerEvent::mouse(33.5)), 33.5);
    }

    #[test]
    fn page_x_maps_linearly_with_offset_box() {
        let b = BoundingBox::new(100.0, 200.0);
        assert_eq!(value_from_page_x(100.0, 0.0, 50.0, &b), 0.0);
        assert_eq!(value_from_page_x(200.0, 0.0, 50.0, &b), 25.0);
        assert_eq!(value_from_page_x(300.0, 0.0, 50.0, &b), 50.0);
    }

    #[test]
    fn page_x_outside_box_is_not_clamped() {
        let b = unit_box();
        assert_eq!(value_from_page_x(-10.0, 0.0, 50.0, &b), -10.0);
        assert_eq!(value_from_page_x(60.0, 0.0, 50.0, &b), 60.0);
    }

    #[test]
    fn snap_rounds_down_below_half() {
        assert_eq!(snap_to_step(22.0, 5.0, 0.0), 20.0);
    }

    #[test]
    fn snap_rounds_up_at_or_above_half() {
        assert_eq!(snap_to_step(23.0, 5.0, 0.0), 25.0);
        assert_eq!(snap_to_step(2.5, 5.0, 0.0), 5.0);
    }

    #[test]
    fn snap_on_grid_is_unchanged() {
        assert_eq!(snap_to_step(15.0, 5.0, 0.0), 15.0);
    }

    #[test]
    fn snap_grid_is_anchored_at_min() {
        // grid: 3, 8, 13, ...
        assert_eq!(snap_to_step(9.0, 5.0, 3.0), 8.0);
        assert_eq!(snap_to_step(11.0, 5.0, 3.0), 13.0);
    }

    #[test]
    fn snap_below_min_stays_on_grid() {
        assert_eq!(snap_to_step(-1.0, 5.0, 0.0), 0.0);
        assert_eq!(snap_to_step(-4.0, 5.0, 0.0), -5.0);
    }

    #[test]
    fn continuous_mode_passthrough() {
        assert_eq!(snap_to_step(22.37, 0.0, 0.0), 22.37);
    }

    #[test]
    fn clip_bounds() {
        assert_eq!(clip(-3.0, 0.0, 50.0), 0.0);
        assert_eq!(clip(70.0, 0.0, 50.0), 50.0);
        assert_eq!(clip(12.0, 0.0, 50.0), 12.0);
    }

    #[test]
    fn pipeline_beyond_right_edge_clips_to_max() {
        let v = value_from_interaction(&PointerEvent::mouse(80.0), 5.0, 0.0, 50.0, &unit_box());
        assert_eq!(v, 50.0);
    }

    #[test]
    fn pipeline_snaps_then_clips() {
        let b = unit_box();
        assert_eq!(value_from_interaction(&PointerEvent::mouse(22.0), 5.0, 0.0, 50.0, &b), 20.0);
        assert_eq!(value_from_interaction(&PointerEvent::mouse(23.0), 5.0, 0.0, 50.0, &b), 25.0);
        assert_eq!(value_from_interaction(&PointerEvent::mouse(-9.0), 5.0, 0.0, 50.0, &b), 0.0);
    }
}
