//! Property tests for value mapping invariants.
//!
//! Uses proptest to verify:
//! 1. Clipping totality and idempotence
//! 2. Step-snap grid membership and continuous passthrough
//! 3. Position linearity at the box edges
//! 4. Committed value always within [min, max] after a gesture
//! 5. Step validation fallback

use proptest::prelude::*;
use slidekit_core::mapper::{clip, snap_to_step, value_from_interaction, value_from_page_x};
use slidekit_core::{
    validate_step, BoundingBox, InteractionController, PointerEvent, RecordingHost, SliderConfig,
    ValueType,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_range() -> impl Strategy<Value = (f64, f64)> {
    (-1000.0..1000.0_f64, 0.5..2000.0_f64).prop_map(|(min, span)| (min, min + span))
}

fn arb_step() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(1.0),
        Just(5.0),
        Just(0.25),
        (1u32..200).prop_map(|n| n as f64 / 4.0),
    ]
}

fn arb_box() -> impl Strategy<Value = BoundingBox> {
    (-500.0..500.0_f64, 10.0..2000.0_f64).prop_map(|(left, width)| BoundingBox::new(left, width))
}

/// Distance from `x` to the nearest multiple of `step`, relative to step.
fn grid_error(x: f64, step: f64) -> f64 {
    let r = x.rem_euclid(step);
    r.min(step - r) / step
}

// ── 1. Clipping ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn clip_is_total((min, max) in arb_range(), value in -1e6..1e6_f64) {
        let c = clip(value, min, max);
        prop_assert!(c >= min && c <= max);
    }

    #[test]
    fn clip_is_idempotent((min, max) in arb_range(), value in -1e6..1e6_f64) {
        let once = clip(value, min, max);
        prop_assert_eq!(clip(once, min, max), once);
    }

    #[test]
    fn clip_keeps_in_range_values((min, max) in arb_range(), t in 0.0..=1.0_f64) {
        let value = min + t * (max - min);
        prop_assert_eq!(clip(value, min, max), value);
    }
}

// ── 2. Step snapping ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn snapped_value_is_on_grid(
        value in -5000.0..5000.0_f64,
        step in arb_step(),
        min in -100.0..100.0_f64,
    ) {
        let snapped = snap_to_step(value, step, min);
        prop_assert!(grid_error(snapped - min, step) < 1e-9, "snapped={snapped}");
    }

    #[test]
    fn snap_moves_at_most_half_a_step(
        value in -5000.0..5000.0_f64,
        step in arb_step(),
        min in -100.0..100.0_f64,
    ) {
        let snapped = snap_to_step(value, step, min);
        prop_assert!((snapped - value).abs() <= step / 2.0 + 1e-9);
    }

    #[test]
    fn continuous_mode_is_passthrough(value in -1e6..1e6_f64, min in -1e3..1e3_f64) {
        prop_assert_eq!(snap_to_step(value, 0.0, min), value);
    }

    #[test]
    fn snap_always_returns_a_number(
        value in -1e6..1e6_f64,
        step in 1e-6..1e3_f64,
        min in -1e3..1e3_f64,
    ) {
        prop_assert!(snap_to_step(value, step, min).is_finite());
    }
}

// ── 3. Position linearity ────────────────────────────────────────────

proptest! {
    #[test]
    fn left_edge_maps_to_min((min, max) in arb_range(), b in arb_box()) {
        prop_assert_eq!(value_from_page_x(b.left, min, max, &b), min);
    }

    #[test]
    fn right_edge_maps_to_max((min, max) in arb_range(), b in arb_box()) {
        let v = value_from_page_x(b.left + b.width, min, max, &b);
        prop_assert!((v - max).abs() <= 1e-9 * max.abs().max(1.0));
    }

    #[test]
    fn pipeline_result_in_range(
        (min, max) in arb_range(),
        step in arb_step(),
        b in arb_box(),
        page_x in -5000.0..5000.0_f64,
    ) {
        let v = value_from_interaction(&PointerEvent::mouse(page_x), step, min, max, &b);
        prop_assert!(v >= min && v <= max);
    }
}

// ── 4. Controller invariant ──────────────────────────────────────────

proptest! {
    #[test]
    fn committed_value_stays_in_range(
        (min, max) in arb_range(),
        step in arb_step(),
        b in arb_box(),
        xs in prop::collection::vec(-5000.0..5000.0_f64, 1..20),
    ) {
        let config = SliderConfig { min, max, step, ..SliderConfig::default() };
        let mut host = RecordingHost::new(config, b);
        let mut ctl = InteractionController::new();

        let mut iter = xs.iter();
        if let Some(first) = iter.next() {
            ctl.on_press_start(&mut host, &PointerEvent::mouse(*first), ValueType::Single, min, max);
        }
        for x in iter {
            ctl.on_press_move(&mut host, &PointerEvent::mouse(*x), ValueType::Single, min, max);
            let v = ctl.value(ValueType::Single);
            prop_assert!(v >= min && v <= max);
        }
        ctl.on_press_end(&mut host);
        prop_assert!(host.active_captures().is_empty());
    }
}

// ── 5. Step validation ───────────────────────────────────────────────

proptest! {
    #[test]
    fn negative_steps_fall_back_to_one(step in -1e6..-1e-9_f64) {
        let v = validate_step(step);
        prop_assert_eq!(v.step, 1.0);
        prop_assert!(v.corrected);
    }

    #[test]
    fn non_negative_steps_are_kept(step in 0.0..1e6_f64) {
        let v = validate_step(step);
        prop_assert_eq!(v.step, step);
        prop_assert!(!v.corrected);
    }

    #[test]
    fn text_steps_fall_back_to_one(s in "[a-z0-9]{0,8}") {
        let v = validate_step(s.as_str());
        prop_assert_eq!(v.step, 1.0);
        prop_assert!(v.corrected);
    }
}
