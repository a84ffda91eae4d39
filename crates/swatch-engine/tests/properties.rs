//! Property-based tests for the gradient model and stop engine
//!
//! These check the invariants every edit has to keep:
//! - canonical text parses back to the same kind, direction and stops
//! - stops stay sorted after inserts and repositions
//! - clamping is idempotent and always lands in 0..=100
//! - inserted colors follow the neighbor policy

use proptest::prelude::*;
use swatch_engine::adapter::{parse_model, to_text};
use swatch_engine::paint::{GradientKind, GradientModel, GradientStop, RadialShape, Rgba};
use swatch_engine::session::{EditError, GradientEditor};
use swatch_engine::stops::{
    clamp_percent, insert_stop, is_sorted, remove_stop, reposition_stop, sort_stops,
};

/// Alphas that survive a text round trip exactly (two decimals, like picker output)
fn alpha_strategy() -> impl Strategy<Value = f32> {
    (0u8..=100).prop_map(|n| n as f32 / 100.0)
}

fn color_strategy() -> impl Strategy<Value = Rgba> {
    (any::<u8>(), any::<u8>(), any::<u8>(), alpha_strategy())
        .prop_map(|(r, g, b, a)| Rgba::new(r, g, b, a))
}

fn stops_strategy() -> impl Strategy<Value = Vec<GradientStop>> {
    prop::collection::vec((color_strategy(), 0u8..=100), 2..8).prop_map(|pairs| {
        let mut stops: Vec<_> = pairs.into_iter().map(|(c, p)| GradientStop::new(c, p)).collect();
        sort_stops(&mut stops);
        stops
    })
}

fn model_strategy() -> impl Strategy<Value = GradientModel> {
    (
        prop_oneof![Just(GradientKind::Linear), Just(GradientKind::Radial)],
        any::<i32>(),
        prop_oneof![Just(RadialShape::Ellipse), Just(RadialShape::Circle)],
        stops_strategy(),
    )
        .prop_map(|(kind, angle, shape, stops)| GradientModel { kind, angle, shape, stops })
}

fn pairs(model: &GradientModel) -> Vec<(Rgba, u8)> {
    model.stops.iter().map(|s| (s.color, s.position)).collect()
}

proptest! {
    #[test]
    fn canonical_text_round_trips(model in model_strategy()) {
        let back = parse_model(&to_text(&model)).unwrap();
        prop_assert_eq!(back.kind, model.kind);
        prop_assert_eq!(back.direction(), model.direction());
        prop_assert_eq!(pairs(&back), pairs(&model));
    }

    #[test]
    fn clamp_is_idempotent(x in prop::num::f32::ANY) {
        let once = clamp_percent(x);
        prop_assert!(once <= 100);
        prop_assert_eq!(clamp_percent(once as f32), once);
    }

    #[test]
    fn insert_keeps_sorted(mut stops in stops_strategy(), raw in -50.0f32..150.0) {
        let id = insert_stop(&mut stops, raw);
        prop_assert!(is_sorted(&stops));
        prop_assert!(stops.iter().any(|s| s.id == id));
    }

    #[test]
    fn reposition_keeps_sorted(
        mut stops in stops_strategy(),
        pick in any::<prop::sample::Index>(),
        raw in -50.0f32..150.0,
    ) {
        let id = stops[pick.index(stops.len())].id;
        let position = reposition_stop(&mut stops, id, raw).unwrap();
        prop_assert_eq!(position, clamp_percent(raw));
        prop_assert!(is_sorted(&stops));
    }

    #[test]
    fn insert_outside_copies_edge_color(
        a in color_strategy(),
        b in color_strategy(),
        raw in 0.0f32..20.0,
    ) {
        let mut stops = vec![GradientStop::new(a, 20), GradientStop::new(b, 80)];
        insert_stop(&mut stops, raw);
        prop_assert_eq!(stops[0].color, a);

        let mut stops = vec![GradientStop::new(a, 20), GradientStop::new(b, 80)];
        insert_stop(&mut stops, 100.0 - raw);
        prop_assert_eq!(stops[2].color, b);
    }

    #[test]
    fn insert_midpoint_is_channel_mean(a in color_strategy(), b in color_strategy()) {
        let mut stops = vec![GradientStop::new(a, 0), GradientStop::new(b, 100)];
        insert_stop(&mut stops, 50.0);
        let mid = stops[1].color;
        let mean = |x: u8, y: u8| (x as f32 + y as f32) / 2.0;
        prop_assert!((mid.r as f32 - mean(a.r, b.r)).abs() <= 0.5);
        prop_assert!((mid.g as f32 - mean(a.g, b.g)).abs() <= 0.5);
        prop_assert!((mid.b as f32 - mean(a.b, b.b)).abs() <= 0.5);
        prop_assert!((mid.a - (a.a + b.a) / 2.0).abs() <= 1e-6);
    }
}

#[test]
fn minimum_stop_count_is_a_policy() {
    let mut editor = GradientEditor::new();
    let before = editor.value();
    let id = editor.stops()[0].id;
    assert!(matches!(editor.remove_stop(id), Err(EditError::TooFewStops { .. })));
    assert_eq!(editor.value(), before);

    // The engine itself has no such rule.
    let mut stops = editor.model().stops.clone();
    assert!(remove_stop(&mut stops, id).is_some());
    assert_eq!(stops.len(), 1);
}

#[test]
fn white_to_black_midpoint() {
    let mut stops = vec![
        GradientStop::new(Rgba::opaque_white(), 0),
        GradientStop::new(Rgba::black(), 100),
    ];
    insert_stop(&mut stops, 50.0);
    assert_eq!(stops.len(), 3);
    assert_eq!(stops[1].position, 50);
    assert_eq!(stops[1].color, Rgba::new(128, 128, 128, 1.0));
    assert!(is_sorted(&stops));
}
