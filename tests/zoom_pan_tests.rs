use approx::assert_abs_diff_eq;
use donut_chart::ChartError;
use donut_chart::core::BoundingBox;
use donut_chart::interaction::{
    Element, GestureEnd, InteractionMode, ListenerKind, ListenerRegistry, PointerEvent, Surface,
    WheelEvent, ZoomPan, ZoomPanConfig, add_zoom_pan,
};
use proptest::prelude::*;

fn surface(left: f64, top: f64) -> (Surface, ListenerRegistry) {
    let document = ListenerRegistry::new();
    let surface = Surface::new(
        BoundingBox::new(left, top, 800.0, 600.0),
        Element::new("g"),
        document.clone(),
    );
    (surface, document)
}

fn attach(surface: &mut Surface) -> ZoomPan {
    add_zoom_pan(Some(surface), ZoomPanConfig::default())
        .expect("default config is valid")
        .expect("surface present")
}

#[test]
fn attaching_writes_identity_transform() {
    let (mut surface, _) = surface(0.0, 0.0);
    let zoom_pan = attach(&mut surface);
    assert_eq!(surface.transform(), Some("translate(0,0) scale(1)"));
    assert_eq!(zoom_pan.mode(), InteractionMode::Idle);
}

#[test]
fn missing_surface_is_noop() {
    let zoom_pan = add_zoom_pan(None, ZoomPanConfig::default()).expect("valid config");
    assert!(zoom_pan.is_none());
}

#[test]
fn invalid_config_is_rejected_before_attaching() {
    let (mut surface, _) = surface(0.0, 0.0);
    let config = ZoomPanConfig {
        min_scale: 0.0,
        ..ZoomPanConfig::default()
    };
    let err = add_zoom_pan(Some(&mut surface), config).expect_err("zero min scale");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
    assert_eq!(surface.transform(), None);
}

#[test]
fn wheel_zooms_toward_cursor() {
    let (mut surface, _) = surface(10.0, 20.0);
    let mut zoom_pan = attach(&mut surface);

    zoom_pan.wheel(&mut surface, &WheelEvent::new(410.0, 320.0, -100.0));
    let state = zoom_pan.state();
    assert_abs_diff_eq!(state.scale, 1.1, epsilon = 1e-12);
    assert_abs_diff_eq!(state.origin_x, -40.0, epsilon = 1e-9);
    assert_abs_diff_eq!(state.origin_y, -30.0, epsilon = 1e-9);

    let transform = surface.transform().expect("transform written");
    assert_eq!(transform.matches("translate(").count(), 1);
    assert_eq!(transform.matches("scale(").count(), 1);
}

#[test]
fn wheel_without_vertical_delta_keeps_scale() {
    let (mut surface, _) = surface(0.0, 0.0);
    let mut zoom_pan = attach(&mut surface);
    zoom_pan.wheel(&mut surface, &WheelEvent::new(100.0, 100.0, 0.0));
    assert_eq!(zoom_pan.scale(), 1.0);
    assert_eq!(surface.transform(), Some("translate(0,0) scale(1)"));
}

#[test]
fn zoom_commands_step_and_clamp() {
    let (mut surface, _) = surface(0.0, 0.0);
    let mut zoom_pan = attach(&mut surface);

    for step in 1..=30 {
        zoom_pan.zoom_in(&mut surface);
        let expected = (1.0 + 0.1 * f64::from(step)).min(3.0);
        assert_abs_diff_eq!(zoom_pan.scale(), expected, epsilon = 1e-9);
    }
    assert_eq!(zoom_pan.scale(), 3.0);

    for _ in 0..40 {
        zoom_pan.zoom_out(&mut surface);
    }
    assert_eq!(zoom_pan.scale(), 0.5);
    assert_eq!(zoom_pan.state().origin_x, 0.0);
}

#[test]
fn drag_pans_and_releases_document_listeners() {
    let (mut surface, document) = surface(0.0, 0.0);
    let mut zoom_pan = attach(&mut surface);

    zoom_pan.pointer_down(&mut surface, &PointerEvent::new(100.0, 100.0));
    assert_eq!(zoom_pan.mode(), InteractionMode::Dragging);
    assert_eq!(document.active_count(), 4);
    assert_eq!(document.count_of(ListenerKind::PointerMove), 1);

    assert!(zoom_pan.pointer_move(&mut surface, &PointerEvent::new(130.0, 90.0)));
    assert_eq!(surface.transform(), Some("translate(30,-10) scale(1)"));

    zoom_pan.pointer_up(&mut surface);
    assert_eq!(zoom_pan.mode(), InteractionMode::Idle);
    assert_eq!(document.active_count(), 0);

    assert!(!zoom_pan.pointer_move(&mut surface, &PointerEvent::new(300.0, 300.0)));
    assert_eq!(surface.transform(), Some("translate(30,-10) scale(1)"));
}

#[test]
fn repeated_drags_do_not_accumulate_listeners() {
    let (mut surface, document) = surface(0.0, 0.0);
    let mut zoom_pan = attach(&mut surface);

    for round in 0..5 {
        let start = PointerEvent::new(50.0 + f64::from(round), 50.0);
        zoom_pan.pointer_down(&mut surface, &start);
        zoom_pan.pointer_down(&mut surface, &start);
        assert_eq!(document.active_count(), 4);
        zoom_pan.pointer_up(&mut surface);
        assert_eq!(document.active_count(), 0);
    }
}

#[test]
fn every_abnormal_gesture_end_returns_to_idle() {
    let ends = [
        GestureEnd::PointerCancel,
        GestureEnd::WindowBlur,
        GestureEnd::PointerLeftWindow,
    ];
    for end in ends {
        let (mut surface, document) = surface(0.0, 0.0);
        let mut zoom_pan = attach(&mut surface);
        zoom_pan.pointer_down(&mut surface, &PointerEvent::new(10.0, 10.0));
        match end {
            GestureEnd::PointerCancel => zoom_pan.pointer_cancel(&mut surface),
            GestureEnd::WindowBlur => zoom_pan.window_blur(&mut surface),
            GestureEnd::PointerLeftWindow => zoom_pan.pointer_left_window(&mut surface),
            GestureEnd::PointerUp => zoom_pan.pointer_up(&mut surface),
        }
        assert_eq!(zoom_pan.mode(), InteractionMode::Idle, "{end:?}");
        assert_eq!(document.active_count(), 0, "{end:?}");
    }
}

#[test]
fn ending_without_a_drag_is_noop() {
    let (mut surface, document) = surface(0.0, 0.0);
    let mut zoom_pan = attach(&mut surface);
    zoom_pan.end_gesture(&mut surface, GestureEnd::PointerUp);
    assert_eq!(zoom_pan.mode(), InteractionMode::Idle);
    assert_eq!(document.active_count(), 0);
}

#[test]
fn wheel_during_drag_keeps_pan_continuous() {
    let (mut surface, document) = surface(0.0, 0.0);
    let mut zoom_pan = attach(&mut surface);

    zoom_pan.pointer_down(&mut surface, &PointerEvent::new(100.0, 100.0));
    zoom_pan.wheel(&mut surface, &WheelEvent::new(100.0, 100.0, -1.0));
    let zoomed = zoom_pan.state();
    assert_abs_diff_eq!(zoomed.origin_x, -10.0, epsilon = 1e-9);
    assert_eq!(zoom_pan.mode(), InteractionMode::Dragging);
    assert_eq!(document.active_count(), 4);

    assert!(zoom_pan.pointer_move(&mut surface, &PointerEvent::new(100.0, 100.0)));
    let moved = zoom_pan.state();
    assert_abs_diff_eq!(moved.origin_x, zoomed.origin_x, epsilon = 1e-9);
    assert_abs_diff_eq!(moved.origin_y, zoomed.origin_y, epsilon = 1e-9);
    assert_abs_diff_eq!(moved.scale, 1.1, epsilon = 1e-12);
}

#[test]
fn reset_restores_identity() {
    let (mut surface, _) = surface(0.0, 0.0);
    let mut zoom_pan = attach(&mut surface);
    zoom_pan.wheel(&mut surface, &WheelEvent::new(200.0, 150.0, -3.0));
    zoom_pan.pointer_down(&mut surface, &PointerEvent::new(0.0, 0.0));
    zoom_pan.pointer_move(&mut surface, &PointerEvent::new(40.0, 25.0));
    zoom_pan.pointer_up(&mut surface);

    zoom_pan.reset(&mut surface);
    assert_eq!(surface.transform(), Some("translate(0,0) scale(1)"));
}

#[test]
fn initial_and_reset_scale_respect_configured_bounds() {
    let (mut surface, _) = surface(0.0, 0.0);
    let config = ZoomPanConfig {
        min_scale: 1.5,
        max_scale: 3.0,
        zoom_speed: 0.1,
    };
    let mut zoom_pan = add_zoom_pan(Some(&mut surface), config)
        .expect("valid config")
        .expect("surface present");
    assert_eq!(zoom_pan.scale(), 1.5);
    assert_eq!(surface.transform(), Some("translate(0,0) scale(1.5)"));

    zoom_pan.zoom_in(&mut surface);
    zoom_pan.reset(&mut surface);
    assert_eq!(zoom_pan.scale(), 1.5);

    let (mut shrunk, _) = self::surface(0.0, 0.0);
    let config = ZoomPanConfig {
        min_scale: 0.2,
        max_scale: 0.8,
        zoom_speed: 0.1,
    };
    let mut zoom_pan = add_zoom_pan(Some(&mut shrunk), config)
        .expect("valid config")
        .expect("surface present");
    assert_eq!(zoom_pan.scale(), 0.8);
    zoom_pan.zoom_out(&mut shrunk);
    zoom_pan.reset(&mut shrunk);
    assert_eq!(zoom_pan.scale(), 0.8);
    assert_eq!(shrunk.transform(), Some("translate(0,0) scale(0.8)"));
}

#[test]
fn config_json_fills_missing_fields() {
    let config = ZoomPanConfig::from_json_str(r#"{"max_scale": 5.0}"#).expect("partial json");
    assert_eq!(config.max_scale, 5.0);
    assert_eq!(config.min_scale, 0.5);
    assert_eq!(config.zoom_speed, 0.1);

    let err = ZoomPanConfig::from_json_str(r#"{"min_scale": 4.0}"#).expect_err("min > max");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn wheel_keeps_content_point_under_cursor(
        cursor_x in 0.0f64..800.0,
        cursor_y in 0.0f64..600.0,
        deltas in prop::collection::vec(prop_oneof![Just(-1.0f64), Just(1.0f64)], 1..12),
    ) {
        let (mut surface, _) = surface(0.0, 0.0);
        let mut zoom_pan = attach(&mut surface);
        for delta in deltas {
            let before = zoom_pan.state();
            let content_x = (cursor_x - before.origin_x) / before.scale;
            let content_y = (cursor_y - before.origin_y) / before.scale;

            zoom_pan.wheel(&mut surface, &WheelEvent::new(cursor_x, cursor_y, delta));
            let after = zoom_pan.state();
            prop_assert!(after.scale >= 0.5 && after.scale <= 3.0);
            prop_assert!((after.origin_x + content_x * after.scale - cursor_x).abs() < 1e-6);
            prop_assert!((after.origin_y + content_y * after.scale - cursor_y).abs() < 1e-6);
        }
    }

    #[test]
    fn zoom_in_steps_saturate_at_max_scale(steps in 0usize..50) {
        let (mut surface, _) = surface(0.0, 0.0);
        let mut zoom_pan = attach(&mut surface);
        for _ in 0..steps {
            zoom_pan.zoom_in(&mut surface);
        }
        let expected = (1.0 + 0.1 * steps as f64).min(3.0);
        prop_assert!((zoom_pan.scale() - expected).abs() < 1e-9);
    }
}
