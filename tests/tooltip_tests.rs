use approx::assert_abs_diff_eq;
use donut_chart::ChartError;
use donut_chart::core::BoundingBox;
use donut_chart::interaction::{
    PointerEvent, TooltipConfig, TooltipContainer, TooltipSize, create_tooltip,
};
use proptest::prelude::*;

fn container() -> TooltipContainer {
    TooltipContainer::new(BoundingBox::new(100.0, 50.0, 400.0, 300.0))
}

#[test]
fn create_tooltip_without_container_is_noop() {
    assert!(create_tooltip(None, TooltipConfig::default()).is_none());
}

#[test]
fn create_tooltip_creates_hidden_node_lazily() {
    let mut container = container();
    assert!(container.tooltip().is_none());

    let _tooltip = create_tooltip(Some(&mut container), TooltipConfig::default())
        .expect("container present");
    let node = container.tooltip().expect("node created");
    assert!(!node.is_visible());
    assert_eq!(node.class_name(), "chart-tooltip");
    assert_eq!(node.opacity(), "0");
}

#[test]
fn show_positions_relative_to_container_plus_offset() {
    let mut container = container();
    let tooltip = create_tooltip(Some(&mut container), TooltipConfig::default())
        .expect("container present");

    tooltip.show(
        &mut container,
        &PointerEvent::new(150.0, 100.0),
        "BTC: $1200 (40%)",
    );
    let node = container.tooltip().expect("node");
    assert!(node.is_visible());
    assert_eq!(node.content(), "BTC: $1200 (40%)");
    assert_abs_diff_eq!(node.position().x, 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(node.position().y, 60.0, epsilon = 1e-9);
    assert_eq!(node.transform(), "translate(60px, 60px)");
}

#[test]
fn show_near_edge_clamps_inside_container_margin() {
    let mut container = container();
    let config = TooltipConfig::default();
    let size = config.estimate_size("BTC: $1200 (40%)");
    let tooltip = create_tooltip(Some(&mut container), config).expect("container present");

    tooltip.show(
        &mut container,
        &PointerEvent::new(480.0, 330.0),
        "BTC: $1200 (40%)",
    );
    let position = container.tooltip().expect("node").position();
    assert_abs_diff_eq!(position.x, 400.0 - size.width - 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(position.y, 300.0 - size.height - 10.0, epsilon = 1e-9);
}

#[test]
fn host_measured_size_overrides_estimate() {
    let mut container = container();
    let tooltip = create_tooltip(Some(&mut container), TooltipConfig::default())
        .expect("container present");
    tooltip.show(&mut container, &PointerEvent::new(150.0, 100.0), "x");
    assert!(container.set_measured_tooltip_size(TooltipSize {
        width: 100.0,
        height: 40.0,
    }));

    tooltip.show(&mut container, &PointerEvent::new(495.0, 345.0), "x");
    let position = container.tooltip().expect("node").position();
    assert_abs_diff_eq!(position.x, 290.0, epsilon = 1e-9);
    assert_abs_diff_eq!(position.y, 250.0, epsilon = 1e-9);
}

#[test]
fn stale_measurement_is_dropped_when_content_changes() {
    let mut container = container();
    let config = TooltipConfig::default();
    let long_content = "ETH: $18250 (61%) of 30k";
    let long_size = config.estimate_size(long_content);
    let tooltip = create_tooltip(Some(&mut container), config).expect("container present");

    tooltip.show(&mut container, &PointerEvent::new(150.0, 100.0), "x");
    assert!(container.set_measured_tooltip_size(TooltipSize {
        width: 20.0,
        height: 20.0,
    }));

    tooltip.show(&mut container, &PointerEvent::new(480.0, 100.0), long_content);
    let position = container.tooltip().expect("node").position();
    assert_abs_diff_eq!(position.x, 400.0 - long_size.width - 10.0, epsilon = 1e-9);
    assert!(position.x + long_size.width <= 400.0 - 10.0 + 1e-9);
}

#[test]
fn hide_keeps_node_for_reuse() {
    let mut container = container();
    let tooltip = create_tooltip(Some(&mut container), TooltipConfig::default())
        .expect("container present");
    let event = PointerEvent::new(200.0, 200.0);

    tooltip.show(&mut container, &event, "first");
    tooltip.hide(&mut container);
    let node = container.tooltip().expect("node survives hide");
    assert!(!node.is_visible());
    assert_eq!(node.content(), "first");

    tooltip.show(&mut container, &event, "second");
    let node = container.tooltip().expect("same node");
    assert!(node.is_visible());
    assert_eq!(node.content(), "second");
}

#[test]
fn update_moves_without_changing_visibility() {
    let mut container = container();
    let tooltip = create_tooltip(Some(&mut container), TooltipConfig::default())
        .expect("container present");

    tooltip.update(&mut container, &PointerEvent::new(200.0, 200.0), "moved");
    let node = container.tooltip().expect("node");
    assert!(!node.is_visible());
    assert_eq!(node.content(), "moved");
    assert_abs_diff_eq!(node.position().x, 110.0, epsilon = 1e-9);
}

#[test]
fn invalid_config_json_is_rejected() {
    let err = TooltipConfig::from_json_str(r#"{"max_width_px": -5.0}"#)
        .expect_err("negative width must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let config = TooltipConfig::from_json_str(r#"{"margin_px": 4.0}"#).expect("partial json");
    assert_eq!(config.margin_px, 4.0);
    assert_eq!(config.class_name, "chart-tooltip");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn tooltip_never_crosses_right_or_bottom_margin(
        left in -200.0f64..200.0,
        top in -200.0f64..200.0,
        width in 250.0f64..1200.0,
        height in 120.0f64..800.0,
        pointer_x_ratio in 0.0f64..=1.0,
        pointer_y_ratio in 0.0f64..=1.0,
        content_len in 0usize..60,
    ) {
        let bounds = BoundingBox::new(left, top, width, height);
        let mut container = TooltipContainer::new(bounds);
        let config = TooltipConfig::default();
        let content = "x".repeat(content_len);
        let size = config.estimate_size(&content);
        let tooltip = create_tooltip(Some(&mut container), config).expect("container present");

        let event = PointerEvent::new(
            left + width * pointer_x_ratio,
            top + height * pointer_y_ratio,
        );
        tooltip.show(&mut container, &event, &content);
        let position = container.tooltip().expect("node").position();

        prop_assert!(position.x >= 0.0);
        prop_assert!(position.y >= 0.0);
        prop_assert!(position.x + size.width <= width - 10.0 + 1e-9);
        prop_assert!(position.y + size.height <= height - 10.0 + 1e-9);
    }
}
