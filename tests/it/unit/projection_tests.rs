//! Unit tests for the size/style projector.

use crate::helpers::TestWidgetBuilder;
use resizable::{Dimension, Size};

#[test]
fn test_auto_box_projects_auto() {
    let widget = TestWidgetBuilder::new().build();
    let style = widget.size_style();
    assert_eq!(style.width, Dimension::Auto);
    assert_eq!(style.height, Dimension::Auto);
    assert_eq!(style.flex_basis, None);
}

#[test]
fn test_default_size_projects_as_declared() {
    let widget = TestWidgetBuilder::new()
        .with_options(|o| o.default_size = Some(Size::new(200, 150)))
        .build();
    let style = widget.size_style();
    assert_eq!(style.width, Dimension::Px(200.0));
    assert_eq!(style.height, Dimension::Px(150.0));
}

#[test]
fn test_controlled_size_wins_while_idle() {
    let mut widget = TestWidgetBuilder::new()
        .with_options(|o| o.size = Some(Size::new(300, 200)))
        .build();
    // Imperative drift away from the controlled value...
    widget.update_size(Size::new(999, 999));
    // ...is not presented: the controlled size is authoritative while idle.
    let style = widget.size_style();
    assert_eq!(style.width, Dimension::Px(300.0));
    assert_eq!(style.height, Dimension::Px(200.0));
}

#[test]
fn test_percent_configured_axis_re_expresses_pixels_as_percent() {
    let mut widget = TestWidgetBuilder::new()
        .with_parent(0.0, 0.0, 400.0, 300.0)
        .with_options(|o| {
            o.default_size = Some(Size::new(
                Dimension::Percent(50.0),
                Dimension::Percent(50.0),
            ))
        })
        .build();
    // State materialized to pixels (as it does mid-drag); the projector
    // converts back to a percent of the live parent.
    widget.update_size(Size::new(100, 75));
    let style = widget.size_style();
    assert_eq!(style.width, Dimension::Percent(25.0));
    assert_eq!(style.height, Dimension::Percent(25.0));
}

#[test]
fn test_percent_state_under_percent_config_passes_through() {
    let mut widget = TestWidgetBuilder::new()
        .with_parent(0.0, 0.0, 400.0, 300.0)
        .with_options(|o| {
            o.default_size = Some(Size::new(
                Dimension::Percent(50.0),
                Dimension::Percent(50.0),
            ))
        })
        .build();
    widget.update_size(Size::new(Dimension::Percent(62.5), Dimension::Percent(40.0)));
    let style = widget.size_style();
    assert_eq!(style.width, Dimension::Percent(62.5));
    assert_eq!(style.height, Dimension::Percent(40.0));
}

#[test]
fn test_unparented_percent_projection_uses_viewport() {
    let mut widget = TestWidgetBuilder::new()
        .without_parent()
        .with_viewport(1000.0, 800.0)
        .with_options(|o| {
            o.default_size = Some(Size::new(Dimension::Percent(50.0), Dimension::Auto))
        })
        .build();
    widget.update_size(Size::new(Dimension::Px(250.0), Dimension::Auto));
    let style = widget.size_style();
    assert_eq!(style.width, Dimension::Percent(25.0));
    assert_eq!(style.height, Dimension::Auto);
}
