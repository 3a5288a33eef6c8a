//! Unit tests for declared-dimension resolution and serialization.

use resizable::{AspectRatio, Dimension, NumberSize};

const VIEWPORT: NumberSize = NumberSize { width: 1000.0, height: 800.0 };

#[test]
fn test_resolve_pixels_pass_through() {
    assert_eq!(Dimension::Px(240.0).resolve(400.0, VIEWPORT), Some(240.0));
}

#[test]
fn test_resolve_percent_against_reference() {
    assert_eq!(Dimension::Percent(50.0).resolve(400.0, VIEWPORT), Some(200.0));
    assert_eq!(Dimension::Percent(150.0).resolve(400.0, VIEWPORT), Some(600.0));
}

#[test]
fn test_resolve_viewport_units() {
    assert_eq!(Dimension::Vw(10.0).resolve(400.0, VIEWPORT), Some(100.0));
    assert_eq!(Dimension::Vh(10.0).resolve(400.0, VIEWPORT), Some(80.0));
    assert_eq!(Dimension::Vmax(10.0).resolve(400.0, VIEWPORT), Some(100.0));
    assert_eq!(Dimension::Vmin(10.0).resolve(400.0, VIEWPORT), Some(80.0));
}

#[test]
fn test_resolve_auto_passes_through() {
    assert_eq!(Dimension::Auto.resolve(400.0, VIEWPORT), None);
}

#[test]
fn test_dimension_serializes_to_declared_string() {
    let json = serde_json::to_value(Dimension::Px(200.0)).unwrap();
    assert_eq!(json, serde_json::json!("200px"));
    let json = serde_json::to_value(Dimension::Percent(62.5)).unwrap();
    assert_eq!(json, serde_json::json!("62.5%"));
    let json = serde_json::to_value(Dimension::Auto).unwrap();
    assert_eq!(json, serde_json::json!("auto"));
}

#[test]
fn test_dimension_deserializes_from_string_or_number() {
    let from_number: Dimension = serde_json::from_str("200").unwrap();
    assert_eq!(from_number, Dimension::Px(200.0));
    let from_float: Dimension = serde_json::from_str("37.5").unwrap();
    assert_eq!(from_float, Dimension::Px(37.5));
    let from_string: Dimension = serde_json::from_str("\"50%\"").unwrap();
    assert_eq!(from_string, Dimension::Percent(50.0));
    let auto: Dimension = serde_json::from_str("\"auto\"").unwrap();
    assert_eq!(auto, Dimension::Auto);
}

#[test]
fn test_dimension_rejects_malformed_strings() {
    assert!(serde_json::from_str::<Dimension>("\"10em\"").is_err());
    assert!(serde_json::from_str::<Dimension>("\"px\"").is_err());
}

#[test]
fn test_aspect_ratio_wire_form_is_bool_or_number() {
    assert_eq!(serde_json::to_value(AspectRatio::Unlocked).unwrap(), serde_json::json!(false));
    assert_eq!(serde_json::to_value(AspectRatio::Locked).unwrap(), serde_json::json!(true));

    let unlocked: AspectRatio = serde_json::from_str("false").unwrap();
    assert_eq!(unlocked, AspectRatio::Unlocked);
    let locked: AspectRatio = serde_json::from_str("true").unwrap();
    assert_eq!(locked, AspectRatio::Locked);
    let fixed: AspectRatio = serde_json::from_str("1.5").unwrap();
    assert_eq!(fixed, AspectRatio::Fixed(1.5));
}
