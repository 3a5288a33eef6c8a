//! Core types for the resize engine.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: resize directions, declared dimensions and their unit model, pixel
//! sizes, pointer events, and the configuration value types.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseDimensionError;
use crate::geometry::{Point, Rect};

// ============================================================================
// Directions
// ============================================================================

/// One of the eight resize handles: four edges and four corners.
///
/// Composite directions include both of their edges, e.g. `BottomRight`
/// resizes the bottom and the right edge at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

impl Direction {
    /// All directions in declaration order (edges first, then corners).
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
        Direction::TopRight,
        Direction::BottomRight,
        Direction::BottomLeft,
        Direction::TopLeft,
    ];

    pub fn has_top(self) -> bool {
        matches!(self, Direction::Top | Direction::TopRight | Direction::TopLeft)
    }

    pub fn has_right(self) -> bool {
        matches!(self, Direction::Right | Direction::TopRight | Direction::BottomRight)
    }

    pub fn has_bottom(self) -> bool {
        matches!(self, Direction::Bottom | Direction::BottomRight | Direction::BottomLeft)
    }

    pub fn has_left(self) -> bool {
        matches!(self, Direction::Left | Direction::TopLeft | Direction::BottomLeft)
    }

    /// True for the four corner handles.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Direction::TopRight | Direction::BottomRight | Direction::BottomLeft | Direction::TopLeft
        )
    }

    /// True when the direction moves the horizontal extent.
    pub fn is_horizontal(self) -> bool {
        self.has_left() || self.has_right()
    }

    /// True when the direction moves the vertical extent.
    pub fn is_vertical(self) -> bool {
        self.has_top() || self.has_bottom()
    }

    /// The camelCase handle name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::TopRight => "topRight",
            Direction::BottomRight => "bottomRight",
            Direction::BottomLeft => "bottomLeft",
            Direction::TopLeft => "topLeft",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Declared Dimensions
// ============================================================================

/// A declared length in the unit system the host configured.
///
/// Distinct from the resolved pixel length used for drag arithmetic: a
/// `Percent` width stays a percent across a drag, re-derived from the live
/// parent size after every recomputation.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Dimension {
    Px(f32),
    Percent(f32),
    Vw(f32),
    Vh(f32),
    Vmax(f32),
    Vmin(f32),
    #[default]
    Auto,
}

impl Dimension {
    pub fn is_auto(self) -> bool {
        matches!(self, Dimension::Auto)
    }

    /// Resolve to absolute pixels. `reference` is the relevant parent extent
    /// for percentages; viewport units resolve against `viewport`. `Auto`
    /// has no pixel value and passes through as `None`.
    pub fn resolve(self, reference: f32, viewport: NumberSize) -> Option<f32> {
        match self {
            Dimension::Px(v) => Some(v),
            Dimension::Percent(v) => Some(reference * v / 100.0),
            Dimension::Vw(v) => Some(viewport.width * v / 100.0),
            Dimension::Vh(v) => Some(viewport.height * v / 100.0),
            Dimension::Vmax(v) => Some(viewport.width.max(viewport.height) * v / 100.0),
            Dimension::Vmin(v) => Some(viewport.width.min(viewport.height) * v / 100.0),
            Dimension::Auto => None,
        }
    }

    /// The raw pixel value, if this is a `Px` dimension.
    pub fn as_px(self) -> Option<f32> {
        match self {
            Dimension::Px(v) => Some(v),
            _ => None,
        }
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Px(value)
    }
}

impl From<i32> for Dimension {
    fn from(value: i32) -> Self {
        Dimension::Px(value as f32)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Px(v) => write!(f, "{v}px"),
            Dimension::Percent(v) => write!(f, "{v}%"),
            Dimension::Vw(v) => write!(f, "{v}vw"),
            Dimension::Vh(v) => write!(f, "{v}vh"),
            Dimension::Vmax(v) => write!(f, "{v}vmax"),
            Dimension::Vmin(v) => write!(f, "{v}vmin"),
            Dimension::Auto => f.write_str("auto"),
        }
    }
}

impl FromStr for Dimension {
    type Err = ParseDimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDimensionError::Empty);
        }
        if s == "auto" {
            return Ok(Dimension::Auto);
        }
        // Unit suffixes are disjoint, so match order does not matter.
        let units: [(&str, fn(f32) -> Dimension); 6] = [
            ("px", Dimension::Px),
            ("%", Dimension::Percent),
            ("vmax", Dimension::Vmax),
            ("vmin", Dimension::Vmin),
            ("vw", Dimension::Vw),
            ("vh", Dimension::Vh),
        ];
        for (suffix, build) in units {
            if let Some(number) = s.strip_suffix(suffix) {
                return match number.trim().parse::<f32>() {
                    Ok(v) if v.is_finite() => Ok(build(v)),
                    _ => Err(ParseDimensionError::InvalidNumber(s.to_string())),
                };
            }
        }
        // No recognized suffix: accept a bare number as pixels.
        match s.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(Dimension::Px(v)),
            _ if s.ends_with(|c: char| c.is_ascii_alphabetic()) => {
                Err(ParseDimensionError::UnknownUnit(s.to_string()))
            }
            _ => Err(ParseDimensionError::InvalidNumber(s.to_string())),
        }
    }
}

// The wire form is a string/number union ("50%", "200px", "auto", 200), so
// serde goes through hand-written impls rather than a derived tag.
impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DimensionVisitor;

        impl<'de> Visitor<'de> for DimensionVisitor {
            type Value = Dimension;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a dimension string like \"50%\" or \"200px\"")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Dimension, E> {
                Ok(Dimension::Px(v as f32))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Dimension, E> {
                Ok(Dimension::Px(v as f32))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Dimension, E> {
                Ok(Dimension::Px(v as f32))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Dimension, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(DimensionVisitor)
    }
}

// ============================================================================
// Sizes
// ============================================================================

/// A declared size: what the host asked for, in the host's units.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: Dimension,
    pub height: Dimension,
}

impl Size {
    pub fn new(width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        Self { width: width.into(), height: height.into() }
    }

    pub const fn auto() -> Self {
        Self { width: Dimension::Auto, height: Dimension::Auto }
    }
}

/// A resolved size in raw pixels; the ground truth for all drag arithmetic.
/// Also used for the width/height deltas reported to resize hooks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberSize {
    pub width: f32,
    pub height: f32,
}

impl NumberSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The per-axis difference `self - origin`.
    pub fn delta_from(self, origin: NumberSize) -> NumberSize {
        NumberSize { width: self.width - origin.width, height: self.height - origin.height }
    }
}

// ============================================================================
// Pointer Events
// ============================================================================

/// The input device class behind a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A pointer event delivered by the host's event source.
///
/// Carries DOM-like `prevent_default` latching so the engine can stop a
/// cancelable touch move from also scrolling or zooming the hosting surface.
#[derive(Debug)]
pub struct PointerEvent {
    pub position: Point,
    pub source: PointerSource,
    cancelable: bool,
    prevented: Cell<bool>,
}

impl PointerEvent {
    pub fn mouse(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            source: PointerSource::Mouse,
            cancelable: true,
            prevented: Cell::new(false),
        }
    }

    pub fn touch(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            source: PointerSource::Touch,
            cancelable: true,
            prevented: Cell::new(false),
        }
    }

    pub fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    pub fn is_touch(&self) -> bool {
        self.source == PointerSource::Touch
    }

    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    /// Request that the host suppress the event's native gesture. No-op for
    /// non-cancelable events.
    pub fn prevent_default(&self) {
        if self.cancelable {
            self.prevented.set(true);
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

// ============================================================================
// Configuration Values
// ============================================================================

/// Aspect-ratio lock policy for a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AspectRatio {
    /// Width and height move independently
    #[default]
    Unlocked,
    /// Lock to the box's width/height ratio measured at drag start
    Locked,
    /// Lock to an explicit width/height ratio
    Fixed(f32),
}

impl AspectRatio {
    pub fn is_locked(self) -> bool {
        !matches!(self, AspectRatio::Unlocked)
    }
}

// Wire form is a bool-or-number union, like the declared-size strings.
impl Serialize for AspectRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AspectRatio::Unlocked => serializer.serialize_bool(false),
            AspectRatio::Locked => serializer.serialize_bool(true),
            AspectRatio::Fixed(ratio) => serializer.serialize_f32(*ratio),
        }
    }
}

impl<'de> Deserialize<'de> for AspectRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RatioVisitor;

        impl<'de> Visitor<'de> for RatioVisitor {
            type Value = AspectRatio;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean or a numeric width/height ratio")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<AspectRatio, E> {
                Ok(if v { AspectRatio::Locked } else { AspectRatio::Unlocked })
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<AspectRatio, E> {
                Ok(AspectRatio::Fixed(v as f32))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<AspectRatio, E> {
                Ok(AspectRatio::Fixed(v as f32))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<AspectRatio, E> {
                Ok(AspectRatio::Fixed(v as f32))
            }
        }

        deserializer.deserialize_any(RatioVisitor)
    }
}

/// What a drag may not extend past.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsTarget {
    /// The parent box's far edges
    Parent,
    /// The viewport edges
    Window,
    /// A host-designated external box, measured via `HostSurface::bounds_rect`
    External,
}

/// Explicit per-axis snap coordinates for the dragged extent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapPoints {
    pub x: Option<Vec<f32>>,
    pub y: Option<Vec<f32>>,
}

/// Dominant axis of the host's flex layout, when the box participates in one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

/// Flex-layout facts captured from the host at drag start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlexContext {
    pub direction: FlexDirection,
    pub basis: Dimension,
}

// ============================================================================
// Session Snapshots
// ============================================================================

/// Bounding-rectangle snapshots taken once at drag start, pre-divided by the
/// configured scale. The session's spatial frame is fixed here: pointer-move
/// recomputation reads these instead of re-measuring, trading staleness under
/// mid-drag reflow for consistency and per-move cost.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectSnapshots {
    /// The resizable box's own edges
    pub element: Rect,
    /// The parent box's origin (used for parent bounds)
    pub parent_origin: Point,
    /// The external boundary box's origin (used for external bounds)
    pub target_origin: Point,
}
