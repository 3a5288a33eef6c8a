//! Constraint resolution: the effective min/max envelope for a drag.
//!
//! Three inputs combine into the envelope applied on every pointer move:
//! declared min/max (possibly in percent or viewport units, re-resolved
//! against live measurements each move), the boundary target (parent,
//! window, or an external box), and the aspect-ratio lock, which converts
//! each axis's bounds into bounds on the other axis and intersects them.

use crate::constants::DEFAULT_MIN_SIZE;
use crate::geometry::clamp;
use crate::types::{BoundsTarget, Dimension, Direction, NumberSize, RectSnapshots};

/// Resolved per-axis limits in pixels. `None` means unconstrained.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeLimits {
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
}

/// Resolve declared min/max dimensions against the live parent and viewport
/// sizes. Re-run on every pointer move: the parent can reflow mid-drag
/// independently of the session's cached rectangles.
pub fn resolve_declared_limits(
    min_width: Option<Dimension>,
    min_height: Option<Dimension>,
    max_width: Option<Dimension>,
    max_height: Option<Dimension>,
    parent: NumberSize,
    viewport: NumberSize,
) -> SizeLimits {
    SizeLimits {
        min_width: min_width.and_then(|d| d.resolve(parent.width, viewport)),
        min_height: min_height.and_then(|d| d.resolve(parent.height, viewport)),
        max_width: max_width.and_then(|d| d.resolve(parent.width, viewport)),
        max_height: max_height.and_then(|d| d.resolve(parent.height, viewport)),
    }
}

/// Live extents needed to evaluate a boundary target. The position part of
/// the boundary comes from the session's cached `RectSnapshots`; the extent
/// part is measured live.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundaryExtents {
    pub parent: Option<NumberSize>,
    pub viewport: NumberSize,
    pub target: Option<NumberSize>,
}

/// Tighten `max_width`/`max_height` with the boundary-derived maximum.
///
/// The farthest extent is the boundary's far edge minus the box's near edge.
/// With `by_direction` set and a leading-edge drag (left/top), the box grows
/// away from the boundary's far edge, so the limit is measured from the
/// box's trailing edge back to the boundary's origin instead. Only finite
/// boundary values apply, and only when stricter than the declared max.
pub fn apply_boundary_limit(
    max_width: Option<f32>,
    max_height: Option<f32>,
    bounds: Option<BoundsTarget>,
    by_direction: bool,
    direction: Direction,
    snapshots: &RectSnapshots,
    extents: &BoundaryExtents,
) -> (Option<f32>, Option<f32>) {
    let width_by_direction = by_direction && direction.has_left();
    let height_by_direction = by_direction && direction.has_top();
    let element = snapshots.element;

    let mut bound_width = None;
    let mut bound_height = None;
    match bounds {
        Some(BoundsTarget::Parent) => {
            if let Some(parent) = extents.parent {
                bound_width = Some(if width_by_direction {
                    element.right - snapshots.parent_origin.x
                } else {
                    parent.width + (snapshots.parent_origin.x - element.left)
                });
                bound_height = Some(if height_by_direction {
                    element.bottom - snapshots.parent_origin.y
                } else {
                    parent.height + (snapshots.parent_origin.y - element.top)
                });
            }
        }
        Some(BoundsTarget::Window) => {
            bound_width = Some(if width_by_direction {
                element.right
            } else {
                extents.viewport.width - element.left
            });
            bound_height = Some(if height_by_direction {
                element.bottom
            } else {
                extents.viewport.height - element.top
            });
        }
        Some(BoundsTarget::External) => {
            if let Some(target) = extents.target {
                bound_width = Some(if width_by_direction {
                    element.right - snapshots.target_origin.x
                } else {
                    target.width + (snapshots.target_origin.x - element.left)
                });
                bound_height = Some(if height_by_direction {
                    element.bottom - snapshots.target_origin.y
                } else {
                    target.height + (snapshots.target_origin.y - element.top)
                });
            }
        }
        None => {}
    }

    (
        tighten(max_width, bound_width),
        tighten(max_height, bound_height),
    )
}

fn tighten(declared: Option<f32>, bound: Option<f32>) -> Option<f32> {
    match bound.filter(|b| b.is_finite()) {
        Some(bound) => Some(match declared {
            Some(declared) if declared < bound => declared,
            _ => bound,
        }),
        None => declared,
    }
}

/// Aspect-ratio lock parameters resolved at drag start. `extra_width` and
/// `extra_height` are non-ratio chrome (headers, padding) sitting around the
/// ratio-locked content box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectLock {
    pub ratio: f32,
    pub extra_width: f32,
    pub extra_height: f32,
}

impl AspectLock {
    /// Width of the full box for a given height under this lock.
    pub fn width_for_height(&self, height: f32) -> f32 {
        (height - self.extra_height) * self.ratio + self.extra_width
    }

    /// Height of the full box for a given width under this lock.
    pub fn height_for_width(&self, width: f32) -> f32 {
        (width - self.extra_width) / self.ratio + self.extra_height
    }
}

/// Clamp a candidate size into the effective envelope.
///
/// Unset minimums default to [`DEFAULT_MIN_SIZE`]; an unset or negative
/// maximum leaves the axis unbounded. With a lock, each axis's bounds are
/// also translated through the ratio into bounds on the other axis and the
/// two are intersected, so both the direct constraint and the lock hold
/// simultaneously.
pub fn clamp_to_limits(
    width: f32,
    height: f32,
    min: (Option<f32>, Option<f32>),
    max: (Option<f32>, Option<f32>),
    lock: Option<AspectLock>,
) -> NumberSize {
    let min_width = min.0.unwrap_or(DEFAULT_MIN_SIZE);
    let min_height = min.1.unwrap_or(DEFAULT_MIN_SIZE);
    let max_width = match max.0 {
        Some(m) if m >= 0.0 => m,
        _ => width,
    };
    let max_height = match max.1 {
        Some(m) if m >= 0.0 => m,
        _ => height,
    };

    match lock {
        Some(lock) => {
            let min_width_from_height = lock.width_for_height(min_height);
            let max_width_from_height = lock.width_for_height(max_height);
            let min_height_from_width = lock.height_for_width(min_width);
            let max_height_from_width = lock.height_for_width(max_width);
            let locked_min_width = min_width.max(min_width_from_height);
            let locked_max_width = max_width.min(max_width_from_height);
            let locked_min_height = min_height.max(min_height_from_width);
            let locked_max_height = max_height.min(max_height_from_width);
            NumberSize {
                width: clamp(width, locked_min_width, locked_max_width),
                height: clamp(height, locked_min_height, locked_max_height),
            }
        }
        None => NumberSize {
            width: clamp(width, min_width, max_width),
            height: clamp(height, min_height, max_height),
        },
    }
}
