//! Pointer-move recomputation - the core sizing pipeline.
//!
//! ## Performance Notes
//!
//! Pointer-move fires at input rate (potentially 120+ times per second
//! while dragging) and must complete synchronously so the box tracks the
//! pointer. The pipeline is allocation-free; rectangle snapshots come from
//! the session instead of being re-measured.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use tracing::trace;

use crate::constraint::{self, AspectLock, BoundaryExtents};
use crate::geometry::{find_closest_snap, snap_to_grid, Point};
use crate::host::HostSurface;
use crate::input::state::DragSession;
use crate::profile_scope;
use crate::types::{Dimension, FlexDirection, NumberSize, PointerEvent};
use crate::widget::Resizable;

impl<H: HostSurface> Resizable<H> {
    /// Recompute the declared size for the current pointer position.
    ///
    /// The steps run in a fixed order; later steps narrow what earlier
    /// steps produce:
    ///
    /// 1. directional delta (aspect lock collapses it to one degree of freedom)
    /// 2. boundary envelope from the session's cached rectangles
    /// 3. explicit coordinate snapping, per axis
    /// 4. min/max clamp, ratio-intersected when locked
    /// 5. sticky grid snapping
    /// 6. declared-unit echo against live parent/viewport sizes
    /// 7. auto preservation for boxes that did not actually change
    /// 8. flex-basis mirror
    ///
    /// Returns `true` when the committed state changed (the resize hook
    /// fires only then). A move that lands on the same size is a no-op.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("handle_pointer_move");

        let Some(session) = self.state.resize.session().copied() else {
            return false;
        };

        // A cancelable touch move must not also scroll or zoom the hosting
        // surface mid-drag.
        if event.is_touch() {
            event.prevent_default();
        }

        let viewport = self.host.viewport_size();
        let parent_size = self.parent_size_or_viewport();

        // Declared limits re-resolve every move: the parent can reflow
        // mid-drag independently of the session's cached rectangles.
        let limits = constraint::resolve_declared_limits(
            self.options.min_width,
            self.options.min_height,
            self.options.max_width,
            self.options.max_height,
            parent_size,
            viewport,
        );

        let lock = self.aspect_lock(&session);

        let (mut new_width, mut new_height) = directional_size(
            &session,
            event.position,
            self.options.scale,
            self.options.resize_ratio.pair(),
            lock,
        );

        let extents = BoundaryExtents {
            parent: self.host.parent_size(),
            viewport,
            target: self
                .host
                .bounds_rect()
                .map(|r| NumberSize::new(r.width(), r.height())),
        };
        let (max_width, max_height) = constraint::apply_boundary_limit(
            limits.max_width,
            limits.max_height,
            self.options.bounds,
            self.options.bounds_by_direction,
            session.direction,
            &session.snapshots,
            &extents,
        );

        if let Some(snap_x) = self.options.snap.x.as_deref() {
            new_width = find_closest_snap(new_width, snap_x, self.options.snap_gap);
        }
        if let Some(snap_y) = self.options.snap.y.as_deref() {
            new_height = find_closest_snap(new_height, snap_y, self.options.snap_gap);
        }

        let clamped = constraint::clamp_to_limits(
            new_width,
            new_height,
            (limits.min_width, limits.min_height),
            (max_width, max_height),
            lock,
        );
        new_width = clamped.width;
        new_height = clamped.height;

        // Grid snapping is sticky rather than absolute: the grid value only
        // wins within snap_gap of a grid line (a gap of 0 always snaps).
        let grid_width = snap_to_grid(new_width, self.options.grid[0], self.options.grid_gap[0]);
        let grid_height = snap_to_grid(new_height, self.options.grid[1], self.options.grid_gap[1]);
        let gap = self.options.snap_gap;
        if gap == 0.0 || (grid_width - new_width).abs() <= gap {
            new_width = grid_width;
        }
        if gap == 0.0 || (grid_height - new_height).abs() <= gap {
            new_height = grid_height;
        }

        // The hook delta stays pixel-denominated, measured before the echo.
        let delta = NumberSize::new(new_width, new_height).delta_from(session.original);

        let width = echo_declared_unit(self.state.width, new_width, parent_size.width, viewport);
        let height = echo_declared_unit(self.state.height, new_height, parent_size.height, viewport);

        let props_size = self.props_size();
        let width = preserve_auto(width, self.state.width, session.original.width, props_size.width);
        let height = preserve_auto(height, self.state.height, session.original.height, props_size.height);

        let flex_basis = match session.flex_direction {
            Some(FlexDirection::Row) => Some(width),
            Some(FlexDirection::Column) => Some(height),
            None => None,
        };

        let changed = width != self.state.width
            || height != self.state.height
            || flex_basis != self.state.flex_basis;

        if changed {
            // Committed synchronously so the box never lags the pointer by
            // more than one input event.
            self.state.width = width;
            self.state.height = height;
            self.state.flex_basis = flex_basis;
            trace!(width = %width, height = %height, "resize step committed");
            if let Some(hook) = self.callbacks.on_resize.as_mut() {
                hook(event, session.direction, delta);
            }
        }
        changed
    }

    fn aspect_lock(&self, session: &DragSession) -> Option<AspectLock> {
        self.options.lock_aspect_ratio.is_locked().then(|| AspectLock {
            ratio: session.ratio,
            extra_width: self.options.lock_aspect_ratio_extra_width,
            extra_height: self.options.lock_aspect_ratio_extra_height,
        })
    }
}

/// Raw new size from the pointer delta along the session's direction.
/// Trailing edges (right/bottom) grow with the pointer, leading edges
/// (left/top) grow against it. Under a lock the other axis is derived, so a
/// corner drag still has a single degree of freedom.
fn directional_size(
    session: &DragSession,
    pointer: Point,
    scale: f32,
    (ratio_x, ratio_y): (f32, f32),
    lock: Option<AspectLock>,
) -> (f32, f32) {
    let original = session.original;
    let direction = session.direction;
    let dx = pointer.x - session.origin.x;
    let dy = pointer.y - session.origin.y;
    let mut width = original.width;
    let mut height = original.height;

    if direction.has_right() {
        width = original.width + (dx * ratio_x) / scale;
        if let Some(lock) = lock {
            height = lock.height_for_width(width);
        }
    }
    if direction.has_left() {
        width = original.width - (dx * ratio_x) / scale;
        if let Some(lock) = lock {
            height = lock.height_for_width(width);
        }
    }
    if direction.has_bottom() {
        height = original.height + (dy * ratio_y) / scale;
        if let Some(lock) = lock {
            width = lock.width_for_height(height);
        }
    }
    if direction.has_top() {
        height = original.height - (dy * ratio_y) / scale;
        if let Some(lock) = lock {
            width = lock.width_for_height(height);
        }
    }
    (width, height)
}

/// Re-express a pixel result in the unit the declared value currently uses,
/// against the live parent/viewport extents. Pixel and auto declarations
/// materialize as pixels (auto handling comes after, in `preserve_auto`).
fn echo_declared_unit(
    declared: Dimension,
    new_value: f32,
    parent_extent: f32,
    viewport: NumberSize,
) -> Dimension {
    match declared {
        Dimension::Percent(_) => Dimension::Percent(new_value / parent_extent * 100.0),
        Dimension::Vw(_) => Dimension::Vw(new_value / viewport.width * 100.0),
        Dimension::Vh(_) => Dimension::Vh(new_value / viewport.height * 100.0),
        _ => Dimension::Px(new_value),
    }
}

/// Keep an `auto` box auto when the drag did not actually change its size:
/// materializing a pixel value would wrongly pin a box the host wants
/// content-sized. Exact equality is intentional; any real movement differs.
fn preserve_auto(
    candidate: Dimension,
    declared: Dimension,
    original: f32,
    configured: Dimension,
) -> Dimension {
    match candidate {
        Dimension::Px(v) if declared.is_auto() && v == original && configured.is_auto() => {
            Dimension::Auto
        }
        other => other,
    }
}
