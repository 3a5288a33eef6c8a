//! Widget assembly: configuration, widget state, and the `Resizable` object.
//!
//! `Resizable` ties the pieces together: it owns the host surface handle,
//! the configuration, the widget state, and the lifecycle callbacks. The
//! pointer handlers live in the `input` module as impl blocks on this type.

use crate::geometry::{PairInput, Point};
use crate::handles::{self, Cursor, EnableHandles, HandleLayout};
use crate::host::HostSurface;
use crate::input::ResizeState;
use crate::types::{
    AspectRatio, BoundsTarget, Dimension, Direction, NumberSize, PointerEvent, Size, SnapPoints,
};
use crate::constants::{DEFAULT_GRID, DEFAULT_GRID_GAP, DEFAULT_RESIZE_RATIO, DEFAULT_SCALE, DEFAULT_SNAP_GAP};

// ============================================================================
// Callbacks
// ============================================================================

/// Resize-start hook. Returning `false` vetoes the drag: no state change,
/// no listeners bound.
pub type ResizeStartCallback = Box<dyn FnMut(&PointerEvent, Direction) -> bool>;

/// Resize / resize-stop hook. The `NumberSize` argument is the pixel delta
/// from the session's original size.
pub type ResizeCallback = Box<dyn FnMut(&PointerEvent, Direction, NumberSize)>;

#[derive(Default)]
pub(crate) struct Callbacks {
    pub on_resize_start: Option<ResizeStartCallback>,
    pub on_resize: Option<ResizeCallback>,
    pub on_resize_stop: Option<ResizeCallback>,
}

// ============================================================================
// Configuration
// ============================================================================

/// The full configuration surface of the widget. All fields have usable
/// defaults; hosts set what they need.
#[derive(Clone, Debug)]
pub struct ResizableOptions {
    /// Authoritative declared size (controlled usage). While set, drag
    /// results are provisional until the host re-affirms them.
    pub size: Option<Size>,
    /// Initial declared size (uncontrolled usage).
    pub default_size: Option<Size>,
    pub min_width: Option<Dimension>,
    pub min_height: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub max_height: Option<Dimension>,
    pub lock_aspect_ratio: AspectRatio,
    /// Non-ratio chrome width around a ratio-locked content box.
    pub lock_aspect_ratio_extra_width: f32,
    /// Non-ratio chrome height around a ratio-locked content box.
    pub lock_aspect_ratio_extra_height: f32,
    /// Grid step per axis. The 1px default rounds sizes to whole pixels.
    pub grid: [f32; 2],
    /// Cumulative gap between grid cells per axis.
    pub grid_gap: [f32; 2],
    /// Explicit snap coordinates per axis.
    pub snap: SnapPoints,
    /// Capture distance for snap coordinates and grid stickiness; 0 means
    /// snap points capture unconditionally and the grid always applies.
    pub snap_gap: f32,
    /// What the drag may not extend past.
    pub bounds: Option<BoundsTarget>,
    /// Measure the near-edge boundary from the dragged edge instead of the
    /// box's fixed corner.
    pub bounds_by_direction: bool,
    /// Which handles are active.
    pub enable: EnableHandles,
    /// Zoom factor of an ancestor transform; pointer deltas are divided by
    /// this so visual pixels map back to layout pixels.
    pub scale: f32,
    /// Drag sensitivity multiplier, uniform or per-axis.
    pub resize_ratio: PairInput<f32>,
}

impl Default for ResizableOptions {
    fn default() -> Self {
        Self {
            size: None,
            default_size: None,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            lock_aspect_ratio: AspectRatio::Unlocked,
            lock_aspect_ratio_extra_width: 0.0,
            lock_aspect_ratio_extra_height: 0.0,
            grid: DEFAULT_GRID,
            grid_gap: DEFAULT_GRID_GAP,
            snap: SnapPoints::default(),
            snap_gap: DEFAULT_SNAP_GAP,
            bounds: None,
            bounds_by_direction: false,
            enable: EnableHandles::all(),
            scale: DEFAULT_SCALE,
            resize_ratio: PairInput::Uniform(DEFAULT_RESIZE_RATIO),
        }
    }
}

// ============================================================================
// Widget State
// ============================================================================

/// Style record for the full-surface interaction overlay shown while a drag
/// is active. The overlay keeps the grab cursor stable as the pointer leaves
/// the handle and swallows hover effects underneath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionOverlay {
    pub active: bool,
    pub cursor: Cursor,
}

/// The widget's externally observable state.
#[derive(Debug, Default)]
pub struct WidgetState {
    pub(crate) resize: ResizeState,
    /// Current declared width, in the host's unit.
    pub width: Dimension,
    /// Current declared height, in the host's unit.
    pub height: Dimension,
    pub overlay: InteractionOverlay,
    /// Mirror of the resized dimension when the host layout is flex-based.
    pub flex_basis: Option<Dimension>,
}

// ============================================================================
// The Widget
// ============================================================================

/// The resize widget. Generic over the host surface so it runs identically
/// under a real windowing adapter and a test fake.
pub struct Resizable<H: HostSurface> {
    pub(crate) host: H,
    pub(crate) options: ResizableOptions,
    pub(crate) state: WidgetState,
    pub(crate) callbacks: Callbacks,
}

impl<H: HostSurface> Resizable<H> {
    pub fn new(host: H, options: ResizableOptions) -> Self {
        let initial = options.size.or(options.default_size).unwrap_or_default();
        Self {
            host,
            state: WidgetState {
                width: initial.width,
                height: initial.height,
                ..WidgetState::default()
            },
            options,
            callbacks: Callbacks::default(),
        }
    }

    /// Register the resize-start veto hook.
    pub fn on_resize_start(
        mut self,
        hook: impl FnMut(&PointerEvent, Direction) -> bool + 'static,
    ) -> Self {
        self.callbacks.on_resize_start = Some(Box::new(hook));
        self
    }

    /// Register the per-move resize hook. Invoked only when a move actually
    /// changed the committed size.
    pub fn on_resize(
        mut self,
        hook: impl FnMut(&PointerEvent, Direction, NumberSize) + 'static,
    ) -> Self {
        self.callbacks.on_resize = Some(Box::new(hook));
        self
    }

    /// Register the resize-stop hook.
    pub fn on_resize_stop(
        mut self,
        hook: impl FnMut(&PointerEvent, Direction, NumberSize) + 'static,
    ) -> Self {
        self.callbacks.on_resize_stop = Some(Box::new(hook));
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn options(&self) -> &ResizableOptions {
        &self.options
    }

    /// Reconfigure the widget. Takes effect on the next interaction; an
    /// active session keeps the spatial frame it captured at start.
    pub fn options_mut(&mut self) -> &mut ResizableOptions {
        &mut self.options
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn is_resizing(&self) -> bool {
        self.state.resize.is_resizing()
    }

    /// Direction of the active drag, if any.
    pub fn direction(&self) -> Option<Direction> {
        self.state.resize.direction()
    }

    /// The current declared size.
    pub fn declared_size(&self) -> Size {
        Size { width: self.state.width, height: self.state.height }
    }

    pub fn flex_basis(&self) -> Option<Dimension> {
        self.state.flex_basis
    }

    pub fn overlay(&self) -> InteractionOverlay {
        self.state.overlay
    }

    /// Imperatively replace the declared size, outside of any drag.
    pub fn update_size(&mut self, size: Size) {
        self.state.width = size.width;
        self.state.height = size.height;
    }

    /// The topmost active handle under `point`, in viewport coordinates.
    pub fn hit_test(&self, point: Point) -> Option<Direction> {
        handles::hit_test(self.host.element_rect(), point, &self.options.enable)
    }

    /// Zone geometry and cursor for every active handle, for the host to
    /// render grab affordances from.
    pub fn handle_layout(&self) -> Vec<HandleLayout> {
        let rect = self.host.element_rect();
        self.options
            .enable
            .directions()
            .map(|direction| HandleLayout {
                direction,
                zone: handles::handle_zone(direction, rect),
                cursor: handles::cursor_for(direction),
            })
            .collect()
    }

    /// The configured size, falling back to the initial size, falling back
    /// to `auto`. What a drag must preserve when it ends up changing nothing.
    pub(crate) fn props_size(&self) -> Size {
        self.options.size.or(self.options.default_size).unwrap_or_default()
    }

    /// The parent's live size, or the viewport when unparented.
    pub(crate) fn parent_size_or_viewport(&self) -> NumberSize {
        self.host.parent_size().unwrap_or_else(|| self.host.viewport_size())
    }
}
