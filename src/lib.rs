//! Host-agnostic interactive resize engine.
//!
//! A host GUI embeds a [`Resizable`] around a rectangular region; the widget
//! turns pointer drags on eight directional handles into constrained
//! width/height changes and reports them through callbacks. The engine never
//! touches ambient globals: every environment read goes through a
//! [`HostSurface`](host::HostSurface) implemented by the embedding adapter,
//! which also makes the whole interaction lifecycle headless-testable.
//!
//! ## Structure
//!
//! - `geometry` - pure numeric helpers (clamp, grid snap, closest snap)
//! - `types` - directions, the declared-unit model, sizes, pointer events
//! - `constraint` - the effective min/max envelope for a drag
//! - `input` - the idle/resizing state machine and the sizing pipeline
//! - `handles` - the eight grab zones, hit testing, cursors
//! - `projection` - presenting state back in the host's units
//! - `host` - the environment capability trait
//! - `widget` - configuration and the `Resizable` assembly
//! - `perf` - profiling instrumentation for the hot path

pub mod constants;
pub mod constraint;
pub mod error;
pub mod geometry;
pub mod handles;
pub mod host;
pub mod input;
pub mod perf;
pub mod projection;
pub mod types;
pub mod widget;

pub use error::ParseDimensionError;
pub use geometry::{PairInput, Point, Rect};
pub use handles::{Cursor, EnableHandles, HandleLayout};
pub use host::{DetachedSurface, HostSurface};
pub use input::{DragSession, ResizeState};
pub use projection::SizeStyle;
pub use types::{
    AspectRatio, BoundsTarget, Dimension, Direction, FlexContext, FlexDirection, NumberSize,
    PointerEvent, PointerSource, Size, SnapPoints,
};
pub use widget::{InteractionOverlay, Resizable, ResizableOptions, WidgetState};
