//! Host-surface abstraction.
//!
//! The engine never touches ambient globals. Every environment read — box
//! measurement, parent and viewport extents, flex context — and the global
//! pointer-listener scope goes through this trait, implemented by the
//! embedding adapter. That keeps the core headless-testable: tests drive it
//! with a fake surface instead of a windowing system.

use crate::geometry::Rect;
use crate::types::{FlexContext, NumberSize};

/// Environment capabilities supplied by the embedding host.
///
/// Measurement methods are expected to be cheap; the engine calls
/// `parent_size` and `viewport_size` on every pointer move. Rectangle
/// methods are only called at drag start (the session caches them).
pub trait HostSurface {
    /// The box's current rendered size in pixels (its layout truth, which
    /// may differ from the last computed size if the host re-laid-out).
    fn element_size(&self) -> NumberSize;

    /// The box's bounding rectangle in viewport coordinates.
    fn element_rect(&self) -> Rect;

    /// The parent box's live content size. `None` when the box is
    /// unparented; the engine then falls back to the viewport.
    fn parent_size(&self) -> Option<NumberSize>;

    /// The parent box's bounding rectangle in viewport coordinates.
    fn parent_rect(&self) -> Option<Rect>;

    /// The bounding rectangle of the host-designated external boundary box,
    /// for `BoundsTarget::External`.
    fn bounds_rect(&self) -> Option<Rect>;

    /// The viewport size (window inner extents).
    fn viewport_size(&self) -> NumberSize;

    /// Flex-layout facts for the box, when its computed flex-basis is not
    /// `auto`. `None` outside a flex layout.
    fn flex_context(&self) -> Option<FlexContext>;

    /// Acquire pointer-move/up/leave listeners at the widest scope the host
    /// has (a window equivalent). Called exactly once per drag session.
    fn bind_pointer_listeners(&mut self);

    /// Release the listeners acquired by `bind_pointer_listeners`. Called on
    /// every session exit path.
    fn unbind_pointer_listeners(&mut self);
}

/// A surface with no windowing environment behind it.
///
/// All geometry reads short-circuit to zero and listener management is a
/// no-op, mirroring how the widget behaves when rendered without a display
/// (e.g. server-side). Also serves as the reference fake for headless tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedSurface;

impl HostSurface for DetachedSurface {
    fn element_size(&self) -> NumberSize {
        NumberSize::default()
    }

    fn element_rect(&self) -> Rect {
        Rect::default()
    }

    fn parent_size(&self) -> Option<NumberSize> {
        None
    }

    fn parent_rect(&self) -> Option<Rect> {
        None
    }

    fn bounds_rect(&self) -> Option<Rect> {
        None
    }

    fn viewport_size(&self) -> NumberSize {
        NumberSize::default()
    }

    fn flex_context(&self) -> Option<FlexContext> {
        None
    }

    fn bind_pointer_listeners(&mut self) {}

    fn unbind_pointer_listeners(&mut self) {}
}
