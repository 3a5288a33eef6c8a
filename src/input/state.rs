//! Resize state machine - the idle/resizing lifecycle and per-drag session.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Resizing   (pointer down on an active handle, not vetoed)
//! Resizing -> Resizing   (pointer move - recompute size)
//! Resizing -> Idle       (pointer up / pointer leave / touch end)
//! ```
//!
//! Pointer listeners are held exactly while in `Resizing`; both transitions
//! out of `Idle` and back are the only places they are bound and released.

use crate::geometry::Point;
use crate::types::{Direction, FlexDirection, NumberSize, RectSnapshots};

/// Everything a drag session needs, captured once at resize-start and
/// discarded at resize-end. Keeping these in a per-session value (rather
/// than long-lived widget fields) makes stale-session reads impossible:
/// there is no session data to read outside a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// The handle the drag started from. Fixed for the session.
    pub direction: Direction,
    /// Pointer position at drag start, in viewport coordinates.
    pub origin: Point,
    /// The box's resolved pixel size at drag start.
    pub original: NumberSize,
    /// Locked width/height ratio, captured once: the explicit configured
    /// ratio, or the box's ratio at start. Only consulted when the lock is on.
    pub ratio: f32,
    /// Dominant flex axis of the host layout, when the box is a flex item.
    pub flex_direction: Option<FlexDirection>,
    /// Bounding rectangles snapshotted at start (pre-divided by scale).
    pub snapshots: RectSnapshots,
}

/// The interaction lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ResizeState {
    /// No active drag
    #[default]
    Idle,
    /// A drag is in progress; listeners are bound
    Resizing(DragSession),
}

impl ResizeState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing(_))
    }

    /// The active session, if resizing.
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Resizing(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Direction of the active drag, if resizing.
    pub fn direction(&self) -> Option<Direction> {
        self.session().map(|s| s.direction)
    }

    /// Enter `Resizing` with a fresh session.
    pub fn start(&mut self, session: DragSession) {
        *self = Self::Resizing(session);
    }

    /// Return to `Idle`, dropping any session.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
