//! Pointer input handling for the resize widget.
//!
//! This module implements the interaction lifecycle: a pointer-down on a
//! handle opens a drag session, every pointer-move recomputes the declared
//! size under the active constraints, and pointer-up (or the pointer
//! leaving the surface) closes the session.
//!
//! ## Architecture
//!
//! The lifecycle is an explicit state machine (`ResizeState`) with exactly
//! two states, idle and resizing. Everything a drag needs — direction,
//! pointer origin, original size, locked ratio, rectangle snapshots — lives
//! in a `DragSession` value created at start and dropped at end, so no
//! stale per-drag data can leak between sessions.
//!
//! ## Modules
//!
//! - `state` - Resize state machine and the per-drag session value
//! - `pointer_down` - Drag initiation (veto hook, session capture, listener binding)
//! - `drag` - Pointer-move recomputation (the core sizing pipeline)
//! - `pointer_up` - Session teardown (final delta, listener release)

mod drag;
mod pointer_down;
mod pointer_up;
mod state;

pub use state::{DragSession, ResizeState};
