//! Session teardown - final delta, listener release, controlled snap-back.

use tracing::debug;

use crate::host::HostSurface;
use crate::types::PointerEvent;
use crate::widget::{InteractionOverlay, Resizable};

impl<H: HostSurface> Resizable<H> {
    /// End the active drag session. A pointer-up while idle is a no-op, so
    /// stray releases (and the pointer-leave safety net re-firing) are safe.
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> bool {
        let Some(session) = self.state.resize.session().copied() else {
            return false;
        };

        // Release the listener scope before anything can re-enter: a
        // released listener must never fire against a torn-down session.
        self.host.unbind_pointer_listeners();
        self.state.resize.reset();

        // The final delta comes from the actually rendered size; the host's
        // layout may have adjusted the last committed value.
        let delta = self.host.element_size().delta_from(session.original);
        if let Some(hook) = self.callbacks.on_resize_stop.as_mut() {
            hook(event, session.direction, delta);
        }

        // A controlled size is authoritative: the drag result is provisional
        // until the host re-affirms it through its own state.
        if let Some(size) = self.options.size {
            self.state.width = size.width;
            self.state.height = size.height;
        }

        self.state.overlay = InteractionOverlay::default();
        debug!(
            direction = %session.direction,
            delta_width = delta.width,
            delta_height = delta.height,
            "resize stopped"
        );
        true
    }

    /// Safety net for a dropped pointer-up: the pointer leaving the
    /// listening surface ends the session the same way, so the widget can
    /// never stick in the resizing state.
    pub fn handle_pointer_leave(&mut self, event: &PointerEvent) -> bool {
        self.handle_pointer_up(event)
    }
}
