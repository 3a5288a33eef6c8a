//! Drag initiation - veto hook, session capture, listener binding.

use tracing::debug;

use crate::geometry::Point;
use crate::handles;
use crate::host::HostSurface;
use crate::input::state::DragSession;
use crate::types::{AspectRatio, Direction, PointerEvent, RectSnapshots};
use crate::widget::{InteractionOverlay, Resizable};

impl<H: HostSurface> Resizable<H> {
    /// Route a raw pointer-down through the handle layer: hit-test the
    /// active zones and start a drag on the matched direction.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        match self.hit_test(event.position) {
            Some(direction) => self.handle_pointer_down(direction, event),
            None => false,
        }
    }

    /// Start a drag session in `direction`. Returns `false` when the
    /// resize-start hook vetoes, in which case nothing changes and no
    /// listeners are bound.
    pub fn handle_pointer_down(&mut self, direction: Direction, event: &PointerEvent) -> bool {
        // The veto hook runs before any state change.
        if let Some(hook) = self.callbacks.on_resize_start.as_mut() {
            if !hook(event, direction) {
                debug!(direction = %direction, "resize start vetoed");
                return false;
            }
        }

        // Sessions never overlap: an unfinished one is torn down first.
        if self.state.resize.is_resizing() {
            self.host.unbind_pointer_listeners();
            self.state.resize.reset();
        }

        // A controlled host re-asserts its declared size before the session
        // captures anything, so the drag starts from the declared truth.
        if let Some(size) = self.options.size {
            if self.state.width != size.width {
                self.state.width = size.width;
            }
            if self.state.height != size.height {
                self.state.height = size.height;
            }
        }

        let original = self.host.element_size();
        let ratio = match self.options.lock_aspect_ratio {
            AspectRatio::Fixed(ratio) => ratio,
            _ => original.width / original.height,
        };
        let flex = self.host.flex_context();

        let session = DragSession {
            direction,
            origin: event.position,
            original,
            ratio,
            flex_direction: flex.map(|f| f.direction),
            snapshots: self.snapshot_rects(),
        };

        self.host.bind_pointer_listeners();
        self.state.flex_basis = flex.map(|f| f.basis);
        self.state.overlay = InteractionOverlay {
            active: true,
            cursor: handles::cursor_for(direction),
        };
        self.state.resize.start(session);
        debug!(
            direction = %direction,
            width = original.width,
            height = original.height,
            "resize started"
        );
        true
    }

    /// Snapshot the bounding rectangles the session will measure against.
    /// Taken once per drag; divided by `scale` so they line up with the
    /// scale-compensated pointer deltas.
    fn snapshot_rects(&self) -> RectSnapshots {
        let adjusted = 1.0 / self.options.scale;
        RectSnapshots {
            element: self.host.element_rect().scaled(adjusted),
            parent_origin: self
                .host
                .parent_rect()
                .map(|r| Point::new(r.left * adjusted, r.top * adjusted))
                .unwrap_or_default(),
            target_origin: self
                .host
                .bounds_rect()
                .map(|r| Point::new(r.left * adjusted, r.top * adjusted))
                .unwrap_or_default(),
        }
    }
}
