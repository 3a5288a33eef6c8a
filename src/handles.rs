//! The handle layer: eight directional grab zones around the box.
//!
//! Edges are thin bands centered on each side; corners are squares centered
//! on each corner and stacked above the edges, so a pointer landing where a
//! corner overlaps an edge resolves to the corner. The host renders whatever
//! visuals it wants inside these zones; the engine only cares about their
//! geometry and the direction each one maps to.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CORNER_HANDLE_OFFSET, CORNER_HANDLE_SIZE, EDGE_HANDLE_OFFSET, EDGE_HANDLE_THICKNESS,
};
use crate::geometry::{Point, Rect};
use crate::types::Direction;

/// Per-direction enable map for the eight handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnableHandles {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
    pub top_left: bool,
}

impl Default for EnableHandles {
    fn default() -> Self {
        Self::all()
    }
}

impl EnableHandles {
    /// All eight handles active (the default).
    pub const fn all() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
            top_right: true,
            bottom_right: true,
            bottom_left: true,
            top_left: true,
        }
    }

    /// No handles active; the widget becomes inert.
    pub const fn none() -> Self {
        Self {
            top: false,
            right: false,
            bottom: false,
            left: false,
            top_right: false,
            bottom_right: false,
            bottom_left: false,
            top_left: false,
        }
    }

    /// Only the given direction active.
    pub fn only(direction: Direction) -> Self {
        let mut enable = Self::none();
        enable.set(direction, true);
        enable
    }

    pub fn is_enabled(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
            Direction::TopRight => self.top_right,
            Direction::BottomRight => self.bottom_right,
            Direction::BottomLeft => self.bottom_left,
            Direction::TopLeft => self.top_left,
        }
    }

    pub fn set(&mut self, direction: Direction, enabled: bool) {
        match direction {
            Direction::Top => self.top = enabled,
            Direction::Right => self.right = enabled,
            Direction::Bottom => self.bottom = enabled,
            Direction::Left => self.left = enabled,
            Direction::TopRight => self.top_right = enabled,
            Direction::BottomRight => self.bottom_right = enabled,
            Direction::BottomLeft => self.bottom_left = enabled,
            Direction::TopLeft => self.top_left = enabled,
        }
    }

    /// Active directions in declaration order (edges first, then corners).
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.is_enabled(*d))
    }

    pub fn count(&self) -> usize {
        self.directions().count()
    }
}

/// Pointer cursor shown over a handle and captured into the interaction
/// overlay while a drag is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    #[default]
    Auto,
    RowResize,
    ColResize,
    NeResize,
    NwResize,
    SeResize,
    SwResize,
}

/// The resize cursor for a handle direction.
pub fn cursor_for(direction: Direction) -> Cursor {
    match direction {
        Direction::Top | Direction::Bottom => Cursor::RowResize,
        Direction::Left | Direction::Right => Cursor::ColResize,
        Direction::TopRight => Cursor::NeResize,
        Direction::TopLeft => Cursor::NwResize,
        Direction::BottomRight => Cursor::SeResize,
        Direction::BottomLeft => Cursor::SwResize,
    }
}

/// The grab zone for `direction` on a box occupying `element_rect`.
///
/// Edge bands span the full side and straddle the edge by half their
/// thickness; corner squares straddle the corner by half their size.
pub fn handle_zone(direction: Direction, element_rect: Rect) -> Rect {
    let Rect { left, top, right, bottom } = element_rect;
    match direction {
        Direction::Top => Rect::from_origin_size(
            left,
            top - EDGE_HANDLE_OFFSET,
            element_rect.width(),
            EDGE_HANDLE_THICKNESS,
        ),
        Direction::Bottom => Rect::from_origin_size(
            left,
            bottom - EDGE_HANDLE_OFFSET,
            element_rect.width(),
            EDGE_HANDLE_THICKNESS,
        ),
        Direction::Left => Rect::from_origin_size(
            left - EDGE_HANDLE_OFFSET,
            top,
            EDGE_HANDLE_THICKNESS,
            element_rect.height(),
        ),
        Direction::Right => Rect::from_origin_size(
            right - EDGE_HANDLE_OFFSET,
            top,
            EDGE_HANDLE_THICKNESS,
            element_rect.height(),
        ),
        Direction::TopRight => Rect::from_origin_size(
            right - CORNER_HANDLE_OFFSET,
            top - CORNER_HANDLE_OFFSET,
            CORNER_HANDLE_SIZE,
            CORNER_HANDLE_SIZE,
        ),
        Direction::BottomRight => Rect::from_origin_size(
            right - CORNER_HANDLE_OFFSET,
            bottom - CORNER_HANDLE_OFFSET,
            CORNER_HANDLE_SIZE,
            CORNER_HANDLE_SIZE,
        ),
        Direction::BottomLeft => Rect::from_origin_size(
            left - CORNER_HANDLE_OFFSET,
            bottom - CORNER_HANDLE_OFFSET,
            CORNER_HANDLE_SIZE,
            CORNER_HANDLE_SIZE,
        ),
        Direction::TopLeft => Rect::from_origin_size(
            left - CORNER_HANDLE_OFFSET,
            top - CORNER_HANDLE_OFFSET,
            CORNER_HANDLE_SIZE,
            CORNER_HANDLE_SIZE,
        ),
    }
}

/// One active handle's geometry and cursor, for host-side rendering.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HandleLayout {
    pub direction: Direction,
    pub zone: Rect,
    pub cursor: Cursor,
}

/// The topmost active handle under `point`, or `None`.
///
/// Corners are checked before edges, matching the stacking order of the
/// rendered zones.
pub fn hit_test(element_rect: Rect, point: Point, enable: &EnableHandles) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .rev()
        .filter(|d| enable.is_enabled(*d))
        .find(|d| handle_zone(*d, element_rect).contains(point))
}
