//! Size/style projection - turning widget state back into the host's units.
//!
//! The engine computes in pixels; the host declared its size in whatever
//! unit it wanted. This module produces the presentational size record the
//! host applies to its element, keeping the declared unit sticky: a box
//! configured in percent keeps reading as a percent of the *live* parent
//! size even after a pixel-based drag.

use serde::Serialize;

use crate::host::HostSurface;
use crate::types::Dimension;
use crate::widget::Resizable;

/// The presentational size for the host to apply.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SizeStyle {
    pub width: Dimension,
    pub height: Dimension,
    /// Set when the host layout is flex-based and the resized dimension is
    /// mirrored into the flex basis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_basis: Option<Dimension>,
}

impl<H: HostSurface> Resizable<H> {
    /// The size the host should present right now.
    ///
    /// A controlled `size` wins while idle; during a drag the live state
    /// wins so the box tracks the pointer. A pixel state value under a
    /// percent-configured axis is re-expressed against the live parent.
    pub fn size_style(&self) -> SizeStyle {
        let controlled = self.options.size.filter(|_| !self.is_resizing());
        let (width, height) = match controlled {
            Some(size) => (size.width, size.height),
            None => (
                self.project_axis(self.state.width, self.props_size().width, true),
                self.project_axis(self.state.height, self.props_size().height, false),
            ),
        };
        SizeStyle { width, height, flex_basis: self.state.flex_basis }
    }

    fn project_axis(&self, declared: Dimension, configured: Dimension, horizontal: bool) -> Dimension {
        if declared.is_auto() {
            return Dimension::Auto;
        }
        if matches!(configured, Dimension::Percent(_)) {
            if matches!(declared, Dimension::Percent(_)) {
                return declared;
            }
            if let Some(px) = declared.as_px() {
                let parent = self.parent_size_or_viewport();
                let extent = if horizontal { parent.width } else { parent.height };
                return Dimension::Percent(px / extent * 100.0);
            }
        }
        declared
    }
}
