// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positions on a single axis.

use crate::types::Anchor;
use crate::util::finite_or_zero;

/// How a [`Coordinate`] measures its position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CoordinateKind {
    /// Fraction of the parent span; `0.5` is the parent's center.
    Relative(f64),
    /// Pixel offset from the parent's anchor point, measured inward for
    /// [`Anchor::Min`] and [`Anchor::Max`].
    Pixels(f64),
}

/// A position on one axis, relative to the parent span.
///
/// Resolution happens in two steps. First a *base* position is found on the
/// parent: for [`CoordinateKind::Relative`] it is `parent_pos + parent_extent * (fraction - 0.5)`,
/// for [`CoordinateKind::Pixels`] it is the offset measured from the parent's
/// anchor point. Then the element's own [`Anchor`] shifts that point to the
/// element's center, using the element's resolved extent.
///
/// This lets one type say both "left edge 8 px from the parent's left edge" and
/// "center 8 px left of the parent's right edge".
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinate {
    /// Measurement mode and its parameter.
    pub kind: CoordinateKind,
    /// Reference point on the parent and on the element.
    pub anchor: Anchor,
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::CENTER
    }
}

impl Coordinate {
    /// Centered in the parent.
    pub const CENTER: Self = Self::relative(0.5, Anchor::Center);

    /// A coordinate at `fraction` of the parent span.
    #[must_use]
    pub const fn relative(fraction: f64, anchor: Anchor) -> Self {
        Self {
            kind: CoordinateKind::Relative(fraction),
            anchor,
        }
    }

    /// A coordinate `offset` pixels from the parent's `anchor` point.
    #[must_use]
    pub const fn pixels(offset: f64, anchor: Anchor) -> Self {
        Self {
            kind: CoordinateKind::Pixels(offset),
            anchor,
        }
    }

    /// The numeric parameter, whatever the kind.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self.kind {
            CoordinateKind::Relative(v) | CoordinateKind::Pixels(v) => v,
        }
    }

    /// Resolve to the pixel position of the element's center.
    ///
    /// `parent_pos` is the parent's center, `parent_extent` its size on this
    /// axis, and `own_extent` the element's already-resolved size on this axis.
    #[must_use]
    pub fn resolve(self, parent_pos: f64, parent_extent: f64, own_extent: f64) -> f64 {
        let half_parent = parent_extent * 0.5;
        let base = match self.kind {
            CoordinateKind::Relative(fraction) => parent_pos + parent_extent * (fraction - 0.5),
            CoordinateKind::Pixels(offset) => match self.anchor {
                Anchor::Min => parent_pos - half_parent + offset,
                Anchor::Center => parent_pos + offset,
                Anchor::Max => parent_pos + half_parent - offset,
            },
        };
        finite_or_zero(base + self.anchor.center_offset(own_extent), "coordinate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pixels_and_half_relative_agree() {
        for (pos, extent, own) in [(0.0, 100.0, 20.0), (-35.0, 640.0, 0.0), (12.5, 3.0, 80.0)] {
            let pixels = Coordinate::pixels(0.0, Anchor::Center).resolve(pos, extent, own);
            let relative = Coordinate::CENTER.resolve(pos, extent, own);
            assert_eq!(pixels, pos, "centered zero offset sits on the parent center");
            assert_eq!(relative, pos, "relative 0.5 sits on the parent center");
        }
    }

    #[test]
    fn relative_spans_parent() {
        let left = Coordinate::relative(0.0, Anchor::Center).resolve(10.0, 100.0, 0.0);
        let right = Coordinate::relative(1.0, Anchor::Center).resolve(10.0, 100.0, 0.0);
        assert_eq!(left, -40.0);
        assert_eq!(right, 60.0);
    }

    #[test]
    fn min_anchor_pins_left_edge() {
        // Parent spans [-50, 50]; element is 20 wide, left edge 5 px in.
        let center = Coordinate::pixels(5.0, Anchor::Min).resolve(0.0, 100.0, 20.0);
        assert_eq!(center, -35.0);
        assert_eq!(center - 10.0, -45.0, "left edge is 5 px inside the parent");
    }

    #[test]
    fn max_anchor_pins_right_edge() {
        let center = Coordinate::pixels(5.0, Anchor::Max).resolve(0.0, 100.0, 20.0);
        assert_eq!(center, 35.0);
        assert_eq!(center + 10.0, 45.0, "right edge is 5 px inside the parent");
    }

    #[test]
    fn relative_with_edge_anchor_shifts_by_own_extent() {
        // Left edge at the parent's center.
        let center = Coordinate::relative(0.5, Anchor::Min).resolve(0.0, 100.0, 30.0);
        assert_eq!(center, 15.0);
    }

    #[test]
    fn value_reports_parameter() {
        assert_eq!(Coordinate::pixels(7.0, Anchor::Max).value(), 7.0);
        assert_eq!(Coordinate::default().value(), 0.5);
    }

    #[test]
    fn resolution_is_deterministic() {
        let c = Coordinate::relative(0.3, Anchor::Max);
        assert_eq!(c.resolve(4.0, 90.0, 12.0), c.resolve(4.0, 90.0, 12.0));
    }
}
