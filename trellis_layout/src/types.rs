// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small shared vocabulary: anchors and axes.

use kurbo::{Point, Size};

/// Reference point on an axis: the min edge, the center, or the max edge.
///
/// For a [`Coordinate`](crate::Coordinate) the anchor is used twice: it picks the
/// point on the parent a pixel offset is measured from, and the point on the
/// element itself that the resolved position refers to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Left edge on X, bottom edge on Y.
    Min,
    /// Center of the span.
    #[default]
    Center,
    /// Right edge on X, top edge on Y.
    Max,
}

impl Anchor {
    /// Shift from this anchor point to the center of a span of `extent`.
    #[must_use]
    pub fn center_offset(self, extent: f64) -> f64 {
        match self {
            Self::Min => extent * 0.5,
            Self::Center => 0.0,
            Self::Max => -extent * 0.5,
        }
    }
}

/// One of the two layout axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// The perpendicular axis.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Component of `size` along this axis.
    #[must_use]
    pub fn of_size(self, size: Size) -> f64 {
        match self {
            Self::X => size.width,
            Self::Y => size.height,
        }
    }

    /// Component of `point` along this axis.
    #[must_use]
    pub fn of_point(self, point: Point) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_offset_moves_toward_center() {
        assert_eq!(Anchor::Min.center_offset(10.0), 5.0);
        assert_eq!(Anchor::Center.center_offset(10.0), 0.0);
        assert_eq!(Anchor::Max.center_offset(10.0), -5.0);
    }

    #[test]
    fn axis_components() {
        let size = Size::new(3.0, 4.0);
        assert_eq!(Axis::X.of_size(size), 3.0);
        assert_eq!(Axis::Y.of_size(size), 4.0);
        assert_eq!(Axis::X.other(), Axis::Y);
        assert_eq!(Axis::Y.of_point(Point::new(1.0, 2.0)), 2.0);
    }
}
