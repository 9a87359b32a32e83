// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-axis placement and the resolved rectangle it produces.

use kurbo::{Point, Rect, Size};

use crate::coordinate::Coordinate;
use crate::dimension::Dimension;
use crate::error::PlacementError;
use crate::types::Axis;

/// Declared position and size of one element.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Placement {
    /// Horizontal position.
    pub x: Coordinate,
    /// Vertical position.
    pub y: Coordinate,
    /// Horizontal size.
    pub width: Dimension,
    /// Vertical size.
    pub height: Dimension,
}

impl Placement {
    /// Create a placement from its four declarations.
    #[must_use]
    pub const fn new(x: Coordinate, y: Coordinate, width: Dimension, height: Dimension) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Position declaration on `axis`.
    #[must_use]
    pub const fn coordinate(&self, axis: Axis) -> Coordinate {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Replace the position declaration on `axis`.
    pub fn set_coordinate(&mut self, axis: Axis, coordinate: Coordinate) {
        match axis {
            Axis::X => self.x = coordinate,
            Axis::Y => self.y = coordinate,
        }
    }

    /// Size declaration on `axis`.
    #[must_use]
    pub const fn dimension(&self, axis: Axis) -> Dimension {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Replace the size declaration on `axis`.
    pub fn set_dimension(&mut self, axis: Axis, dimension: Dimension) {
        match axis {
            Axis::X => self.width = dimension,
            Axis::Y => self.height = dimension,
        }
    }

    /// Check that this placement can be resolved as declared.
    pub fn validate(&self) -> Result<(), PlacementError> {
        if let (Dimension::Aspect(width), Dimension::Aspect(height)) = (self.width, self.height) {
            return Err(PlacementError::BothAxesAspect { width, height });
        }
        let params = [
            ("x", self.x.value()),
            ("y", self.y.value()),
            ("width", self.width.value()),
            ("height", self.height.value()),
        ];
        match params.into_iter().find(|(_, v)| !v.is_finite()) {
            Some((what, _)) => Err(PlacementError::NonFinite { what }),
            None => Ok(()),
        }
    }

    /// Resolve the element's pixel size.
    ///
    /// When one axis is [`Dimension::Aspect`], the other axis resolves first and
    /// the aspect axis is derived from it. Two aspect axes are a declaration bug:
    /// debug builds panic, release builds let the height fill the parent and
    /// derive the width from it.
    #[must_use]
    pub fn resolve_size(&self, parent_size: Size) -> Size {
        debug_assert!(
            !(self.width.is_aspect() && self.height.is_aspect()),
            "width and height are both aspect-coupled: {:?}",
            self
        );
        match (self.width, self.height) {
            (Dimension::Aspect(_), height) => {
                let h = height.resolve(parent_size.height);
                Size::new(self.width.resolve_against(parent_size.width, h), h)
            }
            (width, Dimension::Aspect(_)) => {
                let w = width.resolve(parent_size.width);
                Size::new(w, self.height.resolve_against(parent_size.height, w))
            }
            (width, height) => Size::new(
                width.resolve(parent_size.width),
                height.resolve(parent_size.height),
            ),
        }
    }

    /// Resolve the pixel position of the element's center.
    ///
    /// `own_size` must come from [`resolve_size`](Self::resolve_size) for the
    /// same parent.
    #[must_use]
    pub fn resolve_pos(&self, parent_pos: Point, parent_size: Size, own_size: Size) -> Point {
        Point::new(
            self.x.resolve(parent_pos.x, parent_size.width, own_size.width),
            self.y.resolve(parent_pos.y, parent_size.height, own_size.height),
        )
    }

    /// Resolve size, then position, against `parent`.
    #[must_use]
    pub fn resolve(&self, parent: ResolvedRect) -> ResolvedRect {
        let size = self.resolve_size(parent.size);
        let center = self.resolve_pos(parent.center, parent.size, size);
        ResolvedRect { center, size }
    }
}

/// A resolved element rectangle in layout space: center and size in pixels.
///
/// This is per-frame output. It is recomputed on every update and is never the
/// source of truth for layout.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ResolvedRect {
    /// Center position.
    pub center: Point,
    /// Full size.
    pub size: Size,
}

impl ResolvedRect {
    /// Empty rectangle at the origin.
    pub const ZERO: Self = Self::new(Point::ZERO, Size::ZERO);

    /// Create a rectangle from its center and size.
    #[must_use]
    pub const fn new(center: Point, size: Size) -> Self {
        Self { center, size }
    }

    /// Corner with the smallest coordinates (left, bottom).
    #[must_use]
    pub fn min(&self) -> Point {
        Point::new(
            self.center.x - self.size.width * 0.5,
            self.center.y - self.size.height * 0.5,
        )
    }

    /// Corner with the largest coordinates (right, top).
    #[must_use]
    pub fn max(&self) -> Point {
        Point::new(
            self.center.x + self.size.width * 0.5,
            self.center.y + self.size.height * 0.5,
        )
    }

    /// Axis-aligned [`Rect`] covering the same area.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_points(self.min(), self.max())
    }

    /// Whether `point` (in layout space) lies strictly inside this rectangle.
    ///
    /// Edges are excluded on every side, so two rectangles that only touch never
    /// both contain a point.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let min = self.min();
        let max = self.max();
        point.x > min.x && point.x < max.x && point.y > min.y && point.y < max.y
    }
}
