// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizes on a single axis.

use crate::util::finite_or_zero;

/// A size on one axis, relative to the parent span.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Dimension {
    /// Fraction of the parent span.
    Relative(f64),
    /// Fixed size in pixels.
    Pixels(f64),
    /// Ratio of the element's resolved size on the other axis.
    ///
    /// Only one axis of an element may be aspect-coupled.
    Aspect(f64),
    /// The parent span minus a fixed margin in pixels, never below zero.
    Space(f64),
}

impl Default for Dimension {
    fn default() -> Self {
        Self::FILL
    }
}

impl Dimension {
    /// The full parent span.
    pub const FILL: Self = Self::Relative(1.0);

    /// The numeric parameter, whatever the kind.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Relative(v) | Self::Pixels(v) | Self::Aspect(v) | Self::Space(v) => v,
        }
    }

    /// Whether this is an aspect-coupled size.
    #[must_use]
    pub const fn is_aspect(self) -> bool {
        matches!(self, Self::Aspect(_))
    }

    /// Resolve against the parent span alone.
    ///
    /// An [`Aspect`](Self::Aspect) size has no partner here and resolves to the
    /// full parent span; use [`Placement::resolve_size`](crate::Placement::resolve_size)
    /// or [`resolve_against`](Self::resolve_against) for the coupled rule.
    #[must_use]
    pub fn resolve(self, parent_extent: f64) -> f64 {
        match self {
            Self::Relative(fraction) => finite_or_zero(parent_extent * fraction, "dimension"),
            Self::Pixels(pixels) => finite_or_zero(pixels, "dimension"),
            Self::Aspect(_) => finite_or_zero(parent_extent, "dimension"),
            Self::Space(margin) => finite_or_zero(parent_extent - margin, "dimension").max(0.0),
        }
    }

    /// Resolve with the other axis already known.
    ///
    /// Aspect sizes become `other_extent * ratio`; every other kind ignores
    /// `other_extent`.
    #[must_use]
    pub fn resolve_against(self, parent_extent: f64, other_extent: f64) -> f64 {
        match self {
            Self::Aspect(ratio) => finite_or_zero(other_extent * ratio, "aspect dimension"),
            _ => self.resolve(parent_extent),
        }
    }
}
