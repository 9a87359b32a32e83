// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated field descriptors and their per-frame interpolation.

use kurbo::{Size, Vec2};
use trellis_layout::{Anchor, Axis, Coordinate, Dimension};

use crate::lens::{AxisLens, Lens};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Copy {
    /// Value at `t` of the way from `self` to `target`.
    #[must_use]
    fn lerp(self, target: Self, t: f64) -> Self;
}

fn lerp_scalar(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

impl Lerp for f64 {
    fn lerp(self, target: Self, t: f64) -> Self {
        lerp_scalar(self, target, t)
    }
}

impl Lerp for Vec2 {
    fn lerp(self, target: Self, t: f64) -> Self {
        Self::new(lerp_scalar(self.x, target.x, t), lerp_scalar(self.y, target.y, t))
    }
}

impl<const N: usize> Lerp for [f64; N] {
    fn lerp(self, target: Self, t: f64) -> Self {
        core::array::from_fn(|i| lerp_scalar(self[i], target[i], t))
    }
}

/// Kind of value a transition component animates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A [`Coordinate`] field.
    Coordinate,
    /// A [`Dimension`] field.
    Dimension,
    /// An `f64` field.
    Float,
    /// A [`Vec2`] field.
    Vec2,
    /// An `[f64; 3]` field.
    Vec3,
    /// An `[f64; 4]` field, usually a color.
    Vec4,
}

/// One field's lens plus its captured original and declared target.
pub(crate) struct Track<T, V> {
    pub(crate) lens: Lens<T, V>,
    pub(crate) original: V,
    pub(crate) target: V,
}

impl<T, V: Copy> Clone for Track<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V: Copy> Copy for Track<T, V> {}

impl<T, V: Copy> Track<T, V> {
    /// A track whose original equals its target until captured.
    fn new(lens: Lens<T, V>, target: V) -> Self {
        Self {
            lens,
            original: target,
            target,
        }
    }

    fn capture(&mut self, element: &T) {
        self.original = self.lens.get(element);
    }
}

impl<T, V: Lerp> Track<T, V> {
    fn apply(&self, element: &mut T, eased: f64, finished: bool) {
        let value = if finished {
            self.target
        } else {
            self.original.lerp(self.target, eased)
        };
        self.lens.set(element, value);
    }
}

/// A single animated field.
pub(crate) enum Component<T> {
    Coordinate {
        axis: Axis,
        track: Track<T, Coordinate>,
    },
    Dimension {
        axis: Axis,
        track: Track<T, Dimension>,
    },
    Float(Track<T, f64>),
    Vec2(Track<T, Vec2>),
    Vec3(Track<T, [f64; 3]>),
    Vec4(Track<T, [f64; 4]>),
}

impl<T> Clone for Component<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Component<T> {}

impl<T> Component<T> {
    pub(crate) fn coordinate(lens: AxisLens<T, Coordinate>, target: Coordinate) -> Self {
        Self::Coordinate {
            axis: lens.axis(),
            track: Track::new(lens.lens(), target),
        }
    }

    pub(crate) fn dimension(lens: AxisLens<T, Dimension>, target: Dimension) -> Self {
        Self::Dimension {
            axis: lens.axis(),
            track: Track::new(lens.lens(), target),
        }
    }

    pub(crate) fn float(lens: Lens<T, f64>, target: f64) -> Self {
        Self::Float(Track::new(lens, target))
    }

    pub(crate) fn vec2(lens: Lens<T, Vec2>, target: Vec2) -> Self {
        Self::Vec2(Track::new(lens, target))
    }

    pub(crate) fn vec3(lens: Lens<T, [f64; 3]>, target: [f64; 3]) -> Self {
        Self::Vec3(Track::new(lens, target))
    }

    pub(crate) fn vec4(lens: Lens<T, [f64; 4]>, target: [f64; 4]) -> Self {
        Self::Vec4(Track::new(lens, target))
    }

    pub(crate) fn kind(&self) -> ValueKind {
        match self {
            Self::Coordinate { .. } => ValueKind::Coordinate,
            Self::Dimension { .. } => ValueKind::Dimension,
            Self::Float(_) => ValueKind::Float,
            Self::Vec2(_) => ValueKind::Vec2,
            Self::Vec3(_) => ValueKind::Vec3,
            Self::Vec4(_) => ValueKind::Vec4,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Coordinate { track, .. } => track.lens.name(),
            Self::Dimension { track, .. } => track.lens.name(),
            Self::Float(track) => track.lens.name(),
            Self::Vec2(track) => track.lens.name(),
            Self::Vec3(track) => track.lens.name(),
            Self::Vec4(track) => track.lens.name(),
        }
    }

    /// Whether `other` animates the same field.
    pub(crate) fn same_field(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.name() == other.name()
    }

    /// Snapshot the element's current value as the original.
    pub(crate) fn capture(&mut self, element: &T) {
        match self {
            Self::Coordinate { track, .. } => track.capture(element),
            Self::Dimension { track, .. } => track.capture(element),
            Self::Float(track) => track.capture(element),
            Self::Vec2(track) => track.capture(element),
            Self::Vec3(track) => track.capture(element),
            Self::Vec4(track) => track.capture(element),
        }
    }

    /// Write this frame's value into the element.
    ///
    /// Layout values are compared in pixels: both ends resolve against
    /// `parent_size` and `own_size`, and in-between frames are written as
    /// centered pixel coordinates or pixel dimensions. The final frame writes
    /// the exact target.
    pub(crate) fn apply(
        &self,
        element: &mut T,
        eased: f64,
        finished: bool,
        parent_size: Size,
        own_size: Size,
    ) {
        match self {
            Self::Coordinate { axis, track } => {
                let value = if finished {
                    track.target
                } else {
                    let parent = axis.of_size(parent_size);
                    let own = axis.of_size(own_size);
                    let from = track.original.resolve(0.0, parent, own);
                    let to = track.target.resolve(0.0, parent, own);
                    Coordinate::pixels(lerp_scalar(from, to, eased), Anchor::Center)
                };
                track.lens.set(element, value);
            }
            Self::Dimension { axis, track } => {
                let value = if finished {
                    track.target
                } else {
                    let parent = axis.of_size(parent_size);
                    let other = axis.other().of_size(own_size);
                    let from = track.original.resolve_against(parent, other);
                    let to = track.target.resolve_against(parent, other);
                    Dimension::Pixels(lerp_scalar(from, to, eased))
                };
                track.lens.set(element, value);
            }
            Self::Float(track) => track.apply(element, eased, finished),
            Self::Vec2(track) => track.apply(element, eased, finished),
            Self::Vec3(track) => track.apply(element, eased, finished),
            Self::Vec4(track) => track.apply(element, eased, finished),
        }
    }
}
