// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed field access for transition components.

use core::fmt;

use trellis_layout::{Axis, Coordinate, Dimension, Placement};

/// A named getter/setter pair for one field of type `V` inside a `T`.
///
/// Lenses are plain function pointers, so they are `Copy` and carry no state.
/// The name identifies the field: two lenses with the same name and value type
/// address the same component of a [`Transition`](crate::Transition).
pub struct Lens<T, V> {
    name: &'static str,
    get: fn(&T) -> V,
    set: fn(&mut T, V),
}

impl<T, V> Clone for Lens<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Lens<T, V> {}

impl<T, V> fmt::Debug for Lens<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Lens").field(&self.name).finish()
    }
}

impl<T, V> Lens<T, V> {
    /// Create a lens from a field name and its accessors.
    #[must_use]
    pub const fn new(name: &'static str, get: fn(&T) -> V, set: fn(&mut T, V)) -> Self {
        Self { name, get, set }
    }

    /// Field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Read the field.
    pub fn get(&self, target: &T) -> V {
        (self.get)(target)
    }

    /// Write the field.
    pub fn set(&self, target: &mut T, value: V) {
        (self.set)(target, value);
    }
}

/// An element whose placement and alpha multiplier can be animated.
pub trait Animatable {
    /// Declared placement.
    fn placement(&self) -> &Placement;
    /// Declared placement, mutably.
    fn placement_mut(&mut self) -> &mut Placement;
    /// Alpha multiplier applied to this element and its subtree.
    fn alpha_mult(&self) -> f64;
    /// Replace the alpha multiplier.
    fn set_alpha_mult(&mut self, alpha_mult: f64);
}

fn x_of<T: Animatable>(target: &T) -> Coordinate {
    target.placement().x
}

fn set_x<T: Animatable>(target: &mut T, value: Coordinate) {
    target.placement_mut().x = value;
}

fn y_of<T: Animatable>(target: &T) -> Coordinate {
    target.placement().y
}

fn set_y<T: Animatable>(target: &mut T, value: Coordinate) {
    target.placement_mut().y = value;
}

fn width_of<T: Animatable>(target: &T) -> Dimension {
    target.placement().width
}

fn set_width<T: Animatable>(target: &mut T, value: Dimension) {
    target.placement_mut().width = value;
}

fn height_of<T: Animatable>(target: &T) -> Dimension {
    target.placement().height
}

fn set_height<T: Animatable>(target: &mut T, value: Dimension) {
    target.placement_mut().height = value;
}

fn alpha_mult_of<T: Animatable>(target: &T) -> f64 {
    target.alpha_mult()
}

fn set_alpha_mult<T: Animatable>(target: &mut T, value: f64) {
    target.set_alpha_mult(value);
}

/// A lens onto a layout field, paired with the axis that field lies on.
///
/// Layout fields interpolate in pixels against the parent's extent on this
/// axis, so the axis travels with the lens instead of being passed beside it.
pub struct AxisLens<T, V> {
    axis: Axis,
    lens: Lens<T, V>,
}

impl<T, V> Clone for AxisLens<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for AxisLens<T, V> {}

impl<T, V> fmt::Debug for AxisLens<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisLens")
            .field("axis", &self.axis)
            .field("name", &self.lens.name)
            .finish()
    }
}

impl<T, V> AxisLens<T, V> {
    /// Pair `lens` with the axis its field lies on.
    #[must_use]
    pub const fn new(axis: Axis, lens: Lens<T, V>) -> Self {
        Self { axis, lens }
    }

    /// Axis of the field.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The underlying lens.
    #[must_use]
    pub const fn lens(&self) -> Lens<T, V> {
        self.lens
    }
}

impl<T: Animatable> AxisLens<T, Coordinate> {
    /// Horizontal position.
    #[must_use]
    pub fn x() -> Self {
        Self::new(Axis::X, Lens::new("x", x_of::<T>, set_x::<T>))
    }

    /// Vertical position.
    #[must_use]
    pub fn y() -> Self {
        Self::new(Axis::Y, Lens::new("y", y_of::<T>, set_y::<T>))
    }
}

impl<T: Animatable> AxisLens<T, Dimension> {
    /// Width.
    #[must_use]
    pub fn width() -> Self {
        Self::new(Axis::X, Lens::new("width", width_of::<T>, set_width::<T>))
    }

    /// Height.
    #[must_use]
    pub fn height() -> Self {
        Self::new(Axis::Y, Lens::new("height", height_of::<T>, set_height::<T>))
    }
}

impl<T: Animatable> Lens<T, f64> {
    /// Alpha multiplier.
    #[must_use]
    pub fn alpha_mult() -> Self {
        Self::new("alpha_mult", alpha_mult_of::<T>, set_alpha_mult::<T>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_layout::Anchor;

    #[derive(Default)]
    struct Knob {
        placement: Placement,
        alpha_mult: f64,
    }

    impl Animatable for Knob {
        fn placement(&self) -> &Placement {
            &self.placement
        }
        fn placement_mut(&mut self) -> &mut Placement {
            &mut self.placement
        }
        fn alpha_mult(&self) -> f64 {
            self.alpha_mult
        }
        fn set_alpha_mult(&mut self, alpha_mult: f64) {
            self.alpha_mult = alpha_mult;
        }
    }

    #[test]
    fn placement_lenses_address_their_fields() {
        let mut knob = Knob::default();
        AxisLens::<Knob, Coordinate>::y()
            .lens()
            .set(&mut knob, Coordinate::pixels(3.0, Anchor::Max));
        AxisLens::<Knob, Dimension>::width()
            .lens()
            .set(&mut knob, Dimension::Pixels(8.0));
        Lens::<Knob, f64>::alpha_mult().set(&mut knob, 0.25);

        assert_eq!(knob.placement.y, Coordinate::pixels(3.0, Anchor::Max));
        assert_eq!(knob.placement.x, Coordinate::CENTER);
        assert_eq!(knob.placement.width, Dimension::Pixels(8.0));
        assert_eq!(knob.alpha_mult, 0.25);
        assert_eq!(
            AxisLens::<Knob, Dimension>::height().lens().get(&knob),
            Dimension::FILL
        );
    }

    #[test]
    fn names_identify_fields() {
        assert_eq!(AxisLens::<Knob, Coordinate>::x().lens().name(), "x");
        assert_eq!(Lens::<Knob, f64>::alpha_mult().name(), "alpha_mult");
        let custom = Lens::new("alpha", |k: &Knob| k.alpha_mult, |k: &mut Knob, v| k.alpha_mult = v);
        assert_eq!(format!("{custom:?}"), "Lens(\"alpha\")");
    }

    #[test]
    fn layout_lenses_carry_their_axis() {
        assert_eq!(AxisLens::<Knob, Coordinate>::x().axis(), Axis::X);
        assert_eq!(AxisLens::<Knob, Coordinate>::y().axis(), Axis::Y);
        assert_eq!(AxisLens::<Knob, Dimension>::width().axis(), Axis::X);
        assert_eq!(AxisLens::<Knob, Dimension>::height().axis(), Axis::Y);
        let custom = AxisLens::new(
            Axis::Y,
            Lens::new("top", |k: &Knob| k.placement.y, |k: &mut Knob, v| k.placement.y = v),
        );
        assert_eq!(
            format!("{custom:?}"),
            "AxisLens { axis: Y, name: \"top\" }"
        );
    }
}
