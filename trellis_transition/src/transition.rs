// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transition engine.

use core::fmt;

use kurbo::{Size, Vec2};
use smallvec::SmallVec;
use trellis_layout::{Coordinate, Dimension};

use crate::component::{Component, ValueKind};
use crate::easing::Easing;
use crate::lens::{Animatable, AxisLens, Lens};

/// Where a [`Transition`] is in its lifetime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Built but not yet initialized against an element.
    #[default]
    Idle,
    /// Initialized; waiting out the start delay.
    Delayed,
    /// Interpolating toward the targets.
    Animating,
    /// All targets written. Further updates do nothing.
    Finished,
}

/// A timed animation of one or more fields of a `T`.
///
/// Build it with the `set_target_*` methods, attach it to an element, call
/// [`init`](Self::init) once, then [`update`](Self::update) every frame until it
/// returns `false`.
///
/// Setting a target for a field that already has one replaces the earlier
/// target; a field is never animated twice by the same transition.
pub struct Transition<T> {
    duration: f64,
    easing: Easing,
    components: SmallVec<[Component<T>; 4]>,
    alpha: f64,
    delay: f64,
    phase: Phase,
}

impl<T> Clone for Transition<T> {
    fn clone(&self) -> Self {
        Self {
            duration: self.duration,
            easing: self.easing,
            components: self.components.clone(),
            alpha: self.alpha,
            delay: self.delay,
            phase: self.phase,
        }
    }
}

impl<T> fmt::Debug for Transition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("phase", &self.phase)
            .field("alpha", &self.alpha)
            .field("delay", &self.delay)
            .field(
                "components",
                &self.components.iter().map(Component::name).collect::<SmallVec<[_; 4]>>(),
            )
            .finish()
    }
}

impl<T> Default for Transition<T> {
    /// One second, linear.
    fn default() -> Self {
        Self::new(1000.0, Easing::Linear)
    }
}

impl<T> Transition<T> {
    /// Create an empty transition lasting `duration` milliseconds.
    ///
    /// A duration of zero or less completes on the first animating update.
    #[must_use]
    pub fn new(duration: f64, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            components: SmallVec::new(),
            alpha: 0.0,
            delay: 0.0,
            phase: Phase::Idle,
        }
    }

    fn upsert(&mut self, component: Component<T>) -> &mut Self {
        match self.components.iter_mut().find(|c| c.same_field(&component)) {
            Some(existing) => *existing = component,
            None => self.components.push(component),
        }
        self
    }

    /// Animate a position field toward `target`, interpolating in pixels
    /// along the lens's axis.
    pub fn set_target_coordinate(
        &mut self,
        lens: AxisLens<T, Coordinate>,
        target: Coordinate,
    ) -> &mut Self {
        self.upsert(Component::coordinate(lens, target))
    }

    /// Animate a size field toward `target`, interpolating in pixels along the
    /// lens's axis.
    pub fn set_target_dimension(
        &mut self,
        lens: AxisLens<T, Dimension>,
        target: Dimension,
    ) -> &mut Self {
        self.upsert(Component::dimension(lens, target))
    }

    /// Animate an `f64` field toward `target`.
    pub fn set_target_float(&mut self, lens: Lens<T, f64>, target: f64) -> &mut Self {
        self.upsert(Component::float(lens, target))
    }

    /// Animate a [`Vec2`] field toward `target`.
    pub fn set_target_vec2(&mut self, lens: Lens<T, Vec2>, target: Vec2) -> &mut Self {
        self.upsert(Component::vec2(lens, target))
    }

    /// Animate an `[f64; 3]` field toward `target`.
    pub fn set_target_vec3(&mut self, lens: Lens<T, [f64; 3]>, target: [f64; 3]) -> &mut Self {
        self.upsert(Component::vec3(lens, target))
    }

    /// Animate an `[f64; 4]` field toward `target`.
    pub fn set_target_vec4(&mut self, lens: Lens<T, [f64; 4]>, target: [f64; 4]) -> &mut Self {
        self.upsert(Component::vec4(lens, target))
    }

    /// Snapshot the current value of every animated field and arm the clock.
    ///
    /// `delay` is in milliseconds. Calling `init` again restarts the transition
    /// from the element's values at that moment.
    pub fn init(&mut self, element: &T, delay: f64) {
        for component in &mut self.components {
            component.capture(element);
        }
        self.alpha = 0.0;
        self.delay = delay;
        self.phase = if delay > 0.0 {
            Phase::Delayed
        } else {
            Phase::Animating
        };
        tracing::trace!(
            components = self.components.len(),
            duration = self.duration,
            delay,
            "transition initialized"
        );
    }

    /// Advance by `dt` milliseconds and write this frame's values.
    ///
    /// `parent_size` and `own_size` are the element's current resolved parent
    /// and own sizes, used to bring layout fields into pixels. Returns whether
    /// the transition is still active. The update that reaches the end writes
    /// every target exactly and returns `false`.
    pub fn update(&mut self, dt: f64, element: &mut T, parent_size: Size, own_size: Size) -> bool {
        debug_assert!(
            self.phase != Phase::Idle,
            "transition updated before init"
        );
        match self.phase {
            Phase::Finished => return false,
            Phase::Idle => {
                tracing::warn!("transition updated before init; targets animate from themselves");
                self.phase = Phase::Animating;
            }
            Phase::Delayed | Phase::Animating => {}
        }

        if self.delay > 0.0 {
            self.delay -= dt;
            return true;
        }
        self.phase = Phase::Animating;

        self.alpha = if self.duration > 0.0 {
            (self.alpha + dt / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let finished = self.alpha >= 1.0;
        let eased = self.easing.apply(self.alpha);
        for component in &self.components {
            component.apply(element, eased, finished, parent_size, own_size);
        }

        if finished {
            self.phase = Phase::Finished;
            tracing::trace!(components = self.components.len(), "transition finished");
        }
        !finished
    }

    /// Raw progress in `[0, 1]`.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Progress after easing.
    #[must_use]
    pub fn eased_alpha(&self) -> f64 {
        self.easing.apply(self.alpha)
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether `update` would still do work.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Finished
    }

    /// Duration in milliseconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Easing curve.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Milliseconds of start delay still to wait, never negative.
    #[must_use]
    pub fn remaining_delay(&self) -> f64 {
        self.delay.max(0.0)
    }

    /// Number of animated fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no field is animated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Kind and name of each animated field, in insertion order.
    pub fn components(&self) -> impl Iterator<Item = (ValueKind, &'static str)> + '_ {
        self.components.iter().map(|c| (c.kind(), c.name()))
    }
}

impl<T: Animatable> Transition<T> {
    /// Animate the horizontal position.
    pub fn set_target_x(&mut self, target: Coordinate) -> &mut Self {
        self.set_target_coordinate(AxisLens::x(), target)
    }

    /// Animate the vertical position.
    pub fn set_target_y(&mut self, target: Coordinate) -> &mut Self {
        self.set_target_coordinate(AxisLens::y(), target)
    }

    /// Animate the width.
    pub fn set_target_width(&mut self, target: Dimension) -> &mut Self {
        self.set_target_dimension(AxisLens::width(), target)
    }

    /// Animate the height.
    pub fn set_target_height(&mut self, target: Dimension) -> &mut Self {
        self.set_target_dimension(AxisLens::height(), target)
    }

    /// Animate the alpha multiplier.
    pub fn set_target_alpha_mult(&mut self, target: f64) -> &mut Self {
        self.set_target_float(Lens::alpha_mult(), target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_layout::{Anchor, Placement};

    #[derive(Default)]
    struct Dot {
        placement: Placement,
        alpha_mult: f64,
        value: f64,
        tint: [f64; 4],
    }

    impl Animatable for Dot {
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

    fn value() -> Lens<Dot, f64> {
        Lens::new("value", |d: &Dot| d.value, |d: &mut Dot, v| d.value = v)
    }

    fn tint() -> Lens<Dot, [f64; 4]> {
        Lens::new("tint", |d: &Dot| d.tint, |d: &mut Dot, v| d.tint = v)
    }

    const SIZE: Size = Size::new(100.0, 100.0);

    fn step(t: &mut Transition<Dot>, dot: &mut Dot, dt: f64) -> bool {
        t.update(dt, dot, SIZE, SIZE)
    }

    #[test]
    fn linear_float_reaches_target() {
        let mut dot = Dot::default();
        let mut t = Transition::new(1000.0, Easing::Linear);
        t.set_target_float(value(), 10.0);
        t.init(&dot, 0.0);
        assert_eq!(t.phase(), Phase::Animating);

        assert!(step(&mut t, &mut dot, 250.0));
        assert!(step(&mut t, &mut dot, 250.0));
        assert_eq!(t.alpha(), 0.5);
        assert_eq!(dot.value, 5.0);

        assert!(!step(&mut t, &mut dot, 600.0));
        assert_eq!(dot.value, 10.0);
        assert_eq!(t.alpha(), 1.0);
        assert_eq!(t.phase(), Phase::Finished);

        // Inert afterwards.
        dot.value = -1.0;
        assert!(!step(&mut t, &mut dot, 16.0));
        assert_eq!(dot.value, -1.0);
    }

    #[test]
    fn final_frame_is_exact() {
        let mut dot = Dot {
            value: 0.1,
            ..Dot::default()
        };
        let target = [0.3, 0.7, 1.0 / 3.0, 0.9];
        let mut t = Transition::new(700.0, Easing::Cubic);
        t.set_target_float(value(), 0.7).set_target_vec4(tint(), target);
        t.init(&dot, 0.0);
        let mut frames = 0;
        while step(&mut t, &mut dot, 16.6) {
            frames += 1;
            assert!(frames < 1000);
        }
        assert_eq!(dot.value.to_bits(), 0.7_f64.to_bits());
        assert_eq!(dot.tint, target);
    }

    #[test]
    fn delay_holds_values() {
        let mut dot = Dot::default();
        let mut t = Transition::new(100.0, Easing::Linear);
        t.set_target_float(value(), 1.0);
        t.init(&dot, 50.0);
        assert_eq!(t.phase(), Phase::Delayed);

        assert!(step(&mut t, &mut dot, 30.0));
        assert_eq!(t.remaining_delay(), 20.0);
        assert_eq!(dot.value, 0.0);
        assert!(step(&mut t, &mut dot, 30.0));
        assert_eq!(t.remaining_delay(), 0.0);
        assert_eq!(dot.value, 0.0, "the frame that ends the delay does not animate");

        assert!(step(&mut t, &mut dot, 50.0));
        assert_eq!(t.phase(), Phase::Animating);
        assert_eq!(dot.value, 0.5);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let mut dot = Dot::default();
        let mut first = Transition::new(1000.0, Easing::Linear);
        first.set_target_float(value(), 10.0);
        first.init(&dot, 0.0);
        step(&mut first, &mut dot, 300.0);
        assert_eq!(dot.value, 3.0);

        let mut second = Transition::new(1000.0, Easing::Linear);
        second.set_target_float(value(), 0.0);
        second.init(&dot, 0.0);
        assert!(step(&mut second, &mut dot, 0.0));
        assert_eq!(dot.value, 3.0);
        step(&mut second, &mut dot, 500.0);
        assert_eq!(dot.value, 1.5);
    }

    #[test]
    fn same_field_is_replaced() {
        let mut t: Transition<Dot> = Transition::default();
        t.set_target_float(value(), 1.0)
            .set_target_alpha_mult(0.5)
            .set_target_float(value(), 2.0);
        assert_eq!(t.len(), 2);
        let fields: Vec<_> = t.components().collect();
        assert_eq!(
            fields,
            [(ValueKind::Float, "value"), (ValueKind::Float, "alpha_mult")]
        );

        let mut dot = Dot::default();
        t.init(&dot, 0.0);
        while step(&mut t, &mut dot, 100.0) {}
        assert_eq!(dot.value, 2.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut dot = Dot::default();
        let mut t = Transition::new(0.0, Easing::Exponential);
        t.set_target_alpha_mult(1.0);
        t.init(&dot, 0.0);
        assert!(!step(&mut t, &mut dot, 0.0));
        assert_eq!(dot.alpha_mult, 1.0);
    }

    #[test]
    fn placement_fields_end_on_declared_kind() {
        let mut dot = Dot::default();
        let target_x = Coordinate::pixels(5.0, Anchor::Min);
        let mut t = Transition::new(100.0, Easing::Quadratic);
        t.set_target_x(target_x)
            .set_target_width(Dimension::Pixels(20.0));
        t.init(&dot, 0.0);

        step(&mut t, &mut dot, 50.0);
        assert!(matches!(dot.placement.x.kind, trellis_layout::CoordinateKind::Pixels(_)));
        assert_eq!(dot.placement.x.anchor, Anchor::Center);
        // FILL of 100 px to 20 px, eased 0.75.
        assert_eq!(dot.placement.width, Dimension::Pixels(40.0));

        step(&mut t, &mut dot, 50.0);
        assert_eq!(dot.placement.x, target_x);
        assert_eq!(dot.placement.width, Dimension::Pixels(20.0));
    }

    #[test]
    fn eased_alpha_follows_curve() {
        let mut dot = Dot::default();
        let mut t = Transition::new(100.0, Easing::Quadratic);
        t.set_target_float(value(), 1.0);
        t.init(&dot, 0.0);
        step(&mut t, &mut dot, 50.0);
        assert_eq!(t.eased_alpha(), 0.75);
        assert_eq!(dot.value, 0.75);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "before init")]
    fn update_before_init_panics_in_debug() {
        let mut dot = Dot::default();
        let mut t = Transition::new(100.0, Easing::Linear);
        t.set_target_float(value(), 1.0);
        step(&mut t, &mut dot, 10.0);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn update_before_init_animates_from_target() {
        let mut dot = Dot::default();
        let mut t = Transition::new(100.0, Easing::Linear);
        t.set_target_float(value(), 1.0);
        assert!(step(&mut t, &mut dot, 10.0));
        assert_eq!(dot.value, 1.0);
    }
}
