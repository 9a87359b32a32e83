// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draggable value sliders.

use trellis_event_state::InputState;
use trellis_layout::{Anchor, Axis, Coordinate, ResolvedRect};

use crate::context::Action;
use crate::element::Element;

/// Index of the knob button among a slider element's children. The track
/// panel comes first.
pub(crate) const KNOB: usize = 1;

/// A value in `[min, max]` chosen by dragging a knob along a track.
///
/// The slider element owns two children, built by
/// [`Element::slider`](crate::Element::slider): a track panel and a knob
/// button. Every frame the knob is positioned from the value, so writing
/// [`value`](Self::value) from outside moves the knob too.
///
/// A drag starts only on a fresh press inside the slider's rectangle and lasts
/// until the primary button is released, wherever the cursor goes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slider {
    /// Id reported in [`Action::ValueChanged`].
    pub id: u32,
    /// Current value.
    pub value: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Slide along Y instead of X. Vertical sliders grow upward.
    pub vertical: bool,
    /// Truncate values to whole numbers.
    pub integral: bool,
    dragging: bool,
}

impl Slider {
    /// A horizontal, continuous slider.
    #[must_use]
    pub fn new(id: u32, value: f64, min: f64, max: f64) -> Self {
        Self {
            id,
            value,
            min,
            max,
            vertical: false,
            integral: false,
            dragging: false,
        }
    }

    /// Slide vertically.
    #[must_use]
    pub fn vertical(mut self) -> Self {
        self.vertical = true;
        self
    }

    /// Only produce whole numbers.
    #[must_use]
    pub fn integral(mut self) -> Self {
        self.integral = true;
        self
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub(crate) fn axis(&self) -> Axis {
        if self.vertical { Axis::Y } else { Axis::X }
    }

    fn normalize(&self, value: f64) -> f64 {
        let value = value.max(self.min).min(self.max);
        if self.integral { value.trunc() } else { value }
    }

    /// Position of the value between `min` and `max`, in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 {
            (self.value - self.min) / span
        } else {
            0.0
        }
    }

    fn value_at(&self, rect: ResolvedRect, cursor: kurbo::Point) -> f64 {
        let axis = self.axis();
        let lo = axis.of_point(rect.min());
        let hi = axis.of_point(rect.max());
        let fraction = if hi > lo {
            (axis.of_point(cursor) - lo) / (hi - lo)
        } else {
            0.0
        };
        self.normalize(self.min + fraction * (self.max - self.min))
    }

    /// Handle dragging and place the knob among `children`.
    pub(crate) fn drive(
        &mut self,
        rect: ResolvedRect,
        active: bool,
        input: &InputState,
        children: &mut [Element],
        actions: &mut Vec<Action>,
    ) {
        let cursor = input.cursor_in_layout_space();
        if !input.pressed {
            self.dragging = false;
        }
        if input.just_pressed() && rect.contains(cursor) {
            self.dragging = true;
        }

        if self.dragging && active {
            let value = self.value_at(rect, cursor);
            if value != self.value {
                self.value = value;
                tracing::debug!(id = self.id, value, "slider moved");
                actions.push(Action::ValueChanged { id: self.id, value });
            }
        }
        self.value = self.normalize(self.value);

        for child in children.iter_mut().take(KNOB + 1) {
            child.active = active;
        }
        if let Some(knob) = children.get_mut(KNOB) {
            let position = Coordinate::relative(self.fraction(), Anchor::Center);
            knob.placement.set_coordinate(self.axis(), position);
        }
    }
}
