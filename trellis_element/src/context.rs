// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame context and widget output.

use core::fmt;

use trellis_event_state::InputState;

use crate::render::TextMeasure;

/// Something a widget reports to the host.
///
/// Widgets never call back into application code. They push actions into a
/// sink the host drains after `update` or `handle_event`. Every widget that
/// reacts pushes its own action, so one event can produce several.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    /// A button was released over.
    Clicked {
        /// Id given to the button.
        id: u32,
    },
    /// A checkbox changed state.
    Toggled {
        /// Id given to the checkbox.
        id: u32,
        /// New state.
        checked: bool,
    },
    /// A slider was dragged to a new value.
    ValueChanged {
        /// Id given to the slider.
        id: u32,
        /// New value, already clamped.
        value: f64,
    },
}

impl Action {
    /// Id of the widget that produced this action.
    #[must_use]
    pub fn id(&self) -> u32 {
        match *self {
            Self::Clicked { id } | Self::Toggled { id, .. } | Self::ValueChanged { id, .. } => id,
        }
    }
}

/// What `update` needs from outside the tree for one frame.
pub struct FrameContext<'a> {
    /// This frame's input snapshot.
    pub input: &'a InputState,
    /// Text measurement for labels.
    pub text: &'a dyn TextMeasure,
    /// Actions produced during the update.
    pub actions: Vec<Action>,
}

impl fmt::Debug for FrameContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameContext")
            .field("input", self.input)
            .field("actions", &self.actions)
            .finish_non_exhaustive()
    }
}

impl<'a> FrameContext<'a> {
    /// Create a context with an empty action sink.
    pub fn new(input: &'a InputState, text: &'a dyn TextMeasure) -> Self {
        Self {
            input,
            text,
            actions: Vec::new(),
        }
    }

    /// Drain the actions collected so far.
    pub fn take_actions(&mut self) -> Vec<Action> {
        core::mem::take(&mut self.actions)
    }
}
