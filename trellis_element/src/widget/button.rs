// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Push buttons.

use trellis_event_state::{Event, InputState};
use trellis_layout::ResolvedRect;
use trellis_transition::Transition;

use crate::context::Action;
use crate::element::Element;
use crate::widget::Panel;

/// Pointer relationship between a button and the cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ButtonState {
    /// Cursor elsewhere.
    Base,
    /// Cursor over the button, primary button up.
    Hovered,
    /// Cursor over the button, primary button down.
    Held,
}

/// A panel that reports clicks and animates between pointer states.
///
/// Each state has a transition that starts when the button enters it. Hover
/// tracking ignores `active`, so an inactive button still animates; only the
/// click is suppressed.
#[derive(Clone, Debug)]
pub struct Button {
    /// Appearance.
    pub panel: Panel,
    /// Id reported in [`Action::Clicked`], or `None` for a silent button.
    pub id: Option<u32>,
    /// Plays when the cursor leaves.
    pub base: Transition<Element>,
    /// Plays when the cursor enters or the button is let go over it.
    pub hover: Transition<Element>,
    /// Plays when the button is pressed.
    pub hold: Transition<Element>,
    state: Option<ButtonState>,
}

impl Button {
    /// A button reporting clicks with `id`.
    #[must_use]
    pub fn new(id: u32, panel: Panel) -> Self {
        Self {
            panel,
            id: Some(id),
            base: Transition::default(),
            hover: Transition::default(),
            hold: Transition::default(),
            state: Some(ButtonState::Base),
        }
    }

    /// A button that animates but never reports clicks.
    #[must_use]
    pub fn silent(panel: Panel) -> Self {
        Self {
            id: None,
            ..Self::new(0, panel)
        }
    }

    /// Set the per-state transitions.
    #[must_use]
    pub fn with_transitions(
        mut self,
        base: Transition<Element>,
        hover: Transition<Element>,
        hold: Transition<Element>,
    ) -> Self {
        self.base = base;
        self.hover = hover;
        self.hold = hold;
        self
    }

    /// Current pointer state, if known.
    #[must_use]
    pub fn state(&self) -> Option<ButtonState> {
        self.state
    }

    /// Forget the current state so the matching transition replays next frame.
    ///
    /// Call this after replacing a transition to have it take effect without
    /// waiting for the cursor to move.
    pub fn refresh_transitions(&mut self) {
        self.state = None;
    }

    /// Advance the state machine from last frame's rectangle.
    pub(crate) fn track_pointer(
        &mut self,
        rect: ResolvedRect,
        input: &InputState,
    ) -> Option<Transition<Element>> {
        let next = if rect.contains(input.cursor_in_layout_space()) {
            if input.pressed {
                ButtonState::Held
            } else {
                ButtonState::Hovered
            }
        } else {
            ButtonState::Base
        };
        if self.state == Some(next) {
            return None;
        }
        self.state = Some(next);
        Some(match next {
            ButtonState::Base => self.base.clone(),
            ButtonState::Hovered => self.hover.clone(),
            ButtonState::Held => self.hold.clone(),
        })
    }

    pub(crate) fn on_event(&self, hovered: bool, event: &Event, actions: &mut Vec<Action>) {
        if *event != Event::MouseRelease || !hovered {
            return;
        }
        if let Some(id) = self.id {
            tracing::debug!(id, "button clicked");
            actions.push(Action::Clicked { id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Size};

    fn rect() -> ResolvedRect {
        ResolvedRect::new(Point::ZERO, Size::new(20.0, 20.0))
    }

    fn input_at(cursor: Point, pressed: bool) -> InputState {
        let mut input = InputState::new();
        input.set_mouse_state(cursor, pressed);
        input
    }

    #[test]
    fn state_changes_start_one_transition_each() {
        let mut button = Button::new(1, Panel::default());
        let inside = input_at(Point::new(1.0, 1.0), false);
        let held = input_at(Point::new(1.0, 1.0), true);
        let outside = input_at(Point::new(50.0, 0.0), false);

        assert!(button.track_pointer(rect(), &outside).is_none(), "starts in base");
        assert!(button.track_pointer(rect(), &inside).is_some());
        assert_eq!(button.state(), Some(ButtonState::Hovered));
        assert!(button.track_pointer(rect(), &inside).is_none());
        assert!(button.track_pointer(rect(), &held).is_some());
        assert_eq!(button.state(), Some(ButtonState::Held));
        assert!(button.track_pointer(rect(), &outside).is_some());
        assert_eq!(button.state(), Some(ButtonState::Base));
    }

    #[test]
    fn refresh_replays_current_state() {
        let mut button = Button::new(1, Panel::default());
        let outside = input_at(Point::new(50.0, 0.0), false);
        button.refresh_transitions();
        assert!(button.track_pointer(rect(), &outside).is_some());
        assert!(button.track_pointer(rect(), &outside).is_none());
    }

    #[test]
    fn silent_button_reports_nothing() {
        let mut actions = Vec::new();
        Button::silent(Panel::default()).on_event(true, &Event::MouseRelease, &mut actions);
        Button::new(4, Panel::default()).on_event(false, &Event::MouseRelease, &mut actions);
        Button::new(5, Panel::default()).on_event(true, &Event::Character('x'), &mut actions);
        assert!(actions.is_empty());
        Button::new(6, Panel::default()).on_event(true, &Event::MouseRelease, &mut actions);
        assert_eq!(actions, [Action::Clicked { id: 6 }]);
    }
}
