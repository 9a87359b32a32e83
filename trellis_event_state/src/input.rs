// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame input snapshot.

use kurbo::{Point, Size};

bitflags::bitflags! {
    /// Modifier keys held during this frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Either shift key.
        const SHIFT = 0b0000_0001;
        /// Either control key.
        const CTRL  = 0b0000_0010;
        /// Either alt/option key.
        const ALT   = 0b0000_0100;
        /// Either super/command/windows key.
        const SUPER = 0b0000_1000;
    }
}

/// Cursor, primary button and modifier state for one frame.
///
/// The host calls [`set_mouse_state`](Self::set_mouse_state) exactly once per
/// frame, before updating the tree, so that
/// [`just_pressed`](Self::just_pressed) and
/// [`just_released`](Self::just_released) describe the edge between the
/// previous frame and this one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    /// Cursor position in cursor space: window center origin, +Y down.
    pub cursor: Point,
    /// Primary button held this frame.
    pub pressed: bool,
    /// Primary button held last frame.
    pub pressed_last: bool,
    /// Modifier keys held this frame.
    pub modifiers: Modifiers,
}

impl InputState {
    /// Cursor at the window center, nothing pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a top-left-origin window position into cursor space.
    #[must_use]
    pub fn cursor_from_window(position: Point, window_size: Size) -> Point {
        Point::new(
            position.x - window_size.width * 0.5,
            position.y - window_size.height * 0.5,
        )
    }

    /// Record this frame's cursor position and button state.
    pub fn set_mouse_state(&mut self, cursor: Point, pressed: bool) {
        self.pressed_last = self.pressed;
        self.cursor = cursor;
        self.pressed = pressed;
        if self.just_pressed() || self.just_released() {
            tracing::trace!(x = cursor.x, y = cursor.y, pressed, "primary button edge");
        }
    }

    /// Replace the held modifiers.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Button went down since last frame.
    #[must_use]
    pub fn just_pressed(&self) -> bool {
        self.pressed && !self.pressed_last
    }

    /// Button went up since last frame.
    #[must_use]
    pub fn just_released(&self) -> bool {
        !self.pressed && self.pressed_last
    }

    /// The cursor in layout space (+Y up), ready for hit-testing against
    /// resolved rectangles.
    #[must_use]
    pub fn cursor_in_layout_space(&self) -> Point {
        Point::new(self.cursor.x, -self.cursor.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_edges_need_a_frame_boundary() {
        let mut input = InputState::new();
        input.set_mouse_state(Point::ZERO, true);
        assert!(input.just_pressed());
        input.set_mouse_state(Point::ZERO, true);
        assert!(!input.just_pressed(), "held, not pressed again");
        assert!(!input.just_released());
        input.set_mouse_state(Point::ZERO, false);
        assert!(input.just_released());
        input.set_mouse_state(Point::ZERO, false);
        assert!(!input.just_released());
    }

    #[test]
    fn layout_space_flips_y() {
        let mut input = InputState::new();
        input.set_mouse_state(Point::new(12.0, 30.0), false);
        assert_eq!(input.cursor_in_layout_space(), Point::new(12.0, -30.0));
    }

    #[test]
    fn window_positions_center_on_origin() {
        let window = Size::new(640.0, 480.0);
        assert_eq!(
            InputState::cursor_from_window(Point::new(320.0, 240.0), window),
            Point::ZERO
        );
        assert_eq!(
            InputState::cursor_from_window(Point::ZERO, window),
            Point::new(-320.0, -240.0)
        );
    }

    #[test]
    fn modifiers_combine() {
        let mut input = InputState::new();
        input.set_modifiers(Modifiers::SHIFT | Modifiers::CTRL);
        assert!(input.modifiers.contains(Modifiers::CTRL));
        assert!(!input.modifiers.contains(Modifiers::ALT));
    }
}
